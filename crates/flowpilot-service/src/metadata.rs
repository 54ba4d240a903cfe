//! Service metadata advertised alongside the tool catalog

use serde::{Deserialize, Serialize};

/// Descriptive information about the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub title: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub tags: Vec<String>,
    pub logo: String,
}

impl ServiceMetadata {
    /// Metadata of the Flow Pilot service
    pub fn flow_pilot() -> Self {
        Self {
            title: "Flow Pilot Zoom Agent".to_string(),
            description: "A DAIN service providing various productivity tools for task management, meetings, and calendar events".to_string(),
            version: "1.0.0".to_string(),
            author: "Flow Pilot".to_string(),
            tags: ["productivity", "tasks", "calendar", "meetings"]
                .map(String::from)
                .to_vec(),
            logo: "https://cdn-icons-png.flaticon.com/512/3281/3281289.png".to_string(),
        }
    }
}

/// Example queries shown to users, grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleQueries {
    pub category: String,
    pub queries: Vec<String>,
}

impl ExampleQueries {
    /// Example queries of the Flow Pilot service
    pub fn flow_pilot() -> Vec<Self> {
        vec![Self {
            category: "Tasks".to_string(),
            queries: [
                "Add a task to Notion: Review project proposal by Friday",
                "Schedule a team meeting for tomorrow",
                "Get action items from my last meeting",
            ]
            .map(String::from)
            .to_vec(),
        }]
    }
}
