//! External endpoints used by the Flow Pilot tools
//!
//! Each tool that delegates to a third party posts to exactly one URL. The defaults
//! point at the hosted automation loops; any of them can be overridden per tool id
//! through [`ServiceConfig`].

use crate::error::Result;
use crate::tools;
use flowpilot_utils::{ConfigError, ServiceConfig};

const LOOP_BASE: &str = "https://magicloops.dev/api/loop";

/// Loop ids of the hosted automations
mod loops {
    pub const MEETING_ACTION_ITEMS: &str = "e0243b5d-0f4a-4341-a57e-33ce9dddf1ac";
    pub const NOTION_TASK: &str = "0fae0e40-97cf-42d5-bd8c-40bc1a696c32";
    pub const CALENDAR_EVENT: &str = "a02fc62a-a664-4e44-a2d8-79c2ac7c7779";
    pub const ZOOM_MEETING: &str = "3d16aa92-7b25-415a-ad37-b5f9a33815a6";
    pub const PRESENTATION: &str = "e5b710f4-9d2e-4493-ba09-81f98eb9523b";
    pub const AUDIO: &str = "5ce6905a-e6aa-47c7-854d-f40c5c14e1e2";
}

fn loop_url(id: &str) -> String {
    format!("{LOOP_BASE}/{id}/run")
}

/// One URL per tool that performs an external call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub meeting_action_items: String,
    pub add_to_notion: String,
    pub calendar_event: String,
    pub zoom_meeting: String,
    pub presentation: String,
    pub text_to_speech: String,
    pub generate_audio: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            meeting_action_items: loop_url(loops::MEETING_ACTION_ITEMS),
            add_to_notion: loop_url(loops::NOTION_TASK),
            calendar_event: loop_url(loops::CALENDAR_EVENT),
            zoom_meeting: loop_url(loops::ZOOM_MEETING),
            presentation: loop_url(loops::PRESENTATION),
            text_to_speech: loop_url(loops::AUDIO),
            generate_audio: loop_url(loops::AUDIO),
        }
    }
}

impl Endpoints {
    /// Defaults with the overrides from `config` applied
    ///
    /// An override naming a tool without an external endpoint is rejected.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let mut endpoints = Self::default();
        for (tool_id, url) in config.endpoint_overrides() {
            let slot = endpoints.slot_mut(tool_id).ok_or_else(|| ConfigError::Invalid {
                key: tool_id.clone(),
                reason: "no tool with an external endpoint has this id".to_string(),
            })?;
            *slot = url.clone();
        }
        Ok(endpoints)
    }

    /// Endpoint of a tool, if it performs an external call
    pub fn get(&self, tool_id: &str) -> Option<&str> {
        let url = match tool_id {
            tools::meeting_action_items::ID => &self.meeting_action_items,
            tools::add_to_notion::ID => &self.add_to_notion,
            tools::calendar_event::ID => &self.calendar_event,
            tools::zoom_meeting::ID => &self.zoom_meeting,
            tools::presentation::ID => &self.presentation,
            tools::text_to_speech::ID => &self.text_to_speech,
            tools::generate_audio::ID => &self.generate_audio,
            _ => return None,
        };
        Some(url.as_str())
    }

    fn slot_mut(&mut self, tool_id: &str) -> Option<&mut String> {
        let slot = match tool_id {
            tools::meeting_action_items::ID => &mut self.meeting_action_items,
            tools::add_to_notion::ID => &mut self.add_to_notion,
            tools::calendar_event::ID => &mut self.calendar_event,
            tools::zoom_meeting::ID => &mut self.zoom_meeting,
            tools::presentation::ID => &mut self.presentation,
            tools::text_to_speech::ID => &mut self.text_to_speech,
            tools::generate_audio::ID => &mut self.generate_audio,
            _ => return None,
        };
        Some(slot)
    }
}
