//! Result envelopes returned by every tool handler

use flowpilot_core::{Result, ToolError};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The three-part response of a tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Human-readable summary, never empty
    pub text: String,

    /// Machine-readable payload, loosely matching the tool's output schema
    pub data: Value,

    /// Opaque UI description
    pub ui: Value,
}

impl ResultEnvelope {
    /// Start building an envelope
    pub fn builder() -> EnvelopeBuilder {
        EnvelopeBuilder::default()
    }
}

/// How a UI card should be presented by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Full page
    #[default]
    Page,
    /// Inline with the conversation
    Inline,
}

/// A card UI description: a title and a markdown content body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub render_mode: RenderMode,
    pub title: String,
    pub content: String,
}

impl Card {
    /// A card rendered as a full page
    pub fn page(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            render_mode: RenderMode::Page,
            title: title.into(),
            content: content.into(),
        }
    }

    /// A card rendered inline
    pub fn inline(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            render_mode: RenderMode::Inline,
            ..Self::page(title, content)
        }
    }

    /// Produce the opaque UI value embedded in an envelope
    pub fn render(&self) -> Value {
        json!({
            "type": "card",
            "renderMode": self.render_mode,
            "title": self.title,
            "content": self.content,
        })
    }
}

/// Builder for [`ResultEnvelope`]
///
/// Only `text` is mandatory; `data` and `ui` default to `null`.
#[derive(Debug, Default)]
pub struct EnvelopeBuilder {
    text: Option<String>,
    data: Value,
    ui: Value,
}

impl EnvelopeBuilder {
    /// Set the display text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the structured payload
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Set an already rendered UI value
    pub fn ui(mut self, ui: Value) -> Self {
        self.ui = ui;
        self
    }

    /// Render a card into the UI slot
    pub fn card(self, card: &Card) -> Self {
        self.ui(card.render())
    }

    /// Finish the envelope for the named tool
    ///
    /// Fails with [`ToolError::IncompleteEnvelope`] when no non-blank text was set.
    pub fn build(self, tool: &str) -> Result<ResultEnvelope> {
        match self.text {
            Some(text) if !text.trim().is_empty() => Ok(ResultEnvelope {
                text,
                data: self.data,
                ui: self.ui,
            }),
            _ => Err(ToolError::IncompleteEnvelope(tool.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_build_complete_envelope() {
        let card = Card::page("Task Added to Notion", "Successfully added task");
        let envelope = assert_ok!(
            ResultEnvelope::builder()
                .text("Added task")
                .data(json!({"pageId": "abc"}))
                .card(&card)
                .build("add-to-notion")
        );

        assert_eq!(envelope.text, "Added task");
        assert_eq!(envelope.data["pageId"], "abc");
        assert_eq!(
            envelope.ui,
            json!({
                "type": "card",
                "renderMode": "page",
                "title": "Task Added to Notion",
                "content": "Successfully added task",
            })
        );
    }

    #[test]
    fn test_text_is_required() {
        let err = assert_err!(ResultEnvelope::builder().data(json!("x")).build("query-database"));
        assert!(matches!(err, ToolError::IncompleteEnvelope(ref t) if t == "query-database"));

        assert_err!(ResultEnvelope::builder().text("   ").build("query-database"));
    }

    #[test]
    fn test_defaults_are_null() {
        let envelope = ResultEnvelope::builder().text("done").build("t").unwrap();

        assert!(envelope.data.is_null());
        assert!(envelope.ui.is_null());
    }

    #[test]
    fn test_inline_card() {
        let ui = Card::inline("Title", "Body").render();
        assert_eq!(ui["renderMode"], "inline");
    }
}
