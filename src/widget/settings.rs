//! Widget settings.
//!
//! The companion server embeds these into the page as JSON; the browser side
//! falls back to [`WidgetSettings::default`] when nothing is embedded.

use serde::{Deserialize, Serialize};

/// Element id of the embedded settings `<script>` block.
pub const SETTINGS_ELEMENT_ID: &str = "widget-config";

/// Everything the widget needs to know about its environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Chat endpoint, absolute or relative to the page origin.
    pub endpoint: String,
    /// Heading shown above the transcript.
    pub title: String,
    /// Placeholder text shown until the first message.
    pub welcome: String,
    /// Status and placeholder labels.
    pub labels: StatusLabels,
    /// Input auto-grow bounds.
    pub input: InputSizing,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            endpoint: "/chat".to_string(),
            title: "AI Assistant".to_string(),
            welcome: "Hello! Ask me anything to get started.".to_string(),
            labels: StatusLabels::default(),
            input: InputSizing::default(),
        }
    }
}

impl WidgetSettings {
    /// Serialize for embedding inside a `<script type="application/json">`.
    ///
    /// `<` is escaped so that no value can close the script element.
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }
}

/// Labels for the two UI states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub ready: String,
    pub busy: String,
    pub ready_placeholder: String,
    pub busy_placeholder: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            ready: "Ready".to_string(),
            busy: "Thinking...".to_string(),
            ready_placeholder: "Type your message...".to_string(),
            busy_placeholder: "Waiting for response...".to_string(),
        }
    }
}

/// Height bounds for the auto-growing input, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSizing {
    pub min_height: u32,
    /// `None` lets the input grow without bound.
    pub max_height: Option<u32>,
}

impl Default for InputSizing {
    fn default() -> Self {
        Self {
            min_height: 44,
            max_height: Some(200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: WidgetSettings =
            serde_json::from_str(r#"{"endpoint":"/api/chat","labels":{"busy":"Working"}}"#)
                .unwrap();

        assert_eq!(settings.endpoint, "/api/chat");
        assert_eq!(settings.labels.busy, "Working");
        assert_eq!(settings.labels.ready, "Ready");
        assert_eq!(settings.input, InputSizing::default());
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let settings = WidgetSettings {
            welcome: "</script><script>alert(1)</script>".to_string(),
            ..WidgetSettings::default()
        };

        let json = settings.to_embedded_json().unwrap();
        assert!(!json.contains("</script>"));

        let back: WidgetSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
