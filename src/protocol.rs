//! JSON wire types shared by the widget and the companion server.
//!
//! The widget posts a [`ChatRequest`] and expects a [`ChatReply`] back.
//! Failures from the companion server carry an [`ErrorDetail`] body.

use serde::{Deserialize, Serialize};

use crate::widget::Message;

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The new user text, already trimmed.
    pub prompt: String,
    /// Every earlier message, excluding `prompt`.
    #[serde(default)]
    pub history: Vec<Message>,
}

impl ChatRequest {
    /// Build a request from the new prompt and the prior conversation.
    #[must_use]
    pub fn new(prompt: impl Into<String>, history: &[Message]) -> Self {
        Self {
            prompt: prompt.into(),
            history: history.to_vec(),
        }
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant reply as markdown.
    pub response: String,
}

/// Error body returned by the companion server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable description.
    pub detail: String,
}

impl ErrorDetail {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
