//! Messages and conversation history.

use serde::{Deserialize, Serialize};

/// Role of the message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person typing into the widget.
    User,
    /// The remote chat service.
    Assistant,
}

impl Role {
    /// Avatar shown next to the message.
    #[must_use]
    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::Assistant => "🤖",
        }
    }

    /// CSS class applied to the message container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "bot",
        }
    }
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered, append-only conversation history.
///
/// Only complete turns are recorded, so the length is always even and the
/// roles alternate starting with [`Role::User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    messages: Vec<Message>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a confirmed exchange: the user prompt, then the reply.
    pub fn record_turn(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.messages.reserve(2);
        self.messages.push(Message::user(prompt));
        self.messages.push(Message::assistant(reply));
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of completed turns.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.messages.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_turn_appends_user_then_assistant() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record_turn("Hello", "Hi");

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns(), 1);
        assert_eq!(history.messages()[0], Message::user("Hello"));
        assert_eq!(history.messages()[1], Message::assistant("Hi"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("ok")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"ok"}"#);
    }

    #[test]
    fn test_role_presentation() {
        assert_eq!(Role::User.css_class(), "user");
        assert_eq!(Role::Assistant.css_class(), "bot");
        assert_ne!(Role::User.avatar(), Role::Assistant.avatar());
    }
}
