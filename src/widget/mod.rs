//! The chat widget core.
//!
//! Everything here is independent of the browser: the DOM is reached through
//! [`ChatView`] and the network through [`ChatClient`], so the whole turn
//! lifecycle runs under plain `cargo test`.
//!
//! # Structure
//!
//! - [`message`]: messages and the append-only history
//! - [`input`]: keyboard submission and auto-grow rules
//! - [`status`]: busy/idle state and its status projection
//! - [`render`] / [`highlight`]: markdown, sanitizing and code highlighting
//! - [`client`]: the chat endpoint client
//! - [`orchestrator`]: [`ChatWidget`], one user turn at a time
//!
//! # Example
//!
//! ```rust
//! use chat_widget::widget::{History, Message};
//!
//! let mut history = History::new();
//! history.record_turn("Hello", "Hi");
//! assert_eq!(history.messages()[0], Message::user("Hello"));
//! ```

pub mod client;
pub mod error;
pub mod highlight;
pub mod input;
pub mod message;
pub mod orchestrator;
pub mod render;
pub mod settings;
pub mod status;
pub mod view;

pub use client::{ChatClient, HttpChatClient};
pub use error::WidgetError;
pub use input::{AutoGrow, InputHeight, KeyAction, KeyPress, classify_key, submission_text};
pub use message::{History, Message, Role};
pub use orchestrator::{ChatWidget, TurnOutcome};
pub use render::{MessageBody, MessageRenderer, RenderedMessage};
pub use settings::{InputSizing, StatusLabels, WidgetSettings};
pub use status::{StatusIndicator, StatusView, UiState};
pub use view::ChatView;
