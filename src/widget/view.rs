//! The surface the orchestrator draws on.

use super::render::RenderedMessage;
use super::status::StatusView;

/// Everything [`ChatWidget`](super::ChatWidget) needs from a UI.
///
/// The browser implementation lives in `web::dom`; tests use an in-memory
/// recorder.
pub trait ChatView {
    /// Remove the welcome placeholder if it is still present.
    fn remove_welcome(&self);

    /// Append a message to the transcript.
    fn append_message(&self, message: &RenderedMessage);

    /// Scroll the transcript so the newest message is visible.
    fn scroll_to_bottom(&self);

    /// Clear the input control and reset its height.
    fn reset_input(&self);

    /// Apply a status projection to the controls and the indicator.
    fn apply_status(&self, status: &StatusView);

    /// Move keyboard focus to the input control.
    fn focus_input(&self);
}

/// Element ids and classes shared by the page shell and the DOM binding.
pub mod ids {
    pub const TRANSCRIPT: &str = "chat-container";
    pub const FORM: &str = "chat-form";
    pub const INPUT: &str = "user-input";
    pub const SEND_BUTTON: &str = "send-btn";
    pub const STATUS_TEXT: &str = "status-text";
    pub const STATUS_DOT: &str = "status-dot";
    pub const WELCOME_CLASS: &str = "welcome-message";
}
