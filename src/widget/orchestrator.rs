//! Conversation orchestrator.

use std::cell::{Cell, RefCell};

use tracing::{debug, error, info};

use super::client::ChatClient;
use super::error::WidgetError;
use super::input::submission_text;
use super::message::{History, Role};
use super::render::MessageRenderer;
use super::settings::{StatusLabels, WidgetSettings};
use super::status::{StatusIndicator, UiState};
use super::view::ChatView;
use crate::protocol::ChatRequest;

/// How a call to [`ChatWidget::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing to send after trimming.
    Empty,
    /// An exchange was already in flight; nothing happened.
    Busy,
    /// The reply was rendered and the turn recorded.
    Answered,
    /// The error was rendered; history is unchanged.
    Failed(WidgetError),
}

/// The chat widget: owns the history and the busy flag for one page.
///
/// All state lives in `Cell`/`RefCell`, so `submit` takes `&self` and the
/// widget can be shared through an `Rc` by event handlers. No borrow is held
/// across the network await.
#[derive(Debug)]
pub struct ChatWidget<C, V> {
    client: C,
    view: V,
    renderer: MessageRenderer,
    labels: StatusLabels,
    history: RefCell<History>,
    state: Cell<UiState>,
}

impl<C: ChatClient, V: ChatView> ChatWidget<C, V> {
    #[must_use]
    pub fn new(client: C, view: V, settings: &WidgetSettings) -> Self {
        Self {
            client,
            view,
            renderer: MessageRenderer::new(),
            labels: settings.labels.clone(),
            history: RefCell::new(History::new()),
            state: Cell::new(UiState::Idle),
        }
    }

    /// Run one turn for the raw input text.
    ///
    /// The user message is rendered before the request goes out; history is
    /// only extended once a reply has been received and rendered.
    pub async fn submit(&self, raw: &str) -> TurnOutcome {
        let Some(prompt) = submission_text(raw) else {
            debug!("Ignoring empty submission");
            return TurnOutcome::Empty;
        };
        if self.state.get().is_busy() {
            debug!("Ignoring submission while an exchange is in flight");
            return TurnOutcome::Busy;
        }

        self.show(Role::User, &prompt);
        self.view.reset_input();
        self.set_state(UiState::Busy);

        let request = ChatRequest::new(prompt.as_str(), self.history.borrow().messages());
        info!(
            prompt_len = request.prompt.len(),
            history_len = request.history.len(),
            "Sending chat turn"
        );

        let outcome = match self.client.send(&request).await {
            Ok(reply) => {
                self.show(Role::Assistant, &reply);
                self.history.borrow_mut().record_turn(prompt, reply);
                TurnOutcome::Answered
            }
            Err(e) => {
                error!(error = %e, "Chat turn failed");
                self.show(Role::Assistant, &e.display_text());
                TurnOutcome::Failed(e)
            }
        };

        self.set_state(UiState::Idle);
        self.view.focus_input();
        outcome
    }

    /// Snapshot of the conversation so far.
    #[must_use]
    pub fn history(&self) -> History {
        self.history.borrow().clone()
    }

    #[must_use]
    pub fn state(&self) -> UiState {
        self.state.get()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    fn show(&self, role: Role, content: &str) {
        let rendered = self.renderer.render(role, content);
        self.view.remove_welcome();
        self.view.append_message(&rendered);
        self.view.scroll_to_bottom();
    }

    fn set_state(&self, state: UiState) {
        self.state.set(state);
        self.view
            .apply_status(&StatusIndicator::project(state, &self.labels));
    }
}
