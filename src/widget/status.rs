//! Busy/idle state and its projection onto the status indicator.

use super::settings::StatusLabels;

/// The two UI states gating submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Busy,
}

impl UiState {
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// What the view should display for a given [`UiState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Short status text next to the dot.
    pub label: String,
    /// Whether the dot carries the `busy` marker class.
    pub busy: bool,
    /// Placeholder for the input control.
    pub placeholder: String,
    /// Whether the input and submit controls accept interaction.
    pub controls_enabled: bool,
}

/// Stateless projection of [`UiState`] onto a [`StatusView`].
#[derive(Debug, Clone, Copy)]
pub struct StatusIndicator;

impl StatusIndicator {
    /// CSS class toggled on the status dot while busy.
    pub const BUSY_CLASS: &'static str = "busy";

    #[must_use]
    pub fn project(state: UiState, labels: &StatusLabels) -> StatusView {
        match state {
            UiState::Idle => StatusView {
                label: labels.ready.clone(),
                busy: false,
                placeholder: labels.ready_placeholder.clone(),
                controls_enabled: true,
            },
            UiState::Busy => StatusView {
                label: labels.busy.clone(),
                busy: true,
                placeholder: labels.busy_placeholder.clone(),
                controls_enabled: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_projection() {
        let view = StatusIndicator::project(UiState::Idle, &StatusLabels::default());
        assert_eq!(view.label, "Ready");
        assert_eq!(view.placeholder, "Type your message...");
        assert!(view.controls_enabled);
        assert!(!view.busy);
    }

    #[test]
    fn test_busy_projection() {
        let view = StatusIndicator::project(UiState::Busy, &StatusLabels::default());
        assert_eq!(view.label, "Thinking...");
        assert_eq!(view.placeholder, "Waiting for response...");
        assert!(!view.controls_enabled);
        assert!(view.busy);
    }
}
