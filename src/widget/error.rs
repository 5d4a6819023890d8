//! Widget error type.

use thiserror::Error;

/// Everything that can go wrong inside the widget.
///
/// Exchange failures never reach the user as codes; they are rendered into
/// the transcript through [`WidgetError::display_text`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Network-level failure (unreachable, aborted, refused).
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("API Error: {reason}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Reason phrase for the status.
        reason: String,
    },

    /// The response body was not a reply.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The configured endpoint could not be resolved to a URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// A required DOM element is missing from the page.
    #[error("Missing element: {0}")]
    MissingElement(&'static str),
}

impl WidgetError {
    /// Text shown in the transcript in place of a reply.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("Error: {self}. Please try again.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_text() {
        let err = WidgetError::Status {
            code: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.display_text(),
            "Error: API Error: Internal Server Error. Please try again."
        );
    }

    #[test]
    fn test_transport_display_text() {
        let err = WidgetError::Transport("Failed to fetch".to_string());
        assert_eq!(err.display_text(), "Error: Failed to fetch. Please try again.");
    }
}
