//! Input controller: keyboard submission and auto-grow.
//!
//! The DOM layer feeds raw key presses and measurements in here and applies
//! whatever comes back, so the rules stay testable off the browser.

use super::settings::InputSizing;

/// Key that submits the message.
pub const SUBMIT_KEY: &str = "Enter";

/// A key press on the input control, reduced to what matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub shift: bool,
    /// An IME composition is in progress.
    pub composing: bool,
}

/// What to do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Prevent the default and submit the input.
    Submit,
    /// Prevent the default and do nothing else.
    Suppress,
    /// Let the browser handle it (typing, Shift+Enter line breaks).
    PassThrough,
}

/// Classify a key press against the current input value.
#[must_use]
pub fn classify_key(press: KeyPress<'_>, value: &str) -> KeyAction {
    if press.key != SUBMIT_KEY || press.shift || press.composing {
        return KeyAction::PassThrough;
    }
    if submission_text(value).is_some() {
        KeyAction::Submit
    } else {
        KeyAction::Suppress
    }
}

/// Trimmed text to submit, or `None` for empty/whitespace-only input.
#[must_use]
pub fn submission_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Height to apply to the input control after its content changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHeight {
    /// Reset to the natural minimum height.
    Reset,
    /// Pin to this many pixels.
    Pixels(u32),
}

/// Auto-grow rule for the input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoGrow {
    sizing: InputSizing,
}

impl AutoGrow {
    #[must_use]
    pub fn new(sizing: InputSizing) -> Self {
        Self { sizing }
    }

    /// Compute the height from the content's measured scroll height.
    ///
    /// The caller measures after resetting the height, so `scroll_height`
    /// reflects the content rather than the previous size.
    #[must_use]
    pub fn height_for(&self, value: &str, scroll_height: i32) -> InputHeight {
        if value.is_empty() {
            return InputHeight::Reset;
        }
        let measured = u32::try_from(scroll_height).unwrap_or(0);
        let mut height = measured.max(self.sizing.min_height);
        if let Some(max) = self.sizing.max_height {
            height = height.min(max);
        }
        InputHeight::Pixels(height)
    }
}

impl Default for AutoGrow {
    fn default() -> Self {
        Self::new(InputSizing::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(shift: bool) -> KeyPress<'static> {
        KeyPress {
            key: "Enter",
            shift,
            composing: false,
        }
    }

    #[test]
    fn test_enter_submits_non_empty_text() {
        assert_eq!(classify_key(enter(false), "hello"), KeyAction::Submit);
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        assert_eq!(classify_key(enter(true), "hello"), KeyAction::PassThrough);
    }

    #[test]
    fn test_enter_on_blank_input_is_swallowed() {
        assert_eq!(classify_key(enter(false), "  \n\t "), KeyAction::Suppress);
        assert_eq!(classify_key(enter(false), ""), KeyAction::Suppress);
    }

    #[test]
    fn test_other_keys_and_composition_pass_through() {
        let letter = KeyPress {
            key: "a",
            shift: false,
            composing: false,
        };
        assert_eq!(classify_key(letter, "hello"), KeyAction::PassThrough);

        let composing = KeyPress {
            composing: true,
            ..enter(false)
        };
        assert_eq!(classify_key(composing, "hello"), KeyAction::PassThrough);
    }

    #[test]
    fn test_submission_text_trims() {
        assert_eq!(submission_text("  Hello \n"), Some("Hello".to_string()));
        assert_eq!(submission_text(" \t\n"), None);
    }

    #[test]
    fn test_auto_grow_tracks_content_within_bounds() {
        let grow = AutoGrow::default();

        assert_eq!(grow.height_for("", 120), InputHeight::Reset);
        assert_eq!(grow.height_for("a", 20), InputHeight::Pixels(44));
        assert_eq!(grow.height_for("a\nb\nc", 96), InputHeight::Pixels(96));
        assert_eq!(grow.height_for("long", 640), InputHeight::Pixels(200));
    }

    #[test]
    fn test_auto_grow_without_cap() {
        let grow = AutoGrow::new(InputSizing {
            min_height: 0,
            max_height: None,
        });
        assert_eq!(grow.height_for("long", 640), InputHeight::Pixels(640));
        assert_eq!(grow.height_for("x", -5), InputHeight::Pixels(0));
    }
}
