//! Syntax highlighting for fenced code blocks.
//!
//! Highlighting is class based: spans carry `hl-` prefixed scope classes and
//! the colors live in the stylesheet from [`stylesheet`].

use std::fmt::Write as _;
use std::sync::OnceLock;

use syntect::escape::Escape;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Class style shared by the generated markup and the stylesheet.
pub const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Class carried by every highlighted `<code>` element.
pub const CODE_CLASS: &str = "hl-code";

const THEME_NAME: &str = "base16-ocean.dark";

/// Lazily loaded syntect assets.
struct HighlightAssets {
    syntax_set: SyntaxSet,
    theme: Theme,
}

fn assets() -> &'static HighlightAssets {
    static ASSETS: OnceLock<HighlightAssets> = OnceLock::new();
    ASSETS.get_or_init(|| {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set.themes.remove(THEME_NAME).unwrap_or_default();
        HighlightAssets { syntax_set, theme }
    })
}

fn find_syntax<'a>(syntax_set: &'a SyntaxSet, lang: &str) -> &'a SyntaxReference {
    if lang.is_empty() {
        return syntax_set.find_syntax_plain_text();
    }
    syntax_set
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text())
}

/// Highlight one code block into a `<pre><code>` element.
///
/// `lang` is the first word of the fence info string; unknown or empty
/// languages are highlighted as plain text.
#[must_use]
pub fn highlight_block(lang: &str, code: &str) -> String {
    let assets = assets();
    let syntax = find_syntax(&assets.syntax_set, lang);
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &assets.syntax_set, CLASS_STYLE);

    for line in LinesWithEndings::from(code) {
        if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::warn!(error = %e, lang, "Highlighting failed, emitting plain code");
            return plain_block(lang, code);
        }
    }

    wrap_code(lang, &generator.finalize())
}

/// CSS for the classes emitted by [`highlight_block`].
pub fn stylesheet() -> Result<String, syntect::Error> {
    css_for_theme_with_class_style(&assets().theme, CLASS_STYLE)
}

fn wrap_code(lang: &str, body: &str) -> String {
    let mut classes = String::from(CODE_CLASS);
    let lang = language_class(lang);
    if !lang.is_empty() {
        let _ = write!(classes, " language-{lang}");
    }
    format!("<pre><code class=\"{classes}\">{body}</code></pre>\n")
}

/// Keep only characters that are safe inside a class name.
fn language_class(lang: &str) -> String {
    lang.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#'))
        .collect()
}

/// Unhighlighted fallback: the code escaped as-is.
fn plain_block(lang: &str, code: &str) -> String {
    wrap_code(lang, &Escape(code).to_string())
}
