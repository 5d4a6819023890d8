//! Message rendering.
//!
//! Assistant replies are markdown from a remote service: they are converted
//! to HTML, code blocks are highlighted, and the result is sanitized before
//! it can reach the DOM. User input is never interpreted as markup.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

use super::highlight;
use super::message::Role;

/// Body of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Sanitized HTML, inserted as markup.
    Markup(String),
    /// Literal text, inserted as a text node.
    Text(String),
}

/// A message ready to be appended to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub role: Role,
    pub body: MessageBody,
}

impl RenderedMessage {
    #[must_use]
    pub fn avatar(&self) -> &'static str {
        self.role.avatar()
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        self.role.css_class()
    }
}

/// Converts message text into [`RenderedMessage`]s.
#[derive(Debug)]
pub struct MessageRenderer {
    sanitizer: ammonia::Builder<'static>,
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRenderer {
    #[must_use]
    pub fn new() -> Self {
        let mut sanitizer = ammonia::Builder::default();
        sanitizer
            .add_tag_attributes("pre", &["class"])
            .add_tag_attributes("code", &["class"])
            .add_tag_attributes("span", &["class"]);
        Self { sanitizer }
    }

    #[must_use]
    pub fn render(&self, role: Role, content: &str) -> RenderedMessage {
        let body = match role {
            Role::Assistant => MessageBody::Markup(self.markdown_to_html(content)),
            Role::User => MessageBody::Text(content.to_string()),
        };
        RenderedMessage { role, body }
    }

    /// Markdown to sanitized HTML with every code block highlighted.
    #[must_use]
    pub fn markdown_to_html(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let events = highlight_code_blocks(Parser::new_ext(markdown, options));
        let mut unsafe_html = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut unsafe_html, events.into_iter());

        self.sanitizer.clean(&unsafe_html).to_string()
    }
}

/// Replace each code block's events with a single pre-highlighted HTML event.
fn highlight_code_blocks<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut block: Option<(String, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or_default().to_string()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                block = Some((lang, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, code)) = block.take() {
                    let highlighted = highlight::highlight_block(&lang, &code);
                    events.push(Event::Html(CowStr::from(highlighted)));
                }
            }
            Event::Text(text) if block.is_some() => {
                if let Some((_, code)) = block.as_mut() {
                    code.push_str(&text);
                }
            }
            other => events.push(other),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(message: &RenderedMessage) -> &str {
        match &message.body {
            MessageBody::Markup(html) => html,
            MessageBody::Text(text) => panic!("expected markup, got text {text:?}"),
        }
    }

    #[test]
    fn test_assistant_markdown_is_formatted() {
        let renderer = MessageRenderer::new();
        let message = renderer.render(Role::Assistant, "Some **bold** and *emphasis*.");

        let html = markup(&message);
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>emphasis</em>"));
        assert_eq!(message.css_class(), "bot");
    }

    #[test]
    fn test_each_code_block_is_highlighted() {
        let renderer = MessageRenderer::new();
        let reply = "First:\n\n```rust\nlet x = 1;\n```\n\nThen:\n\n```python\nprint('hi')\n```\n";
        let message = renderer.render(Role::Assistant, reply);

        let html = markup(&message);
        assert!(html.contains("<code class=\"hl-code language-rust\">"));
        assert!(html.contains("<code class=\"hl-code language-python\">"));
        assert_eq!(html.matches("<pre>").count(), 2);
        assert!(html.contains("<span class=\"hl-"));
    }

    #[test]
    fn test_user_text_stays_literal() {
        let renderer = MessageRenderer::new();
        let message = renderer.render(Role::User, "*not emphasis* <b>nor bold</b>");

        assert_eq!(
            message.body,
            MessageBody::Text("*not emphasis* <b>nor bold</b>".to_string())
        );
        assert_eq!(message.avatar(), "👤");
    }

    #[test]
    fn test_remote_html_is_sanitized() {
        let renderer = MessageRenderer::new();
        let html = renderer.markdown_to_html(
            "hi <script>alert(1)</script> <img src=\"x.png\" onerror=\"alert(2)\"> \
             [link](javascript:alert(3))",
        );

        assert!(!html.contains("<script"));
        assert!(!html.contains("onerror"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<img src=\"x.png\""));
    }

    #[test]
    fn test_code_inside_fence_is_not_interpreted() {
        let renderer = MessageRenderer::new();
        let html = renderer.markdown_to_html("```html\n<script>alert(1)</script>\n```\n");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;"));
    }
}
