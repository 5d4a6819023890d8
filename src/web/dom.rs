//! `web-sys` implementation of [`ChatView`].

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlTextAreaElement,
};

use crate::widget::settings::SETTINGS_ELEMENT_ID;
use crate::widget::view::ids;
use crate::widget::{
    AutoGrow, ChatView, InputHeight, MessageBody, RenderedMessage, StatusIndicator, StatusView,
    WidgetError, WidgetSettings,
};

/// Settings embedded by the server, or the defaults.
pub(crate) fn read_settings(document: &Document) -> WidgetSettings {
    let Some(text) = document
        .get_element_by_id(SETTINGS_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return WidgetSettings::default();
    };

    serde_json::from_str(&text).unwrap_or_else(|e| {
        warn!(error = %e, "Invalid embedded widget settings, using defaults");
        WidgetSettings::default()
    })
}

/// DOM calls here are cosmetic; a failure is logged and the turn goes on.
fn log_failure<T>(result: Result<T, JsValue>, action: &'static str) {
    if let Err(e) = result {
        warn!(error = ?e, action, "DOM update failed");
    }
}

fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or(WidgetError::MissingElement(id))
}

/// The widget's elements on the live page.
#[derive(Debug, Clone)]
pub struct DomView {
    document: Document,
    transcript: HtmlElement,
    form: HtmlFormElement,
    input: HtmlTextAreaElement,
    send_button: HtmlButtonElement,
    status_text: HtmlElement,
    status_dot: HtmlElement,
    auto_grow: AutoGrow,
}

impl DomView {
    /// Look up every element the widget drives.
    pub fn bind(document: &Document, auto_grow: AutoGrow) -> Result<Self, WidgetError> {
        Ok(Self {
            document: document.clone(),
            transcript: element(document, ids::TRANSCRIPT)?,
            form: element(document, ids::FORM)?,
            input: element(document, ids::INPUT)?,
            send_button: element(document, ids::SEND_BUTTON)?,
            status_text: element(document, ids::STATUS_TEXT)?,
            status_dot: element(document, ids::STATUS_DOT)?,
            auto_grow,
        })
    }

    pub fn input(&self) -> &HtmlTextAreaElement {
        &self.input
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub fn input_value(&self) -> String {
        self.input.value()
    }

    /// Resize the input to its content.
    pub fn auto_grow(&self) {
        let style = self.input.style();
        log_failure(style.set_property("height", "auto"), "reset input height");
        if let InputHeight::Pixels(px) = self
            .auto_grow
            .height_for(&self.input.value(), self.input.scroll_height())
        {
            log_failure(
                style.set_property("height", &format!("{px}px")),
                "grow input",
            );
        }
    }

    fn build_message(&self, message: &RenderedMessage) -> Result<Element, JsValue> {
        let container = self.document.create_element("div")?;
        container.set_class_name(&format!("message {}", message.css_class()));

        let avatar = self.document.create_element("div")?;
        avatar.set_class_name("avatar");
        avatar.set_text_content(Some(message.avatar()));

        let content = self.document.create_element("div")?;
        content.set_class_name("message-content");
        match &message.body {
            MessageBody::Markup(html) => content.set_inner_html(html),
            MessageBody::Text(text) => content.set_text_content(Some(text)),
        }

        container.append_child(&avatar)?;
        container.append_child(&content)?;
        Ok(container)
    }
}

impl ChatView for DomView {
    fn remove_welcome(&self) {
        if let Ok(Some(welcome)) = self
            .document
            .query_selector(&format!(".{}", ids::WELCOME_CLASS))
        {
            welcome.remove();
        }
    }

    fn append_message(&self, message: &RenderedMessage) {
        let appended = self
            .build_message(message)
            .and_then(|node| self.transcript.append_child(&node));
        if let Err(e) = appended {
            warn!(error = ?e, "Failed to append message");
        }
    }

    fn scroll_to_bottom(&self) {
        self.transcript.set_scroll_top(self.transcript.scroll_height());
    }

    fn reset_input(&self) {
        self.input.set_value("");
        log_failure(
            self.input.style().set_property("height", "auto"),
            "reset input height",
        );
    }

    fn apply_status(&self, status: &StatusView) {
        self.input.set_disabled(!status.controls_enabled);
        self.send_button.set_disabled(!status.controls_enabled);
        self.input.set_placeholder(&status.placeholder);
        self.status_text.set_text_content(Some(&status.label));
        log_failure(
            self.status_dot
                .class_list()
                .toggle_with_force(StatusIndicator::BUSY_CLASS, status.busy),
            "toggle status dot",
        );
    }

    fn focus_input(&self) {
        log_failure(self.input.focus(), "focus input");
    }
}
