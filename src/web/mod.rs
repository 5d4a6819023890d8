//! Browser entry point.
//!
//! `mount()` wires one [`ChatWidget`] to the page rendered by the companion
//! server and returns a [`WidgetHandle`] that owns it. The handle lives as
//! long as the page keeps it; dropping it detaches every listener.
//!
//! ```js
//! import init, { mount } from "/static/pkg/chat_widget.js";
//! await init();
//! window.chatWidget = mount();
//! ```

mod console;
mod dom;
mod listener;

use std::rc::Rc;

use tracing::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use crate::widget::{
    AutoGrow, ChatWidget, HttpChatClient, KeyAction, KeyPress, WidgetError, classify_key,
};

pub use dom::DomView;
use listener::EventListener;

type DomWidget = ChatWidget<HttpChatClient, DomView>;

/// A mounted widget and the listeners that drive it.
#[wasm_bindgen]
pub struct WidgetHandle {
    widget: Rc<DomWidget>,
    _listeners: Vec<EventListener>,
}

impl std::fmt::Debug for WidgetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetHandle")
            .field("history_len", &self.widget.history().len())
            .field("state", &self.widget.state())
            .finish()
    }
}

#[wasm_bindgen]
impl WidgetHandle {
    /// Number of messages recorded so far.
    #[wasm_bindgen(js_name = historyLength)]
    pub fn history_length(&self) -> usize {
        self.widget.history().len()
    }

    /// The recorded history as a JSON array of `{role, content}`.
    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.widget.history()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Whether an exchange is in flight.
    #[wasm_bindgen(js_name = isBusy)]
    pub fn is_busy(&self) -> bool {
        self.widget.state().is_busy()
    }
}

/// Mount the widget on the current page.
#[wasm_bindgen]
pub fn mount() -> Result<WidgetHandle, JsValue> {
    console::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let settings = dom::read_settings(&document);
    let origin = window.location().origin()?;
    let client = HttpChatClient::new(&origin, &settings.endpoint).map_err(to_js)?;
    let view = DomView::bind(&document, AutoGrow::new(settings.input)).map_err(to_js)?;

    let widget = Rc::new(ChatWidget::new(client, view.clone(), &settings));
    let listeners = install_listeners(&widget, &view)?;

    info!(endpoint = %widget.client().endpoint(), "Chat widget mounted");
    Ok(WidgetHandle {
        widget,
        _listeners: listeners,
    })
}

fn install_listeners(
    widget: &Rc<DomWidget>,
    view: &DomView,
) -> Result<Vec<EventListener>, JsValue> {
    let input = view.input().clone();
    let form = view.form().clone();

    let on_input = {
        let view = view.clone();
        EventListener::new(&input, "input", move |_| view.auto_grow())?
    };

    let on_keydown = {
        let widget = Rc::clone(widget);
        let view = view.clone();
        EventListener::new(&input, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = event.key();
            let press = KeyPress {
                key: &key,
                shift: event.shift_key(),
                composing: event.is_composing(),
            };
            match classify_key(press, &view.input_value()) {
                KeyAction::Submit => {
                    event.prevent_default();
                    submit_input(&widget, &view);
                }
                KeyAction::Suppress => event.prevent_default(),
                KeyAction::PassThrough => {}
            }
        })?
    };

    let on_submit = {
        let widget = Rc::clone(widget);
        let view = view.clone();
        EventListener::new(&form, "submit", move |event| {
            event.prevent_default();
            submit_input(&widget, &view);
        })?
    };

    Ok(vec![on_input, on_keydown, on_submit])
}

fn submit_input(widget: &Rc<DomWidget>, view: &DomView) {
    let text = view.input_value();
    let widget = Rc::clone(widget);
    spawn_local(async move {
        let outcome = widget.submit(&text).await;
        debug!(?outcome, "Turn finished");
    });
}

fn to_js(e: WidgetError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
