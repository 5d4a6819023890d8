//! Page shell.
//!
//! This module renders the widget page with Leptos SSR. The page carries the
//! element ids the browser binding looks up, plus the embedded
//! [`WidgetSettings`] JSON.
//!
//! # Structure
//!
//! - [`app`]: document root
//! - [`components`]: reusable UI components
//! - [`chat`]: chat-specific layout components

use leptos::prelude::*;

use crate::widget::WidgetSettings;

pub mod app;
pub mod chat;
pub mod components;

use app::App;

pub use crate::widget::view::ids;

/// Render the complete HTML document.
pub fn render_page(settings: &WidgetSettings) -> Result<String, serde_json::Error> {
    let config_json = settings.to_embedded_json()?;
    let settings = settings.clone();

    let owner = Owner::new();
    let html = owner.with(|| view! { <App settings=settings config_json=config_json /> }.to_html());

    Ok(format!("<!DOCTYPE html>{html}"))
}
