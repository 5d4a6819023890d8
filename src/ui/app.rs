//! Document root.

use leptos::prelude::*;

use crate::ui::chat::ChatShell;
use crate::widget::WidgetSettings;
use crate::widget::settings::SETTINGS_ELEMENT_ID;

/// Main application component.
///
/// Renders the whole document: head assets, the embedded settings block and
/// the chat shell.
#[component]
pub fn App(
    /// Settings the shell is rendered from.
    settings: WidgetSettings,
    /// Pre-escaped settings JSON for the browser binding.
    config_json: String,
) -> impl IntoView {
    let title = settings.title.clone();

    view! {
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Chat assistant"/>

                <title>{title}</title>

                <link rel="stylesheet" href="/static/app.css"/>
                <link rel="stylesheet" href="/highlight.css"/>

                <script id={SETTINGS_ELEMENT_ID} type="application/json" inner_html=config_json></script>
                // Widget bundle (wasm-bindgen output is loaded by main.js)
                <script type="module" src="/static/main.js"></script>
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <main id="app" class="container mx-auto px-4 py-6 max-w-4xl">
                    <ChatShell settings=settings />
                </main>
                <Footer/>
            </body>
        </html>
    }
}

/// Footer component.
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-4">
            <p class="text-xs text-textMuted text-center">
                "Powered by Axum + Leptos + WebAssembly"
            </p>
        </footer>
    }
}
