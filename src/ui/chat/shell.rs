//! Chat shell layout component.

use leptos::prelude::*;

use super::{ChatHeader, ChatInputArea, ChatMessageList};
use crate::widget::WidgetSettings;

/// Main chat shell component.
///
/// Provides the complete chat interface layout with:
/// - Header with title and status indicator
/// - Scrollable transcript with the welcome placeholder
/// - Input area for new messages
#[component]
pub fn ChatShell(
    /// Widget settings (title, welcome text, labels).
    settings: WidgetSettings,
) -> impl IntoView {
    let WidgetSettings {
        title,
        welcome,
        labels,
        ..
    } = settings;

    view! {
        <div class="chat-shell flex flex-col h-[calc(100vh-6rem)] bg-panel border border-panelBorder rounded-2xl overflow-hidden">
            <ChatHeader title=title ready_label=labels.ready />

            <ChatMessageList welcome=welcome />

            <ChatInputArea placeholder=labels.ready_placeholder />
        </div>
    }
}
