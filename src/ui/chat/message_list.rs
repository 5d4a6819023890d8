//! Chat transcript component.

use leptos::prelude::*;

use crate::ui::components::{Avatar, ScrollArea};
use crate::ui::ids;
use crate::widget::Role;

/// Transcript container.
///
/// Starts with a welcome placeholder that the widget removes when the first
/// message is rendered.
#[component]
pub fn ChatMessageList(
    /// Welcome text shown before the first message.
    #[prop(into)]
    welcome: String,
) -> impl IntoView {
    view! {
        <ScrollArea id={ids::TRANSCRIPT} class="flex-1 p-4 space-y-4">
            <div class={format!("{} message bot", ids::WELCOME_CLASS)}>
                <Avatar role={Role::Assistant} />
                <div class="message-content">
                    <p>{welcome}</p>
                </div>
            </div>
        </ScrollArea>
    }
}
