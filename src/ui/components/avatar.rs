//! Role avatar component.

use leptos::prelude::*;

use crate::widget::Role;

/// Avatar for a message author.
///
/// Uses the same glyphs as messages rendered in the browser, so the welcome
/// placeholder matches the transcript.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar role=Role::Assistant />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Message author.
    role: Role,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "avatar relative flex h-9 w-9 shrink-0 items-center justify-center rounded-full bg-panel {class}"
    );

    view! {
        <div class=classes aria-hidden="true">
            {role.avatar()}
        </div>
    }
}
