//! Badge component for status indicators.

use leptos::prelude::*;

/// Badge component for displaying status.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge>"Ready"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "badge inline-flex items-center gap-1.5 rounded-full px-2.5 py-0.5 text-xs font-semibold \
         bg-panel text-textPrimary border border-panelBorder transition-colors {class}"
    );

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
