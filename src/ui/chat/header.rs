//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::{Badge, SparklesIcon};
use crate::ui::ids;

/// Chat header with title and the status indicator.
///
/// The dot and label are updated in place by the browser binding.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    #[prop(into)]
    title: String,
    /// Initial status label.
    #[prop(into)]
    ready_label: String,
) -> impl IntoView {
    view! {
        <header class="flex items-center justify-between px-4 py-3 border-b border-panelBorder bg-panel/50 backdrop-blur-sm">
            <div class="flex items-center gap-2">
                <SparklesIcon class="h-5 w-5 text-primary" />
                <h2 class="font-semibold text-lg">{title}</h2>
            </div>

            <div id="status-indicator" class="flex items-center gap-2">
                <Badge>
                    <span id={ids::STATUS_DOT} class="dot"></span>
                    <span id={ids::STATUS_TEXT} class="text-xs">{ready_label}</span>
                </Badge>
            </div>
        </header>
    }
}
