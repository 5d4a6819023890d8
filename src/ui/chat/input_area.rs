//! Chat input area component.

use leptos::prelude::*;

use crate::ui::components::{Button, SendIcon};
use crate::ui::ids;

/// Chat message input area.
///
/// Submission, auto-grow and the disabled state are handled by the browser
/// binding; the markup only provides the controls.
#[component]
pub fn ChatInputArea(
    /// Placeholder shown while idle.
    #[prop(into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="border-t border-panelBorder p-4 bg-panel/50 backdrop-blur-sm">
            <form id={ids::FORM} class="flex gap-2">
                <div class="flex-1 relative">
                    <textarea
                        id={ids::INPUT}
                        name="message"
                        placeholder=placeholder
                        class="w-full min-h-[44px] max-h-[200px] px-4 py-3 rounded-xl \
                               border border-panelBorder bg-background text-textPrimary \
                               placeholder:text-textMuted resize-none \
                               focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent"
                        rows="1"
                        autofocus=true
                    ></textarea>
                </div>

                <Button id={ids::SEND_BUTTON} button_type="submit" class="shrink-0 h-11 w-11 rounded-xl">
                    <SendIcon class="h-5 w-5" />
                </Button>
            </form>

            <p class="input-hint text-xs text-textMuted mt-2 text-center">
                "Press Enter to send, Shift+Enter for new line"
            </p>
        </div>
    }
}
