//! Button component.

use leptos::prelude::*;

/// ShadCN-style primary button.
///
/// The disabled state is toggled in the browser, so it is not a prop.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button id="send-btn" button_type="submit">
///         "Send"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Element id, for buttons the widget binds to.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "btn inline-flex items-center justify-center rounded-lg font-medium \
         bg-primary text-white hover:bg-primaryMuted transition-colors \
         focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
         disabled:pointer-events-none disabled:opacity-50 {class}"
    );

    view! {
        <button id=id type=button_type class=classes>
            {children()}
        </button>
    }
}
