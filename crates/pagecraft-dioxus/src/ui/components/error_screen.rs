use dioxus::prelude::*;

const PAGECRAFT_CSS: &str = include_str!("../../assets/pagecraft.css");

/// Full-window error display used when the app cannot start. Mounted in
/// place of [`crate::ui::App`], so it carries its own stylesheet.
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        style { {PAGECRAFT_CSS} }
        div {
            class: "error-screen",
            h1 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre {
                    class: "error-screen-details",
                    "{detail_text}"
                }
            }
            p {
                class: "error-screen-hint",
                "Fix the problem above and restart pagecraft."
            }
        }
    }
}
