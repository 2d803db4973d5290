use dioxus::prelude::*;
use pagecraft_engine::models::{PopupData, PopupTrigger};

/// Popups only fire on the published site; the preview shows the content
/// inline with its trigger condition.
#[component]
pub fn Popup(data: PopupData) -> Element {
    let trigger = match data.trigger {
        PopupTrigger::Delay => "after a delay",
        PopupTrigger::ExitIntent => "on exit intent",
        PopupTrigger::Scroll => "on scroll",
    };

    rsx! {
        div {
            class: "popup-block",
            p { class: "placeholder", "Popup, shown {trigger}:" }
            h4 { "{data.heading}" }
            p { "{data.body}" }
            button { disabled: true, "{data.dismiss_label}" }
        }
    }
}
