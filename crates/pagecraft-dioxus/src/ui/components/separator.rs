use dioxus::prelude::*;
use pagecraft_engine::models::{SeparatorData, SeparatorStyle};

#[component]
pub fn Separator(data: SeparatorData) -> Element {
    match data.style {
        SeparatorStyle::Line => rsx! {
            hr { class: "separator-line" }
        },
        SeparatorStyle::Dots => rsx! {
            div { class: "separator-dots", "• • •" }
        },
        SeparatorStyle::Blank => rsx! {
            div { class: "separator-space" }
        },
    }
}
