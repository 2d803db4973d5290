use dioxus::prelude::*;
use pagecraft_engine::models::{InfoBoxData, InfoBoxStyle};

#[component]
pub fn InfoBox(data: InfoBoxData) -> Element {
    let class = match data.style {
        InfoBoxStyle::Info => "info-box",
        InfoBoxStyle::Success => "info-box success",
        InfoBoxStyle::Warning => "info-box warning",
        InfoBoxStyle::Danger => "info-box danger",
    };

    rsx! {
        div {
            class: "{class}",
            if !data.title.is_empty() {
                h4 { "{data.title}" }
            }
            p { "{data.body}" }
        }
    }
}
