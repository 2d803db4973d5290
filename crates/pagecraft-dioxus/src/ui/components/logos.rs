use dioxus::prelude::*;
use pagecraft_engine::models::LogosData;

#[component]
pub fn Logos(data: LogosData) -> Element {
    rsx! {
        div {
            class: "logos-block",
            if !data.title.is_empty() {
                h4 { "{data.title}" }
            }
            div {
                class: "logos-row",
                if data.logos.is_empty() {
                    div { class: "placeholder", "No logos" }
                }
                for (i, logo) in data.logos.iter().enumerate() {
                    img {
                        key: "{i}",
                        src: logo.url.clone(),
                        alt: logo.alt.clone(),
                    }
                }
            }
        }
    }
}
