use dioxus::prelude::*;
use pagecraft_engine::models::FeaturesData;

#[component]
pub fn Features(data: FeaturesData) -> Element {
    rsx! {
        div {
            class: "features-block",
            if !data.title.is_empty() {
                h3 { "{data.title}" }
            }
            div {
                class: "features-row",
                if data.features.is_empty() {
                    div { class: "placeholder", "No features" }
                }
                for (i, feature) in data.features.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "feature-card",
                        if !feature.icon.is_empty() {
                            span { class: "feature-icon", "{feature.icon}" }
                        }
                        h4 { "{feature.title}" }
                        p { "{feature.text}" }
                    }
                }
            }
        }
    }
}
