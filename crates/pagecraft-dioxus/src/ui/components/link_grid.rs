use dioxus::prelude::*;
use pagecraft_engine::models::LinkGridData;

#[component]
pub fn LinkGrid(data: LinkGridData) -> Element {
    rsx! {
        div {
            class: "link-grid-block",
            if data.links.is_empty() {
                div { class: "placeholder", "No links" }
            }
            for (i, link) in data.links.iter().enumerate() {
                a {
                    key: "{i}",
                    class: "link-card",
                    href: link.url.clone(),
                    h4 { "{link.title}" }
                    p { "{link.description}" }
                }
            }
        }
    }
}
