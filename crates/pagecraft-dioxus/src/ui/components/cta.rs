use crate::ui::components::block_view::text_or_hint;
use dioxus::prelude::*;
use pagecraft_engine::models::CtaData;

#[component]
pub fn Cta(data: CtaData) -> Element {
    rsx! {
        div {
            class: "cta-block",
            h3 { {text_or_hint(&data.heading, "Call to action")} }
            if !data.body.is_empty() {
                p { "{data.body}" }
            }
            if !data.button_label.is_empty() {
                a {
                    class: "cta-button",
                    href: data.button_link.clone(),
                    "{data.button_label}"
                }
            }
        }
    }
}
