use dioxus::prelude::*;
use pagecraft_engine::models::AccordionData;

#[component]
pub fn Accordion(data: AccordionData) -> Element {
    rsx! {
        div {
            class: "accordion-block",
            if data.items.is_empty() {
                div { class: "placeholder", "No accordion items" }
            }
            for (i, item) in data.items.iter().enumerate() {
                details {
                    key: "{i}",
                    summary { "{item.title}" }
                    p { "{item.content}" }
                }
            }
        }
    }
}
