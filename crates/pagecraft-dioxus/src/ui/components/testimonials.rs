use dioxus::prelude::*;
use pagecraft_engine::models::TestimonialsData;

#[component]
pub fn Testimonials(data: TestimonialsData) -> Element {
    rsx! {
        div {
            class: "testimonials-block",
            if data.entries.is_empty() {
                div { class: "placeholder", "No testimonials" }
            }
            for (i, entry) in data.entries.iter().enumerate() {
                blockquote {
                    key: "{i}",
                    p { "\u{201c}{entry.quote}\u{201d}" }
                    footer {
                        "{entry.author}"
                        if !entry.role.is_empty() {
                            span { ", {entry.role}" }
                        }
                    }
                }
            }
        }
    }
}
