use dioxus::prelude::*;
use pagecraft_engine::models::NewsletterData;

#[component]
pub fn Newsletter(data: NewsletterData) -> Element {
    rsx! {
        div {
            class: "newsletter-block",
            h3 { "{data.heading}" }
            input {
                r#type: "email",
                disabled: true,
                placeholder: data.placeholder.clone(),
            }
            button { disabled: true, "{data.submit_label}" }
        }
    }
}
