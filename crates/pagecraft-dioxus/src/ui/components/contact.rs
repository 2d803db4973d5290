use dioxus::prelude::*;
use pagecraft_engine::models::ContactData;

#[component]
pub fn Contact(data: ContactData) -> Element {
    rsx! {
        div {
            class: "contact-block",
            h3 { "{data.heading}" }
            if !data.email.is_empty() {
                p { a { href: "mailto:{data.email}", "{data.email}" } }
            }
            if !data.phone.is_empty() {
                p { a { href: "tel:{data.phone}", "{data.phone}" } }
            }
            if data.show_form {
                p { class: "placeholder", "Contact form shown on the published page" }
            }
        }
    }
}
