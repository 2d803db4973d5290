use dioxus::prelude::*;
use pagecraft_engine::models::ChatData;

#[component]
pub fn Chat(data: ChatData) -> Element {
    rsx! {
        div {
            class: "chat-block",
            p { class: "chat-greeting", "{data.greeting}" }
            input {
                r#type: "text",
                disabled: true,
                placeholder: data.placeholder.clone(),
            }
        }
    }
}
