use crate::ui::components::block_view::text_or_hint;
use dioxus::prelude::*;
use pagecraft_engine::models::TextData;

#[component]
pub fn TextBlock(data: TextData) -> Element {
    rsx! {
        div {
            class: "text-block",
            for (i, paragraph) in data.content.split("\n\n").enumerate() {
                p {
                    key: "{i}",
                    {text_or_hint(paragraph, "Empty text block")}
                }
            }
        }
    }
}
