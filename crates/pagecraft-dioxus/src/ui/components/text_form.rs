use dioxus::prelude::*;
use pagecraft_engine::models::TextData;
use pagecraft_engine::BlockData;

#[component]
pub fn TextForm(data: TextData, on_change: Callback<BlockData>) -> Element {
    rsx! {
        label { "Content" }
        textarea {
            value: data.content.clone(),
            rows: 8,
            oninput: move |event: Event<FormData>| {
                on_change.call(BlockData::Text(TextData {
                    content: event.value(),
                }));
            },
        }
    }
}
