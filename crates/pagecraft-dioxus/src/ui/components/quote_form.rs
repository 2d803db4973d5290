use dioxus::prelude::*;
use pagecraft_engine::models::QuoteData;
use pagecraft_engine::BlockData;

#[component]
pub fn QuoteForm(data: QuoteData, on_change: Callback<BlockData>) -> Element {
    rsx! {
        label { "Quote" }
        textarea {
            value: data.text.clone(),
            rows: 4,
            oninput: {
                let data = data.clone();
                move |event: Event<FormData>| {
                    on_change.call(BlockData::Quote(QuoteData {
                        text: event.value(),
                        attribution: data.attribution.clone(),
                    }));
                }
            },
        }
        label { "Attribution" }
        input {
            r#type: "text",
            value: data.attribution.clone(),
            oninput: {
                let data = data.clone();
                move |event: Event<FormData>| {
                    on_change.call(BlockData::Quote(QuoteData {
                        text: data.text.clone(),
                        attribution: event.value(),
                    }));
                }
            },
        }
    }
}
