use crate::ui::components::block_view::text_or_hint;
use dioxus::prelude::*;
use pagecraft_engine::models::QuoteData;

#[component]
pub fn QuoteBlock(data: QuoteData) -> Element {
    rsx! {
        blockquote {
            class: "quote-block",
            p { {text_or_hint(&data.text, "Empty quote")} }
            if !data.attribution.is_empty() {
                footer { "— {data.attribution}" }
            }
        }
    }
}
