use crate::ui::components::block_view::text_or_hint;
use dioxus::prelude::*;
use pagecraft_engine::models::TwoColumnData;

#[component]
pub fn TwoColumn(data: TwoColumnData) -> Element {
    rsx! {
        div {
            class: "two-column-row",
            div { {text_or_hint(&data.left, "Left column")} }
            div { {text_or_hint(&data.right, "Right column")} }
        }
    }
}
