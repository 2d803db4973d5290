use crate::ui::components::block_view::text_or_hint;
use dioxus::prelude::*;
use pagecraft_engine::models::MapData;

/// Map preview placeholder; the editor does not embed a tile provider.
#[component]
pub fn MapBlock(data: MapData) -> Element {
    rsx! {
        div {
            class: "map-block placeholder",
            "Map: "
            {text_or_hint(&data.address, "No address set")}
            " (zoom {data.zoom})"
        }
    }
}
