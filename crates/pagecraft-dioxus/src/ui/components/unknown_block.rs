use dioxus::prelude::*;
use pagecraft_engine::models::UnknownBlockData;

/// Placeholder for a block whose type this editor does not know. The
/// payload is preserved verbatim in the document, so newer tooling can
/// still read it after a round trip through here.
#[component]
pub fn UnknownBlock(data: UnknownBlockData) -> Element {
    rsx! {
        div {
            class: "unknown-block",
            "Unknown block type \"{data.tag}\". Its content is kept as-is."
        }
    }
}
