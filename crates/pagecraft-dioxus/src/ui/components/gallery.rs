use dioxus::prelude::*;
use pagecraft_engine::models::GalleryData;

#[component]
pub fn Gallery(data: GalleryData) -> Element {
    // Clamp so a malformed column count cannot collapse the grid.
    let columns = data.columns.clamp(1, 6);

    rsx! {
        div {
            class: "gallery-grid",
            style: "grid-template-columns: repeat({columns}, 1fr);",
            if data.images.is_empty() {
                div { class: "placeholder", "Empty gallery" }
            }
            for (i, image) in data.images.iter().enumerate() {
                img {
                    key: "{i}",
                    src: image.url.clone(),
                    alt: image.alt.clone(),
                }
            }
        }
    }
}
