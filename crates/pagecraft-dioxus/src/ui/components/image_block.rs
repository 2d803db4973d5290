use dioxus::prelude::*;
use pagecraft_engine::models::ImageData;

#[component]
pub fn ImageBlock(data: ImageData) -> Element {
    rsx! {
        figure {
            class: "image-block",
            if data.url.is_empty() {
                div { class: "placeholder", "No image selected" }
            } else {
                img { src: data.url.clone(), alt: data.alt.clone() }
            }
            if !data.caption.is_empty() {
                figcaption { "{data.caption}" }
            }
        }
    }
}
