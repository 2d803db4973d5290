use dioxus::prelude::*;
use pagecraft_engine::models::ImageData;
use pagecraft_engine::BlockData;

#[component]
pub fn ImageForm(data: ImageData, on_change: Callback<BlockData>) -> Element {
    let commit = move |update: fn(&mut ImageData, String), data: ImageData| {
        move |event: Event<FormData>| {
            let mut next = data.clone();
            update(&mut next, event.value());
            on_change.call(BlockData::Image(next));
        }
    };

    rsx! {
        label { "Image URL" }
        input {
            r#type: "text",
            value: data.url.clone(),
            oninput: commit(|d, v| d.url = v, data.clone()),
        }
        label { "Alt text" }
        input {
            r#type: "text",
            value: data.alt.clone(),
            oninput: commit(|d, v| d.alt = v, data.clone()),
        }
        label { "Caption" }
        input {
            r#type: "text",
            value: data.caption.clone(),
            oninput: commit(|d, v| d.caption = v, data.clone()),
        }
    }
}
