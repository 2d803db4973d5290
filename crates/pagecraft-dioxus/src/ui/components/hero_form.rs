use dioxus::prelude::*;
use pagecraft_engine::models::HeroData;
use pagecraft_engine::BlockData;

#[component]
pub fn HeroForm(data: HeroData, on_change: Callback<BlockData>) -> Element {
    let commit = move |update: fn(&mut HeroData, String), data: HeroData| {
        move |event: Event<FormData>| {
            let mut next = data.clone();
            update(&mut next, event.value());
            on_change.call(BlockData::Hero(next));
        }
    };

    rsx! {
        label { "Title" }
        input {
            r#type: "text",
            value: data.title.clone(),
            oninput: commit(|d, v| d.title = v, data.clone()),
        }
        label { "Subtitle" }
        input {
            r#type: "text",
            value: data.subtitle.clone(),
            oninput: commit(|d, v| d.subtitle = v, data.clone()),
        }
        label { "Background image URL" }
        input {
            r#type: "text",
            value: data.image_url.clone(),
            oninput: commit(|d, v| d.image_url = v, data.clone()),
        }
        label { "Button label" }
        input {
            r#type: "text",
            value: data.cta_label.clone(),
            oninput: commit(|d, v| d.cta_label = v, data.clone()),
        }
        label { "Button link" }
        input {
            r#type: "text",
            value: data.cta_link.clone(),
            oninput: commit(|d, v| d.cta_link = v, data.clone()),
        }
    }
}
