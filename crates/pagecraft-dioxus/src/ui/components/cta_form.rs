use dioxus::prelude::*;
use pagecraft_engine::models::CtaData;
use pagecraft_engine::BlockData;

#[component]
pub fn CtaForm(data: CtaData, on_change: Callback<BlockData>) -> Element {
    let commit = move |update: fn(&mut CtaData, String), data: CtaData| {
        move |event: Event<FormData>| {
            let mut next = data.clone();
            update(&mut next, event.value());
            on_change.call(BlockData::Cta(next));
        }
    };

    rsx! {
        label { "Heading" }
        input {
            r#type: "text",
            value: data.heading.clone(),
            oninput: commit(|d, v| d.heading = v, data.clone()),
        }
        label { "Body" }
        textarea {
            value: data.body.clone(),
            rows: 3,
            oninput: commit(|d, v| d.body = v, data.clone()),
        }
        label { "Button label" }
        input {
            r#type: "text",
            value: data.button_label.clone(),
            oninput: commit(|d, v| d.button_label = v, data.clone()),
        }
        label { "Button link" }
        input {
            r#type: "text",
            value: data.button_link.clone(),
            oninput: commit(|d, v| d.button_link = v, data.clone()),
        }
    }
}
