use dioxus::prelude::*;
use pagecraft_engine::models::YoutubeData;
use pagecraft_engine::BlockData;

#[component]
pub fn YoutubeForm(data: YoutubeData, on_change: Callback<BlockData>) -> Element {
    rsx! {
        label { "Video id" }
        input {
            r#type: "text",
            value: data.video_id.clone(),
            oninput: {
                let data = data.clone();
                move |event: Event<FormData>| {
                    on_change.call(BlockData::Youtube(YoutubeData {
                        video_id: event.value(),
                        autoplay: data.autoplay,
                    }));
                }
            },
        }
        label {
            input {
                r#type: "checkbox",
                checked: data.autoplay,
                onchange: {
                    let data = data.clone();
                    move |event: Event<FormData>| {
                        on_change.call(BlockData::Youtube(YoutubeData {
                            video_id: data.video_id.clone(),
                            autoplay: event.checked(),
                        }));
                    }
                },
            }
            "Autoplay"
        }
    }
}
