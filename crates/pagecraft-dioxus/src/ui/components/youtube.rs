use dioxus::prelude::*;
use pagecraft_engine::models::YoutubeData;

#[component]
pub fn Youtube(data: YoutubeData) -> Element {
    rsx! {
        div {
            class: "youtube-block",
            if data.video_id.is_empty() {
                div { class: "placeholder", "No video selected" }
            } else {
                img {
                    src: "https://img.youtube.com/vi/{data.video_id}/hqdefault.jpg",
                    alt: "Video thumbnail",
                }
                if data.autoplay {
                    p { class: "placeholder", "Autoplays on the published page" }
                }
            }
        }
    }
}
