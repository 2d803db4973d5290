use dioxus::prelude::*;
use pagecraft_engine::models::TeamData;

#[component]
pub fn Team(data: TeamData) -> Element {
    rsx! {
        div {
            class: "team-row",
            if data.members.is_empty() {
                div { class: "placeholder", "No team members" }
            }
            for (i, member) in data.members.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "team-member",
                    if !member.photo_url.is_empty() {
                        img { src: member.photo_url.clone(), alt: member.name.clone() }
                    }
                    h4 { "{member.name}" }
                    p { "{member.role}" }
                }
            }
        }
    }
}
