use dioxus::prelude::*;
use pagecraft_engine::models::StatsData;

#[component]
pub fn Stats(data: StatsData) -> Element {
    rsx! {
        div {
            class: "stats-row",
            if data.stats.is_empty() {
                div { class: "placeholder", "No stats" }
            }
            for (i, stat) in data.stats.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "stat",
                    strong { "{stat.value}" }
                    span { " {stat.label}" }
                }
            }
        }
    }
}
