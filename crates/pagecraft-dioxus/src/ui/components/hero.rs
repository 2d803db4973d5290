use crate::ui::components::block_view::text_or_hint;
use dioxus::prelude::*;
use pagecraft_engine::models::HeroData;

#[component]
pub fn Hero(data: HeroData) -> Element {
    rsx! {
        section {
            class: "hero-block",
            style: if !data.image_url.is_empty() {
                format!("background-image: url({});", data.image_url)
            } else {
                String::new()
            },
            h1 { {text_or_hint(&data.title, "Hero title")} }
            if !data.subtitle.is_empty() {
                p { "{data.subtitle}" }
            }
            if !data.cta_label.is_empty() {
                a {
                    class: "hero-cta",
                    href: data.cta_link.clone(),
                    "{data.cta_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn empty_title_renders_a_hint_instead_of_nothing() {
        let mut dom = VirtualDom::new_with_props(
            Hero,
            HeroProps {
                data: HeroData {
                    title: String::new(),
                    ..Default::default()
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("placeholder"));
        assert!(html.contains("Hero title"));
    }
}
