use crate::ui::components::{
    CtaForm, DecorationForm, HeroForm, ImageForm, JsonForm, QuoteForm, TextForm, YoutubeForm,
};
use dioxus::prelude::*;
use pagecraft_engine::editing::{Cmd, RenderBlock};
use pagecraft_engine::BlockData;

/// Type-specific editing panel for the active block.
///
/// The common types get dedicated forms; the long tail is edited as raw
/// payload JSON through [`JsonForm`]. Every form sends a complete
/// replacement payload via `Cmd::UpdateData`, never a field delta.
#[component]
pub fn EditorPanel(block: RenderBlock, on_command: Callback<Cmd>) -> Element {
    let on_change = {
        let id = block.id.clone();
        Callback::new(move |data: BlockData| {
            on_command.call(Cmd::UpdateData {
                id: id.clone(),
                data,
            });
        })
    };

    let form = match &block.data {
        BlockData::Hero(data) => rsx! { HeroForm { data: data.clone(), on_change } },
        BlockData::Text(data) => rsx! { TextForm { data: data.clone(), on_change } },
        BlockData::Image(data) => rsx! { ImageForm { data: data.clone(), on_change } },
        BlockData::Quote(data) => rsx! { QuoteForm { data: data.clone(), on_change } },
        BlockData::Cta(data) => rsx! { CtaForm { data: data.clone(), on_change } },
        BlockData::Youtube(data) => rsx! { YoutubeForm { data: data.clone(), on_change } },
        BlockData::Unknown(data) => rsx! {
            p {
                class: "unknown-block",
                "This \"{data.tag}\" block comes from a newer version and cannot "
                "be edited here. Its content is preserved unchanged."
            }
        },
        other => {
            let tag = other.tag().to_string();
            let value = serde_json::to_value(other)
                .ok()
                .and_then(|record| record.get("data").cloned())
                .unwrap_or(serde_json::Value::Null);
            rsx! { JsonForm { tag, value, on_change } }
        }
    };

    rsx! {
        div {
            class: "editor-panel",
            {form}
            DecorationForm {
                id: block.id.clone(),
                spacing: block.spacing,
                animation: block.animation,
                on_command,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pagecraft_engine::editing::BlockMode;
    use pagecraft_engine::BlockType;

    fn render_panel(data: BlockData) -> String {
        let block = RenderBlock {
            id: pagecraft_engine::BlockId::new(),
            index: 0,
            data,
            spacing: None,
            animation: None,
            mode: BlockMode::Edit,
            css_classes: String::new(),
        };
        #[component]
        fn Harness(block: RenderBlock) -> Element {
            rsx! {
                EditorPanel {
                    block,
                    on_command: Callback::new(|_| {}),
                }
            }
        }

        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { block });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn hero_gets_a_dedicated_form() {
        let html = render_panel(BlockType::Hero.default_data());
        assert!(html.contains("Subtitle"));
        assert!(!html.contains("json-form"));
    }

    #[test]
    fn long_tail_types_fall_back_to_the_json_form() {
        let html = render_panel(BlockType::Pricing.default_data());
        assert!(html.contains("json-form"));
    }

    #[test]
    fn unknown_payloads_are_not_editable() {
        let data: BlockData = serde_json::from_value(serde_json::json!({
            "type": "mystery-widget",
            "data": {}
        }))
        .unwrap();
        let html = render_panel(data);
        assert!(html.contains("preserved unchanged"));
        assert!(!html.contains("json-form"));
    }

    #[test]
    fn decoration_controls_are_always_present() {
        for data in [
            BlockType::Hero.default_data(),
            BlockType::Stats.default_data(),
        ] {
            let html = render_panel(data);
            assert!(html.contains("decoration-form"));
        }
    }
}
