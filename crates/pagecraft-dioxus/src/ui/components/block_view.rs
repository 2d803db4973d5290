use crate::ui::components::{
    Accordion, ArticleGrid, Booking, Chat, Comparison, Contact, Cta, Features, FormBlock, Gallery,
    Hero, ImageBlock, InfoBox, LinkGrid, Logos, MapBlock, Newsletter, Popup, Pricing, QuoteBlock,
    Separator, Stats, Team, Testimonials, TextBlock, TwoColumn, UnknownBlock, Youtube,
};
use dioxus::prelude::*;
use pagecraft_engine::BlockData;

/// Read-only preview dispatch: one component per block type. The match is
/// exhaustive on purpose so adding a variant forces a rendering decision.
#[component]
pub fn BlockPreview(data: BlockData) -> Element {
    match &data {
        BlockData::Hero(data) => rsx! { Hero { data: data.clone() } },
        BlockData::Text(data) => rsx! { TextBlock { data: data.clone() } },
        BlockData::Image(data) => rsx! { ImageBlock { data: data.clone() } },
        BlockData::Gallery(data) => rsx! { Gallery { data: data.clone() } },
        BlockData::Accordion(data) => rsx! { Accordion { data: data.clone() } },
        BlockData::ArticleGrid(data) => rsx! { ArticleGrid { data: data.clone() } },
        BlockData::Form(data) => rsx! { FormBlock { data: data.clone() } },
        BlockData::Pricing(data) => rsx! { Pricing { data: data.clone() } },
        BlockData::Testimonials(data) => rsx! { Testimonials { data: data.clone() } },
        BlockData::Team(data) => rsx! { Team { data: data.clone() } },
        BlockData::Logos(data) => rsx! { Logos { data: data.clone() } },
        BlockData::Comparison(data) => rsx! { Comparison { data: data.clone() } },
        BlockData::Features(data) => rsx! { Features { data: data.clone() } },
        BlockData::Separator(data) => rsx! { Separator { data: data.clone() } },
        BlockData::Quote(data) => rsx! { QuoteBlock { data: data.clone() } },
        BlockData::Stats(data) => rsx! { Stats { data: data.clone() } },
        BlockData::Map(data) => rsx! { MapBlock { data: data.clone() } },
        BlockData::Chat(data) => rsx! { Chat { data: data.clone() } },
        BlockData::Booking(data) => rsx! { Booking { data: data.clone() } },
        BlockData::Popup(data) => rsx! { Popup { data: data.clone() } },
        BlockData::Newsletter(data) => rsx! { Newsletter { data: data.clone() } },
        BlockData::Cta(data) => rsx! { Cta { data: data.clone() } },
        BlockData::Contact(data) => rsx! { Contact { data: data.clone() } },
        BlockData::LinkGrid(data) => rsx! { LinkGrid { data: data.clone() } },
        BlockData::TwoColumn(data) => rsx! { TwoColumn { data: data.clone() } },
        BlockData::InfoBox(data) => rsx! { InfoBox { data: data.clone() } },
        BlockData::Youtube(data) => rsx! { Youtube { data: data.clone() } },
        BlockData::Unknown(data) => rsx! { UnknownBlock { data: data.clone() } },
    }
}

/// Text node for a payload field, with a muted hint when the field is
/// still empty. Used by the preview components only; published rendering
/// is out of scope here.
pub(crate) fn text_or_hint(value: &str, hint: &str) -> Element {
    if value.is_empty() {
        rsx! { span { class: "placeholder", "{hint}" } }
    } else {
        rsx! { "{value}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pagecraft_engine::BlockType;

    fn render_preview(data: BlockData) -> String {
        let mut dom = VirtualDom::new_with_props(BlockPreview, BlockPreviewProps { data });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn every_known_type_renders_without_panicking() {
        for block_type in BlockType::ALL {
            let html = render_preview(block_type.default_data());
            assert!(
                !html.is_empty(),
                "{} rendered empty markup",
                block_type.as_str()
            );
        }
    }

    #[test]
    fn unknown_block_renders_placeholder() {
        let data: BlockData = serde_json::from_value(serde_json::json!({
            "type": "mystery-widget",
            "data": { "x": 1 }
        }))
        .unwrap();
        let html = render_preview(data);
        assert!(html.contains("mystery-widget"));
        assert!(html.contains("unknown-block"));
    }
}
