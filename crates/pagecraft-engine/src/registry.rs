//! Block type registry: default payload construction and catalog metadata.
//!
//! Totality is enforced by exhaustive `match` over the closed [`BlockType`]
//! enum rather than a runtime string-keyed table, so adding a block type
//! without a default payload or catalog entry is a compile error, never a
//! silent `None` at runtime.

use crate::models::block::BlockType;
use crate::models::payloads::*;

/// Catalog grouping for the add-block menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockGroup {
    Content,
    Media,
    Collections,
    Engagement,
}

impl BlockGroup {
    pub const ALL: [BlockGroup; 4] = [
        BlockGroup::Content,
        BlockGroup::Media,
        BlockGroup::Collections,
        BlockGroup::Engagement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BlockGroup::Content => "Content",
            BlockGroup::Media => "Media",
            BlockGroup::Collections => "Collections",
            BlockGroup::Engagement => "Engagement",
        }
    }

    /// Block types in this group, in catalog order.
    pub fn members(self) -> impl Iterator<Item = BlockType> {
        BlockType::ALL
            .into_iter()
            .filter(move |block_type| block_type.group() == self)
    }
}

impl BlockType {
    /// Default payload for this type: pure, total, and valid against the
    /// type's own required-field constraints (e.g. a form default carries a
    /// submit label and one field).
    pub fn default_data(self) -> BlockData {
        match self {
            BlockType::Hero => BlockData::Hero(HeroData::default()),
            BlockType::Text => BlockData::Text(TextData::default()),
            BlockType::Image => BlockData::Image(ImageData::default()),
            BlockType::Gallery => BlockData::Gallery(GalleryData::default()),
            BlockType::Accordion => BlockData::Accordion(AccordionData::default()),
            BlockType::ArticleGrid => BlockData::ArticleGrid(ArticleGridData::default()),
            BlockType::Form => BlockData::Form(FormData::default()),
            BlockType::Pricing => BlockData::Pricing(PricingData::default()),
            BlockType::Testimonials => BlockData::Testimonials(TestimonialsData::default()),
            BlockType::Team => BlockData::Team(TeamData::default()),
            BlockType::Logos => BlockData::Logos(LogosData::default()),
            BlockType::Comparison => BlockData::Comparison(ComparisonData::default()),
            BlockType::Features => BlockData::Features(FeaturesData::default()),
            BlockType::Separator => BlockData::Separator(SeparatorData::default()),
            BlockType::Quote => BlockData::Quote(QuoteData::default()),
            BlockType::Stats => BlockData::Stats(StatsData::default()),
            BlockType::Map => BlockData::Map(MapData::default()),
            BlockType::Chat => BlockData::Chat(ChatData::default()),
            BlockType::Booking => BlockData::Booking(BookingData::default()),
            BlockType::Popup => BlockData::Popup(PopupData::default()),
            BlockType::Newsletter => BlockData::Newsletter(NewsletterData::default()),
            BlockType::Cta => BlockData::Cta(CtaData::default()),
            BlockType::Contact => BlockData::Contact(ContactData::default()),
            BlockType::LinkGrid => BlockData::LinkGrid(LinkGridData::default()),
            BlockType::TwoColumn => BlockData::TwoColumn(TwoColumnData::default()),
            BlockType::InfoBox => BlockData::InfoBox(InfoBoxData::default()),
            BlockType::Youtube => BlockData::Youtube(YoutubeData::default()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockType::Hero => "Hero",
            BlockType::Text => "Text",
            BlockType::Image => "Image",
            BlockType::Gallery => "Gallery",
            BlockType::Accordion => "Accordion",
            BlockType::ArticleGrid => "Article grid",
            BlockType::Form => "Form",
            BlockType::Pricing => "Pricing",
            BlockType::Testimonials => "Testimonials",
            BlockType::Team => "Team",
            BlockType::Logos => "Logo strip",
            BlockType::Comparison => "Comparison table",
            BlockType::Features => "Feature list",
            BlockType::Separator => "Separator",
            BlockType::Quote => "Quote",
            BlockType::Stats => "Statistics",
            BlockType::Map => "Map",
            BlockType::Chat => "Chat",
            BlockType::Booking => "Booking",
            BlockType::Popup => "Popup",
            BlockType::Newsletter => "Newsletter",
            BlockType::Cta => "Call to action",
            BlockType::Contact => "Contact",
            BlockType::LinkGrid => "Link grid",
            BlockType::TwoColumn => "Two columns",
            BlockType::InfoBox => "Info box",
            BlockType::Youtube => "YouTube",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BlockType::Hero => "Large opening section with headline and call to action",
            BlockType::Text => "Free-form text content",
            BlockType::Image => "A single image with caption",
            BlockType::Gallery => "Grid of images",
            BlockType::Accordion => "Expandable question-and-answer items",
            BlockType::ArticleGrid => "Latest articles from a category",
            BlockType::Form => "Custom form with configurable fields",
            BlockType::Pricing => "Pricing plans side by side",
            BlockType::Testimonials => "Customer quotes",
            BlockType::Team => "Team member portraits",
            BlockType::Logos => "Row of partner or client logos",
            BlockType::Comparison => "Feature comparison table",
            BlockType::Features => "Feature highlights with icons",
            BlockType::Separator => "Visual break between sections",
            BlockType::Quote => "A single highlighted quote",
            BlockType::Stats => "Key numbers at a glance",
            BlockType::Map => "Embedded location map",
            BlockType::Chat => "Live chat widget",
            BlockType::Booking => "Appointment booking",
            BlockType::Popup => "Overlay shown on a trigger",
            BlockType::Newsletter => "Email signup",
            BlockType::Cta => "Prominent conversion prompt",
            BlockType::Contact => "Contact details",
            BlockType::LinkGrid => "Grid of link cards",
            BlockType::TwoColumn => "Side-by-side text columns",
            BlockType::InfoBox => "Highlighted callout box",
            BlockType::Youtube => "Embedded YouTube video",
        }
    }

    /// Icon name for the add-block menu.
    pub fn icon(self) -> &'static str {
        match self {
            BlockType::Hero => "panorama",
            BlockType::Text => "notes",
            BlockType::Image => "photo",
            BlockType::Gallery => "grid_view",
            BlockType::Accordion => "unfold_more",
            BlockType::ArticleGrid => "article",
            BlockType::Form => "list_alt",
            BlockType::Pricing => "sell",
            BlockType::Testimonials => "reviews",
            BlockType::Team => "group",
            BlockType::Logos => "workspaces",
            BlockType::Comparison => "table_chart",
            BlockType::Features => "stars",
            BlockType::Separator => "horizontal_rule",
            BlockType::Quote => "format_quote",
            BlockType::Stats => "monitoring",
            BlockType::Map => "map",
            BlockType::Chat => "chat",
            BlockType::Booking => "event",
            BlockType::Popup => "open_in_new",
            BlockType::Newsletter => "mail",
            BlockType::Cta => "ads_click",
            BlockType::Contact => "contact_page",
            BlockType::LinkGrid => "link",
            BlockType::TwoColumn => "view_column",
            BlockType::InfoBox => "info",
            BlockType::Youtube => "smart_display",
        }
    }

    pub fn group(self) -> BlockGroup {
        match self {
            BlockType::Hero
            | BlockType::Text
            | BlockType::Quote
            | BlockType::TwoColumn
            | BlockType::InfoBox
            | BlockType::Separator
            | BlockType::Cta => BlockGroup::Content,
            BlockType::Image
            | BlockType::Gallery
            | BlockType::Logos
            | BlockType::Map
            | BlockType::Youtube => BlockGroup::Media,
            BlockType::Accordion
            | BlockType::ArticleGrid
            | BlockType::Pricing
            | BlockType::Testimonials
            | BlockType::Team
            | BlockType::Comparison
            | BlockType::Features
            | BlockType::Stats
            | BlockType::LinkGrid => BlockGroup::Collections,
            BlockType::Form
            | BlockType::Chat
            | BlockType::Booking
            | BlockType::Popup
            | BlockType::Newsletter
            | BlockType::Contact => BlockGroup::Engagement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_default_payload_carries_its_own_tag() {
        for block_type in BlockType::ALL {
            let data = block_type.default_data();
            assert_eq!(data.block_type(), Some(block_type));
            assert_eq!(data.tag(), block_type.as_str());
        }
    }

    #[test]
    fn every_default_payload_is_serializable() {
        for block_type in BlockType::ALL {
            let data = block_type.default_data();
            let json = serde_json::to_value(&data).unwrap();
            assert_eq!(json["type"], block_type.as_str());
            // The payload must land under "data" as a JSON object.
            assert!(json["data"].is_object(), "{block_type} payload not an object");
        }
    }

    #[test]
    fn default_construction_is_pure() {
        for block_type in BlockType::ALL {
            assert_eq!(block_type.default_data(), block_type.default_data());
        }
    }

    #[test]
    fn form_default_is_usable() {
        let BlockData::Form(form) = BlockType::Form.default_data() else {
            panic!("form default must be a form payload");
        };
        assert!(!form.submit_label.is_empty());
        assert!(!form.fields.is_empty());
    }

    #[test]
    fn hero_default_has_a_title() {
        let BlockData::Hero(hero) = BlockType::Hero.default_data() else {
            panic!("hero default must be a hero payload");
        };
        assert!(!hero.title.is_empty());
    }

    #[test]
    fn groups_cover_the_whole_catalog() {
        let count: usize = BlockGroup::ALL
            .into_iter()
            .map(|group| group.members().count())
            .sum();
        assert_eq!(count, BlockType::ALL.len());
    }

    #[test]
    fn metadata_is_present_for_all_types() {
        for block_type in BlockType::ALL {
            assert!(!block_type.label().is_empty());
            assert!(!block_type.description().is_empty());
            assert!(!block_type.icon().is_empty());
        }
    }
}
