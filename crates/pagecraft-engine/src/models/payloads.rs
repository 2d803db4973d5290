//! Per-type block payload shapes and the tagged [`BlockData`] union.
//!
//! Each block type defines its payload shape exactly once, here. The rest of
//! the engine (document, editor) treats payloads as opaque values and only
//! ever replaces them wholesale. Every payload struct carries
//! `#[serde(default, deny_unknown_fields)]`: missing fields recover to
//! defaults instead of failing, while a payload carrying fields this client
//! does not know demotes to the preserved [`UnknownBlockData`] record so a
//! resave cannot destroy what a newer client wrote.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::block::BlockType;

/// Type-tagged block payload: one variant per [`BlockType`] plus a
/// forward-compatibility `Unknown` case.
///
/// Persisted as `{"type": "<tag>", "data": {...}}`. A tag from a newer
/// schema version, or a known tag whose stored payload does not match its
/// declared shape (wrong field type, or fields this client does not know),
/// deserializes into `Unknown` with the raw value preserved, so such blocks
/// round-trip through a save/reload cycle untouched even though this client
/// cannot edit them.
///
/// The enum is deliberately closed: exhaustive `match` over it is the
/// compile-time proof that every block type has a registry entry and a
/// renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BlockDataRecord", into = "BlockDataRecord")]
pub enum BlockData {
    Hero(HeroData),
    Text(TextData),
    Image(ImageData),
    Gallery(GalleryData),
    Accordion(AccordionData),
    ArticleGrid(ArticleGridData),
    Form(FormData),
    Pricing(PricingData),
    Testimonials(TestimonialsData),
    Team(TeamData),
    Logos(LogosData),
    Comparison(ComparisonData),
    Features(FeaturesData),
    Separator(SeparatorData),
    Quote(QuoteData),
    Stats(StatsData),
    Map(MapData),
    Chat(ChatData),
    Booking(BookingData),
    Popup(PopupData),
    Newsletter(NewsletterData),
    Cta(CtaData),
    Contact(ContactData),
    LinkGrid(LinkGridData),
    TwoColumn(TwoColumnData),
    InfoBox(InfoBoxData),
    Youtube(YoutubeData),
    Unknown(UnknownBlockData),
}

impl BlockData {
    /// The block type, or `None` for an unknown tag.
    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            BlockData::Hero(_) => Some(BlockType::Hero),
            BlockData::Text(_) => Some(BlockType::Text),
            BlockData::Image(_) => Some(BlockType::Image),
            BlockData::Gallery(_) => Some(BlockType::Gallery),
            BlockData::Accordion(_) => Some(BlockType::Accordion),
            BlockData::ArticleGrid(_) => Some(BlockType::ArticleGrid),
            BlockData::Form(_) => Some(BlockType::Form),
            BlockData::Pricing(_) => Some(BlockType::Pricing),
            BlockData::Testimonials(_) => Some(BlockType::Testimonials),
            BlockData::Team(_) => Some(BlockType::Team),
            BlockData::Logos(_) => Some(BlockType::Logos),
            BlockData::Comparison(_) => Some(BlockType::Comparison),
            BlockData::Features(_) => Some(BlockType::Features),
            BlockData::Separator(_) => Some(BlockType::Separator),
            BlockData::Quote(_) => Some(BlockType::Quote),
            BlockData::Stats(_) => Some(BlockType::Stats),
            BlockData::Map(_) => Some(BlockType::Map),
            BlockData::Chat(_) => Some(BlockType::Chat),
            BlockData::Booking(_) => Some(BlockType::Booking),
            BlockData::Popup(_) => Some(BlockType::Popup),
            BlockData::Newsletter(_) => Some(BlockType::Newsletter),
            BlockData::Cta(_) => Some(BlockType::Cta),
            BlockData::Contact(_) => Some(BlockType::Contact),
            BlockData::LinkGrid(_) => Some(BlockType::LinkGrid),
            BlockData::TwoColumn(_) => Some(BlockType::TwoColumn),
            BlockData::InfoBox(_) => Some(BlockType::InfoBox),
            BlockData::Youtube(_) => Some(BlockType::Youtube),
            BlockData::Unknown(_) => None,
        }
    }

    /// The persisted tag string, including unknown tags.
    pub fn tag(&self) -> &str {
        if let BlockData::Unknown(unknown) = self {
            return &unknown.tag;
        }
        // Every non-Unknown variant maps to a BlockType.
        self.block_type().map(BlockType::as_str).unwrap_or("unknown")
    }

    fn decode(block_type: BlockType, value: Value) -> Result<Self, serde_json::Error> {
        // A missing "data" field means "all defaults" for the tag's shape.
        let value = if value.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            value
        };
        Ok(match block_type {
            BlockType::Hero => BlockData::Hero(serde_json::from_value(value)?),
            BlockType::Text => BlockData::Text(serde_json::from_value(value)?),
            BlockType::Image => BlockData::Image(serde_json::from_value(value)?),
            BlockType::Gallery => BlockData::Gallery(serde_json::from_value(value)?),
            BlockType::Accordion => BlockData::Accordion(serde_json::from_value(value)?),
            BlockType::ArticleGrid => BlockData::ArticleGrid(serde_json::from_value(value)?),
            BlockType::Form => BlockData::Form(serde_json::from_value(value)?),
            BlockType::Pricing => BlockData::Pricing(serde_json::from_value(value)?),
            BlockType::Testimonials => BlockData::Testimonials(serde_json::from_value(value)?),
            BlockType::Team => BlockData::Team(serde_json::from_value(value)?),
            BlockType::Logos => BlockData::Logos(serde_json::from_value(value)?),
            BlockType::Comparison => BlockData::Comparison(serde_json::from_value(value)?),
            BlockType::Features => BlockData::Features(serde_json::from_value(value)?),
            BlockType::Separator => BlockData::Separator(serde_json::from_value(value)?),
            BlockType::Quote => BlockData::Quote(serde_json::from_value(value)?),
            BlockType::Stats => BlockData::Stats(serde_json::from_value(value)?),
            BlockType::Map => BlockData::Map(serde_json::from_value(value)?),
            BlockType::Chat => BlockData::Chat(serde_json::from_value(value)?),
            BlockType::Booking => BlockData::Booking(serde_json::from_value(value)?),
            BlockType::Popup => BlockData::Popup(serde_json::from_value(value)?),
            BlockType::Newsletter => BlockData::Newsletter(serde_json::from_value(value)?),
            BlockType::Cta => BlockData::Cta(serde_json::from_value(value)?),
            BlockType::Contact => BlockData::Contact(serde_json::from_value(value)?),
            BlockType::LinkGrid => BlockData::LinkGrid(serde_json::from_value(value)?),
            BlockType::TwoColumn => BlockData::TwoColumn(serde_json::from_value(value)?),
            BlockType::InfoBox => BlockData::InfoBox(serde_json::from_value(value)?),
            BlockType::Youtube => BlockData::Youtube(serde_json::from_value(value)?),
        })
    }

    fn encode(&self) -> Value {
        let result = match self {
            BlockData::Hero(data) => serde_json::to_value(data),
            BlockData::Text(data) => serde_json::to_value(data),
            BlockData::Image(data) => serde_json::to_value(data),
            BlockData::Gallery(data) => serde_json::to_value(data),
            BlockData::Accordion(data) => serde_json::to_value(data),
            BlockData::ArticleGrid(data) => serde_json::to_value(data),
            BlockData::Form(data) => serde_json::to_value(data),
            BlockData::Pricing(data) => serde_json::to_value(data),
            BlockData::Testimonials(data) => serde_json::to_value(data),
            BlockData::Team(data) => serde_json::to_value(data),
            BlockData::Logos(data) => serde_json::to_value(data),
            BlockData::Comparison(data) => serde_json::to_value(data),
            BlockData::Features(data) => serde_json::to_value(data),
            BlockData::Separator(data) => serde_json::to_value(data),
            BlockData::Quote(data) => serde_json::to_value(data),
            BlockData::Stats(data) => serde_json::to_value(data),
            BlockData::Map(data) => serde_json::to_value(data),
            BlockData::Chat(data) => serde_json::to_value(data),
            BlockData::Booking(data) => serde_json::to_value(data),
            BlockData::Popup(data) => serde_json::to_value(data),
            BlockData::Newsletter(data) => serde_json::to_value(data),
            BlockData::Cta(data) => serde_json::to_value(data),
            BlockData::Contact(data) => serde_json::to_value(data),
            BlockData::LinkGrid(data) => serde_json::to_value(data),
            BlockData::TwoColumn(data) => serde_json::to_value(data),
            BlockData::InfoBox(data) => serde_json::to_value(data),
            BlockData::Youtube(data) => serde_json::to_value(data),
            BlockData::Unknown(unknown) => return unknown.data.clone(),
        };
        // Payload structs are plain string/bool/int data; serialization to a
        // JSON value cannot fail for them.
        result.unwrap_or(Value::Null)
    }
}

/// Wire form of [`BlockData`]: the tag plus the raw payload value.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BlockDataRecord {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    data: Value,
}

impl From<BlockDataRecord> for BlockData {
    fn from(record: BlockDataRecord) -> Self {
        let Ok(block_type) = record.tag.parse::<BlockType>() else {
            return BlockData::Unknown(UnknownBlockData {
                tag: record.tag,
                data: record.data,
            });
        };
        match BlockData::decode(block_type, record.data.clone()) {
            Ok(data) => data,
            // A known tag whose payload does not match its declared shape is
            // preserved verbatim instead of coerced, so nothing is lost when
            // the page is saved again.
            Err(_) => BlockData::Unknown(UnknownBlockData {
                tag: record.tag,
                data: record.data,
            }),
        }
    }
}

impl From<BlockData> for BlockDataRecord {
    fn from(data: BlockData) -> Self {
        BlockDataRecord {
            tag: data.tag().to_string(),
            data: data.encode(),
        }
    }
}

/// Payload of a tag this client does not understand, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownBlockData {
    pub tag: String,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroData {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub cta_label: String,
    pub cta_link: String,
}

impl Default for HeroData {
    fn default() -> Self {
        Self {
            title: "Welcome".to_string(),
            subtitle: "Introduce your page with a strong opening".to_string(),
            image_url: String::new(),
            cta_label: "Learn more".to_string(),
            cta_link: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextData {
    pub content: String,
}

impl Default for TextData {
    fn default() -> Self {
        Self {
            content: "Write your text here.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageData {
    pub url: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryData {
    pub images: Vec<GalleryImage>,
    pub columns: u8,
}

impl Default for GalleryData {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            columns: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionData {
    pub items: Vec<AccordionItem>,
}

impl Default for AccordionData {
    fn default() -> Self {
        Self {
            items: vec![AccordionItem {
                title: "First question".to_string(),
                content: "First answer.".to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArticleGridData {
    pub category: String,
    pub limit: u8,
    pub show_excerpt: bool,
}

impl Default for ArticleGridData {
    fn default() -> Self {
        Self {
            category: String::new(),
            limit: 6,
            show_excerpt: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
    Textarea,
    Checkbox,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormData {
    pub title: String,
    pub fields: Vec<FormField>,
    pub submit_label: String,
    pub success_message: String,
}

impl Default for FormData {
    fn default() -> Self {
        // A form is only usable with at least one field and a submit label.
        Self {
            title: "Contact us".to_string(),
            fields: vec![FormField {
                name: "email".to_string(),
                label: "Email".to_string(),
                kind: FieldKind::Email,
                required: true,
            }],
            submit_label: "Send".to_string(),
            success_message: "Thanks, we'll be in touch.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingData {
    pub plans: Vec<PricingPlan>,
}

impl Default for PricingData {
    fn default() -> Self {
        Self {
            plans: vec![PricingPlan {
                name: "Basic".to_string(),
                price: "9".to_string(),
                period: "month".to_string(),
                features: vec!["One feature".to_string()],
                highlighted: false,
            }],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialsData {
    pub entries: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeamData {
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logo {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogosData {
    pub title: String,
    pub logos: Vec<Logo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonData {
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl Default for ComparisonData {
    fn default() -> Self {
        Self {
            columns: vec!["Option A".to_string(), "Option B".to_string()],
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesData {
    pub title: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparatorStyle {
    #[default]
    Line,
    Dots,
    Blank,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeparatorData {
    pub style: SeparatorStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteData {
    pub text: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsData {
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapData {
    pub address: String,
    pub zoom: u8,
}

impl Default for MapData {
    fn default() -> Self {
        Self {
            address: String::new(),
            zoom: 14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChatData {
    pub greeting: String,
    pub placeholder: String,
}

impl Default for ChatData {
    fn default() -> Self {
        Self {
            greeting: "Hi! How can we help?".to_string(),
            placeholder: "Type a message".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingData {
    pub title: String,
    pub calendar_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopupTrigger {
    #[default]
    Delay,
    ExitIntent,
    Scroll,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopupData {
    pub trigger: PopupTrigger,
    pub heading: String,
    pub body: String,
    pub dismiss_label: String,
}

impl Default for PopupData {
    fn default() -> Self {
        Self {
            trigger: PopupTrigger::Delay,
            heading: String::new(),
            body: String::new(),
            dismiss_label: "Close".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewsletterData {
    pub heading: String,
    pub placeholder: String,
    pub submit_label: String,
}

impl Default for NewsletterData {
    fn default() -> Self {
        Self {
            heading: "Stay up to date".to_string(),
            placeholder: "Your email".to_string(),
            submit_label: "Subscribe".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CtaData {
    pub heading: String,
    pub body: String,
    pub button_label: String,
    pub button_link: String,
}

impl Default for CtaData {
    fn default() -> Self {
        Self {
            heading: "Ready to get started?".to_string(),
            body: String::new(),
            button_label: "Get started".to_string(),
            button_link: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactData {
    pub heading: String,
    pub email: String,
    pub phone: String,
    pub show_form: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkCard {
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkGridData {
    pub links: Vec<LinkCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwoColumnData {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfoBoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InfoBoxData {
    pub style: InfoBoxStyle,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YoutubeData {
    pub video_id: String,
    pub autoplay: bool,
}
