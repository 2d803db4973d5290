use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decoration::{Animation, Spacing};
use crate::models::payloads::BlockData;

/// Stable identity of a block within a page.
///
/// Assigned once at creation and never reassigned: the id is the sole
/// reorder/identity key, it survives reorders, renders and data edits, and
/// doubles as the persistent storage key and the UI list key. Regenerating
/// an id on update is a defect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Mint a fresh, process-unique id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Closed enumeration of the block kinds a page can contain.
///
/// The kebab-case string form (`as_str`) is part of the storage contract:
/// tags may be added over time but existing tags are never removed or
/// repurposed once persisted pages exist. Registry metadata (label, group,
/// icon, default payload) lives in [`crate::registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Hero,
    Text,
    Image,
    Gallery,
    Accordion,
    ArticleGrid,
    Form,
    Pricing,
    Testimonials,
    Team,
    Logos,
    Comparison,
    Features,
    Separator,
    Quote,
    Stats,
    Map,
    Chat,
    Booking,
    Popup,
    Newsletter,
    Cta,
    Contact,
    LinkGrid,
    TwoColumn,
    InfoBox,
    Youtube,
}

impl BlockType {
    /// Every known block type, in catalog order.
    pub const ALL: [BlockType; 27] = [
        BlockType::Hero,
        BlockType::Text,
        BlockType::Image,
        BlockType::Gallery,
        BlockType::Accordion,
        BlockType::ArticleGrid,
        BlockType::Form,
        BlockType::Pricing,
        BlockType::Testimonials,
        BlockType::Team,
        BlockType::Logos,
        BlockType::Comparison,
        BlockType::Features,
        BlockType::Separator,
        BlockType::Quote,
        BlockType::Stats,
        BlockType::Map,
        BlockType::Chat,
        BlockType::Booking,
        BlockType::Popup,
        BlockType::Newsletter,
        BlockType::Cta,
        BlockType::Contact,
        BlockType::LinkGrid,
        BlockType::TwoColumn,
        BlockType::InfoBox,
        BlockType::Youtube,
    ];

    /// The persisted tag string for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Text => "text",
            BlockType::Image => "image",
            BlockType::Gallery => "gallery",
            BlockType::Accordion => "accordion",
            BlockType::ArticleGrid => "article-grid",
            BlockType::Form => "form",
            BlockType::Pricing => "pricing",
            BlockType::Testimonials => "testimonials",
            BlockType::Team => "team",
            BlockType::Logos => "logos",
            BlockType::Comparison => "comparison",
            BlockType::Features => "features",
            BlockType::Separator => "separator",
            BlockType::Quote => "quote",
            BlockType::Stats => "stats",
            BlockType::Map => "map",
            BlockType::Chat => "chat",
            BlockType::Booking => "booking",
            BlockType::Popup => "popup",
            BlockType::Newsletter => "newsletter",
            BlockType::Cta => "cta",
            BlockType::Contact => "contact",
            BlockType::LinkGrid => "link-grid",
            BlockType::TwoColumn => "two-column",
            BlockType::InfoBox => "info-box",
            BlockType::Youtube => "youtube",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for tag strings that name no known block type.
///
/// This is a caller error at the string boundary; inside the crate the
/// closed [`BlockType`] enum makes the unknown-tag case unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block type tag `{0}`")]
pub struct ParseBlockTypeError(pub String);

impl FromStr for BlockType {
    type Err = ParseBlockTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|block_type| block_type.as_str() == s)
            .ok_or_else(|| ParseBlockTypeError(s.to_string()))
    }
}

/// One entry in a page's content list.
///
/// `data` carries both the type tag and the type-specific payload and is
/// mutated only by whole-payload replacement. `spacing` and `animation` are
/// optional presentation decorations, independent of the payload; absence
/// means "inherit the system default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub data: BlockData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl Block {
    /// Create a block with a freshly minted id and no decorations.
    pub fn new(data: BlockData) -> Self {
        Self {
            id: BlockId::new(),
            data,
            spacing: None,
            animation: None,
        }
    }

    /// The block's type, or `None` for a tag this client does not know.
    pub fn block_type(&self) -> Option<BlockType> {
        self.data.block_type()
    }

    /// The persisted tag string, including unknown tags.
    pub fn tag(&self) -> &str {
        self.data.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_ids_are_unique() {
        let a = BlockId::new();
        let b = BlockId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn every_tag_round_trips_through_from_str() {
        for block_type in BlockType::ALL {
            let parsed: BlockType = block_type.as_str().parse().unwrap();
            assert_eq!(parsed, block_type);
        }
    }

    #[test]
    fn unknown_tag_is_a_typed_error() {
        let err = "future-block".parse::<BlockType>().unwrap_err();
        assert_eq!(err, ParseBlockTypeError("future-block".to_string()));
        assert_eq!(err.to_string(), "unknown block type tag `future-block`");
    }

    #[test]
    fn tags_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for block_type in BlockType::ALL {
            assert!(seen.insert(block_type.as_str()), "duplicate tag");
        }
    }
}
