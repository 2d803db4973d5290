use serde::{Deserialize, Serialize};

use crate::decoration::{Animation, Spacing};
use crate::models::block::{Block, BlockId};
use crate::models::payloads::BlockData;

/// Ordered sequence of blocks representing one page's content.
///
/// Sequence order is the only ordering signal and is the rendering order;
/// there is no separate priority/index field to keep in sync. All block ids
/// are unique. An empty document is a valid (empty) page.
///
/// Every operation is a pure function returning a whole next `Document`
/// value; nothing mutates in place. The caller is responsible for
/// serializing edits (apply one operation's result before issuing the next),
/// which is the entire concurrency story for this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<Block>,
}

/// Structural invariant violations detected when loading a document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("duplicate block id `{0}`")]
    DuplicateBlockId(BlockId),
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from loaded blocks, checking the unique-id invariant.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, DocumentError> {
        let document = Self { blocks };
        document.validate()?;
        Ok(document)
    }

    /// Check the unique-id invariant, for documents arriving from storage.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut seen = std::collections::HashSet::new();
        for block in &self.blocks {
            if !seen.insert(&block.id) {
                return Err(DocumentError::DuplicateBlockId(block.id.clone()));
            }
        }
        Ok(())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| &block.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.position(id).is_some()
    }

    /// Insert `block` at `index`, preserving every other block's identity and
    /// relative order. An index beyond the end clamps to append.
    pub fn insert_at(&self, index: usize, block: Block) -> Document {
        let mut blocks = self.blocks.clone();
        let index = index.min(blocks.len());
        blocks.insert(index, block);
        Document { blocks }
    }

    /// Append `block` at the end.
    pub fn push(&self, block: Block) -> Document {
        self.insert_at(self.blocks.len(), block)
    }

    /// Move the block at `from` so it ends up at `to`, with `to` interpreted
    /// after removal (standard reorder semantics). Either index out of range
    /// returns the document unchanged: reorder indices usually come from
    /// gesture libraries and may race concurrent structural edits.
    pub fn move_to(&self, from: usize, to: usize) -> Document {
        if from >= self.blocks.len() || to >= self.blocks.len() {
            return self.clone();
        }
        let mut blocks = self.blocks.clone();
        let block = blocks.remove(from);
        blocks.insert(to, block);
        Document { blocks }
    }

    /// Replace the targeted block's payload wholesale. `None` when no block
    /// matches `id`; every other block is untouched.
    pub fn with_block_data(&self, id: &BlockId, data: BlockData) -> Option<Document> {
        let index = self.position(id)?;
        let mut blocks = self.blocks.clone();
        blocks[index].data = data;
        Some(Document { blocks })
    }

    /// Replace the targeted block's spacing decoration. Never touches `data`.
    pub fn with_spacing(&self, id: &BlockId, spacing: Option<Spacing>) -> Option<Document> {
        let index = self.position(id)?;
        let mut blocks = self.blocks.clone();
        blocks[index].spacing = spacing;
        Some(Document { blocks })
    }

    /// Replace the targeted block's animation decoration. Never touches `data`.
    pub fn with_animation(&self, id: &BlockId, animation: Option<Animation>) -> Option<Document> {
        let index = self.position(id)?;
        let mut blocks = self.blocks.clone();
        blocks[index].animation = animation;
        Some(Document { blocks })
    }

    /// Remove the matching block. `None` when no block matches `id`.
    pub fn without_block(&self, id: &BlockId) -> Option<Document> {
        let index = self.position(id)?;
        let mut blocks = self.blocks.clone();
        blocks.remove(index);
        Some(Document { blocks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::block::BlockType;
    use crate::models::payloads::TextData;
    use pretty_assertions::assert_eq;

    fn doc_of(types: &[BlockType]) -> Document {
        let blocks = types
            .iter()
            .map(|block_type| Block::new(block_type.default_data()))
            .collect();
        Document::from_blocks(blocks).unwrap()
    }

    fn ids(document: &Document) -> Vec<BlockId> {
        document.blocks().iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn empty_document_is_valid() {
        let document = Document::new();
        assert!(document.is_empty());
        assert!(document.validate().is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let block = Block::new(BlockType::Text.default_data());
        let err = Document::from_blocks(vec![block.clone(), block.clone()]).unwrap_err();
        assert_eq!(err, DocumentError::DuplicateBlockId(block.id));
    }

    #[test]
    fn insert_at_clamps_to_append() {
        let document = doc_of(&[BlockType::Hero, BlockType::Text]);
        let block = Block::new(BlockType::Quote.default_data());
        let id = block.id.clone();

        let next = document.insert_at(99, block);

        assert_eq!(next.len(), 3);
        assert_eq!(next.blocks()[2].id, id);
        // Prior blocks keep identity and relative order.
        assert_eq!(ids(&next)[..2], ids(&document)[..]);
    }

    #[test]
    fn insert_in_the_middle_preserves_order() {
        let document = doc_of(&[BlockType::Hero, BlockType::Text]);
        let block = Block::new(BlockType::Separator.default_data());
        let id = block.id.clone();

        let next = document.insert_at(1, block);

        assert_eq!(ids(&next)[0], ids(&document)[0]);
        assert_eq!(ids(&next)[1], id);
        assert_eq!(ids(&next)[2], ids(&document)[1]);
    }

    #[test]
    fn move_to_preserves_ids_and_payloads() {
        let document = doc_of(&[BlockType::Hero, BlockType::Text, BlockType::Quote]);
        let before = ids(&document);

        let next = document.move_to(2, 0);

        assert_eq!(ids(&next), vec![before[2].clone(), before[0].clone(), before[1].clone()]);
        for id in &before {
            assert_eq!(next.get(id).unwrap().data, document.get(id).unwrap().data);
        }
    }

    #[test]
    fn move_to_same_index_is_identity() {
        let document = doc_of(&[BlockType::Hero, BlockType::Text]);
        assert_eq!(document.move_to(1, 1), document);
    }

    #[test]
    fn move_to_out_of_range_is_a_noop() {
        let document = doc_of(&[BlockType::Hero, BlockType::Text]);
        assert_eq!(document.move_to(5, 0), document);
        assert_eq!(document.move_to(0, 5), document);
        assert_eq!(Document::new().move_to(0, 0), Document::new());
    }

    #[test]
    fn with_block_data_changes_only_the_target() {
        let document = doc_of(&[BlockType::Hero, BlockType::Text]);
        let target = document.blocks()[1].id.clone();
        let other = document.blocks()[0].clone();

        let next = document
            .with_block_data(
                &target,
                BlockData::Text(TextData {
                    content: "Hello".to_string(),
                }),
            )
            .unwrap();

        assert_eq!(
            next.get(&target).unwrap().data,
            BlockData::Text(TextData {
                content: "Hello".to_string()
            })
        );
        assert_eq!(next.blocks()[0], other);
        assert_eq!(next.get(&target).unwrap().id, target, "id must survive update");
    }

    #[test]
    fn with_block_data_unknown_id_is_none() {
        let document = doc_of(&[BlockType::Hero]);
        let stale = BlockId::new();
        assert!(document.with_block_data(&stale, BlockType::Text.default_data()).is_none());
    }

    #[test]
    fn decoration_updates_do_not_touch_data() {
        let document = doc_of(&[BlockType::Hero]);
        let id = document.blocks()[0].id.clone();
        let spacing = Spacing::default();

        let next = document.with_spacing(&id, Some(spacing)).unwrap();

        assert_eq!(next.get(&id).unwrap().spacing, Some(spacing));
        assert_eq!(next.get(&id).unwrap().data, document.get(&id).unwrap().data);

        let next = next.with_animation(&id, Some(Animation::Fade)).unwrap();
        assert_eq!(next.get(&id).unwrap().animation, Some(Animation::Fade));
        assert_eq!(next.get(&id).unwrap().data, document.get(&id).unwrap().data);
    }

    #[test]
    fn without_block_removes_exactly_one() {
        let document = doc_of(&[BlockType::Hero, BlockType::Text]);
        let id = document.blocks()[0].id.clone();

        let next = document.without_block(&id).unwrap();

        assert_eq!(next.len(), 1);
        assert!(!next.contains(&id));
        assert!(document.without_block(&BlockId::new()).is_none());
    }
}
