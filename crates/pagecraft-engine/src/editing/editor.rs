use crate::editing::commands::Cmd;
use crate::editing::patch::Patch;
use crate::editing::snapshot::{self, Snapshot};
use crate::models::block::{Block, BlockId};
use crate::models::document::Document;

/// The block-list editor controller.
///
/// Owns the document being edited plus two pieces of controller-local state
/// that are never persisted: the active selection (`active_block`, the block
/// currently open for editing) and a version counter for change detection.
///
/// All edits flow through [`EditorState::apply`]. Each structural command
/// computes a whole next [`Document`] value through the document's pure
/// operations and commits it atomically; a command that matches nothing
/// (stale id, out-of-range index) leaves the document untouched and returns
/// a patch with an empty `changed` list. No command can leave the document
/// partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    document: Document,
    active_block: Option<BlockId>,
    version: u64,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            active_block: None,
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The document, for saving; consumes the editor.
    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn active_block(&self) -> Option<&BlockId> {
        self.active_block.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Immutable view for rendering; see [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        snapshot::create_snapshot(self)
    }

    /// Apply one command, returning a [`Patch`] describing what changed.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        match cmd {
            Cmd::AddBlock { block_type } => {
                let block = Block::new(block_type.default_data());
                let id = block.id.clone();
                self.document = self.document.push(block);
                self.active_block = Some(id.clone());
                self.commit(vec![id])
            }
            Cmd::UpdateData { id, data } => match self.document.with_block_data(&id, data) {
                Some(next) => {
                    self.document = next;
                    self.commit(vec![id])
                }
                None => self.noop(),
            },
            Cmd::UpdateSpacing { id, spacing } => match self.document.with_spacing(&id, spacing) {
                Some(next) => {
                    self.document = next;
                    self.commit(vec![id])
                }
                None => self.noop(),
            },
            Cmd::UpdateAnimation { id, animation } => {
                match self.document.with_animation(&id, animation) {
                    Some(next) => {
                        self.document = next;
                        self.commit(vec![id])
                    }
                    None => self.noop(),
                }
            }
            Cmd::RemoveBlock { id } => match self.document.without_block(&id) {
                Some(next) => {
                    self.document = next;
                    if self.active_block.as_ref() == Some(&id) {
                        self.active_block = None;
                    }
                    self.commit(vec![id])
                }
                None => self.noop(),
            },
            Cmd::Reorder { from, to } => {
                // Repeated identical drops must be idempotent, and gesture
                // indices may race concurrent edits; anything that would not
                // change the order is a no-op.
                if from == to || from >= self.document.len() || to >= self.document.len() {
                    return self.noop();
                }
                let id = self.document.blocks()[from].id.clone();
                self.document = self.document.move_to(from, to);
                self.commit(vec![id])
            }
            Cmd::ToggleEdit { id } => {
                if !self.document.contains(&id) {
                    return self.noop();
                }
                let previous = self.active_block.take();
                let mut changed = Vec::new();
                if let Some(previous) = previous.clone() {
                    changed.push(previous);
                }
                if previous.as_ref() != Some(&id) {
                    self.active_block = Some(id.clone());
                    changed.push(id);
                }
                self.commit(changed)
            }
            Cmd::ClearEdit => match self.active_block.take() {
                Some(previous) => self.commit(vec![previous]),
                None => self.noop(),
            },
        }
    }

    fn commit(&mut self, changed: Vec<BlockId>) -> Patch {
        self.version += 1;
        Patch {
            changed,
            version: self.version,
            active_block: self.active_block.clone(),
        }
    }

    fn noop(&self) -> Patch {
        Patch {
            changed: Vec::new(),
            version: self.version,
            active_block: self.active_block.clone(),
        }
    }
}
