use crate::decoration::{Animation, Spacing};
use crate::models::block::{BlockId, BlockType};
use crate::models::payloads::BlockData;

/// The edit algebra: every change to a page flows through one of these.
///
/// Commands are applied by [`crate::editing::EditorState::apply`], which
/// computes a whole next [`crate::models::Document`] value per command.
/// Structural commands are total over well-formed input: a stale id or an
/// out-of-range index is a safe no-op reported through the returned
/// [`crate::editing::Patch`], never a panic or a partial mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Default-construct a block of `block_type` via the registry, append it
    /// at the end and make it the active selection.
    AddBlock { block_type: BlockType },
    /// Replace the payload of the block matching `id` wholesale. Type-specific
    /// editors always send a complete replacement payload, never a delta.
    UpdateData { id: BlockId, data: BlockData },
    /// Replace the spacing decoration only; `data` is untouched.
    UpdateSpacing {
        id: BlockId,
        spacing: Option<Spacing>,
    },
    /// Replace the animation decoration only; `data` is untouched.
    UpdateAnimation {
        id: BlockId,
        animation: Option<Animation>,
    },
    /// Delete the matching block; clears the selection if it pointed there.
    RemoveBlock { id: BlockId },
    /// Move the block at `from` to position `to` (drop-event semantics).
    Reorder { from: usize, to: usize },
    /// Toggle edit mode on a block: selects it, re-toggling clears, a
    /// different id moves the selection. At most one block is active.
    ToggleEdit { id: BlockId },
    /// Clear the active selection.
    ClearEdit,
}
