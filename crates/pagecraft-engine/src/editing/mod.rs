//! The block-list editing core.
//!
//! Architecture:
//!
//! - The document model ([`crate::models::Document`]) is a plain ordered
//!   value; all of its operations are pure functions returning the whole
//!   next document.
//! - Every edit is a command ([`Cmd`]) applied by [`EditorState::apply`],
//!   which commits the next document atomically and returns a [`Patch`]
//!   describing the affected block ids.
//! - The UI renders from immutable [`Snapshot`]s and never mutates the
//!   document directly; blocks keep stable ids across every edit so list
//!   rendering and drag state survive reorders.
//! - Selection (the block open for editing) lives in the controller, not in
//!   the document, and is never persisted.

pub mod commands;
pub mod editor;
pub mod patch;
pub mod snapshot;

pub use commands::Cmd;
pub use editor::EditorState;
pub use patch::Patch;
pub use snapshot::{BlockMode, RenderBlock, Snapshot};
