pub mod decoration;
pub mod editing;
pub mod io;
pub mod models;
pub mod registry;

// Re-export key types for easier usage
pub use decoration::{Animation, Spacing, SpacingSize};
pub use editing::{BlockMode, Cmd, EditorState, Patch, RenderBlock, Snapshot};
pub use models::{
    Block, BlockData, BlockId, BlockType, Document, DocumentError, Page, PageFile,
    ParseBlockTypeError,
};
pub use registry::BlockGroup;
