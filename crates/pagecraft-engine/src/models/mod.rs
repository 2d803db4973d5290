pub mod block;
pub mod document;
pub mod page;
pub mod payloads;

pub use block::{Block, BlockId, BlockType, ParseBlockTypeError};
pub use document::{Document, DocumentError};
pub use page::{Page, PageFile};
pub use payloads::*;
