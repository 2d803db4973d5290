use crate::models::block::BlockId;

/// Result of applying a command.
///
/// `changed` lists the ids of blocks whose rendering may differ from the
/// previous snapshot; an empty list means the command was a no-op (stale id,
/// out-of-range index) and the document is unchanged. The UI uses this to
/// skip re-rendering unaffected blocks and to surface stale-id commands as
/// logic errors rather than user-facing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub changed: Vec<BlockId>,
    pub version: u64,
    pub active_block: Option<BlockId>,
}
