use crate::decoration::{self, Animation, Spacing};
use crate::editing::editor::EditorState;
use crate::models::block::BlockId;
use crate::models::payloads::BlockData;

/// Rendering mode of one block in the editor.
///
/// Exactly one block (the active selection) is in `Edit` mode at a time;
/// everything else renders as a read-only `Preview` approximation of the
/// published page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    Edit,
    Preview,
}

/// UI-ready view of one block: stable id, payload, decorations and the
/// precomputed decoration CSS classes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBlock {
    pub id: BlockId,
    pub index: usize,
    pub data: BlockData,
    pub spacing: Option<Spacing>,
    pub animation: Option<Animation>,
    pub mode: BlockMode,
    pub css_classes: String,
}

/// Immutable view of the editor for UI rendering.
///
/// The UI renders from snapshots and never reaches into the document
/// directly; `version` lets it detect when a re-render is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub version: u64,
    pub blocks: Vec<RenderBlock>,
}

pub(crate) fn create_snapshot(state: &EditorState) -> Snapshot {
    let active = state.active_block();
    let blocks = state
        .document()
        .blocks()
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let mode = if Some(&block.id) == active {
                BlockMode::Edit
            } else {
                BlockMode::Preview
            };
            RenderBlock {
                id: block.id.clone(),
                index,
                data: block.data.clone(),
                spacing: block.spacing,
                animation: block.animation,
                mode,
                css_classes: decoration::decoration_classes(
                    block.spacing.as_ref(),
                    block.animation.as_ref(),
                ),
            }
        })
        .collect();

    Snapshot {
        version: state.version(),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::commands::Cmd;
    use crate::models::block::BlockType;
    use crate::models::document::Document;

    #[test]
    fn snapshot_reflects_document_order() {
        let mut state = EditorState::new(Document::new());
        state.apply(Cmd::AddBlock {
            block_type: BlockType::Hero,
        });
        state.apply(Cmd::AddBlock {
            block_type: BlockType::Text,
        });
        state.apply(Cmd::ClearEdit);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.blocks.len(), 2);
        assert_eq!(snapshot.blocks[0].index, 0);
        assert_eq!(snapshot.blocks[1].index, 1);
        assert_eq!(snapshot.blocks[0].data.tag(), "hero");
        assert_eq!(snapshot.blocks[1].data.tag(), "text");
    }

    #[test]
    fn only_the_active_block_is_in_edit_mode() {
        let mut state = EditorState::new(Document::new());
        state.apply(Cmd::AddBlock {
            block_type: BlockType::Hero,
        });
        state.apply(Cmd::AddBlock {
            block_type: BlockType::Text,
        });

        // AddBlock selects the newest block.
        let snapshot = state.snapshot();
        assert_eq!(snapshot.blocks[0].mode, BlockMode::Preview);
        assert_eq!(snapshot.blocks[1].mode, BlockMode::Edit);

        state.apply(Cmd::ClearEdit);
        let snapshot = state.snapshot();
        assert!(snapshot.blocks.iter().all(|b| b.mode == BlockMode::Preview));
    }

    #[test]
    fn decoration_classes_are_precomputed() {
        let mut state = EditorState::new(Document::new());
        let patch = state.apply(Cmd::AddBlock {
            block_type: BlockType::Quote,
        });
        let id = patch.changed[0].clone();
        state.apply(Cmd::UpdateAnimation {
            id,
            animation: Some(crate::decoration::Animation::Fade),
        });

        let snapshot = state.snapshot();
        assert_eq!(snapshot.blocks[0].css_classes, "anim-fade");
    }
}
