//! Integration tests for the boundary between the editor state machine and
//! page persistence, exercised the way the app's command callback drives it:
//! open a page, apply commands, autosave, reopen.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use tempfile::TempDir;

use pagecraft_engine::editing::{Cmd, EditorState};
use pagecraft_engine::models::{BlockType, Page, PageFile};
use pagecraft_engine::io;

fn create_pages_dir() -> (TempDir, PageFile) {
    let temp_dir = tempfile::tempdir().unwrap();
    let page_file = PageFile::from_relative_str("home.json");
    let page = Page::new("Home");
    io::write_page(page_file.relative_path(), temp_dir.path(), &page).unwrap();
    (temp_dir, page_file)
}

/// Mirrors the app's command callback: apply, then save the whole page.
fn apply_and_save(
    state: &mut EditorState,
    cmd: Cmd,
    title: &str,
    page_file: &PageFile,
    root: &std::path::Path,
) {
    state.apply(cmd);
    let page = Page {
        title: title.to_string(),
        document: state.document().clone(),
    };
    io::write_page(page_file.relative_path(), root, &page).unwrap();
}

#[test]
fn edits_survive_a_save_and_reload_cycle() {
    let (dir, page_file) = create_pages_dir();
    let page = io::read_page(page_file.relative_path(), dir.path()).unwrap();
    let mut state = EditorState::new(page.document);

    for block_type in [BlockType::Hero, BlockType::Text, BlockType::Cta] {
        apply_and_save(
            &mut state,
            Cmd::AddBlock { block_type },
            "Home",
            &page_file,
            dir.path(),
        );
    }
    apply_and_save(
        &mut state,
        Cmd::Reorder { from: 2, to: 0 },
        "Home",
        &page_file,
        dir.path(),
    );

    let reloaded = io::read_page(page_file.relative_path(), dir.path()).unwrap();
    assert_eq!(reloaded.title, "Home");
    assert_eq!(reloaded.document, *state.document());

    let tags: Vec<&str> = reloaded
        .document
        .blocks()
        .iter()
        .map(|b| b.tag())
        .collect();
    assert_eq!(tags, vec!["cta", "hero", "text"]);
}

#[test]
fn snapshot_ids_stay_unique_across_an_editing_session() {
    let (dir, page_file) = create_pages_dir();
    let page = io::read_page(page_file.relative_path(), dir.path()).unwrap();
    let mut state = EditorState::new(page.document);

    for block_type in BlockType::ALL {
        state.apply(Cmd::AddBlock { block_type });
    }
    state.apply(Cmd::Reorder { from: 0, to: 26 });
    state.apply(Cmd::Reorder { from: 10, to: 3 });

    let snapshot = state.snapshot();
    let mut seen = HashSet::new();
    for block in &snapshot.blocks {
        assert!(
            seen.insert(block.id.clone()),
            "duplicate block id in snapshot: {}",
            block.id
        );
    }
    assert_eq!(snapshot.blocks.len(), BlockType::ALL.len());
}

#[test]
fn selection_is_not_persisted() {
    let (dir, page_file) = create_pages_dir();
    let page = io::read_page(page_file.relative_path(), dir.path()).unwrap();
    let mut state = EditorState::new(page.document);

    // Leave a block selected, then save.
    apply_and_save(
        &mut state,
        Cmd::AddBlock {
            block_type: BlockType::Text,
        },
        "Home",
        &page_file,
        dir.path(),
    );
    assert!(state.active_block().is_some());

    let reloaded = io::read_page(page_file.relative_path(), dir.path()).unwrap();
    let reopened = EditorState::new(reloaded.document);
    assert!(reopened.active_block().is_none());

    let snapshot = reopened.snapshot();
    assert!(
        snapshot
            .blocks
            .iter()
            .all(|b| b.mode == pagecraft_engine::editing::BlockMode::Preview)
    );
}

#[test]
fn stale_commands_do_not_corrupt_the_saved_page() {
    let (dir, page_file) = create_pages_dir();
    let page = io::read_page(page_file.relative_path(), dir.path()).unwrap();
    let mut state = EditorState::new(page.document);

    apply_and_save(
        &mut state,
        Cmd::AddBlock {
            block_type: BlockType::Quote,
        },
        "Home",
        &page_file,
        dir.path(),
    );
    let before = state.document().clone();

    // A remove for a block deleted in another window, and a drop landing on
    // an index that no longer exists.
    let stale = pagecraft_engine::models::BlockId::new();
    let patch = state.apply(Cmd::RemoveBlock { id: stale });
    assert!(patch.changed.is_empty());
    let patch = state.apply(Cmd::Reorder { from: 0, to: 99 });
    assert!(patch.changed.is_empty());

    assert_eq!(*state.document(), before);
    let reloaded = io::read_page(page_file.relative_path(), dir.path()).unwrap();
    assert_eq!(reloaded.document, before);
}
