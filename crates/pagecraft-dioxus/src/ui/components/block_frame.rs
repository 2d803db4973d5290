use crate::ui::components::{BlockPreview, EditorPanel};
use dioxus::prelude::*;
use pagecraft_engine::editing::{BlockMode, Cmd, RenderBlock};

/// Chrome around one block: toolbar, drag-reorder handling and the
/// edit/preview switch. The frame stays keyed on the block id so drag state
/// and focus survive reorders.
#[component]
pub fn BlockFrame(
    block: RenderBlock,
    drag_from: Signal<Option<usize>>,
    on_command: Callback<Cmd>,
) -> Element {
    let mut drop_target = use_signal(|| false);
    let editing = block.mode == BlockMode::Edit;

    let frame_class = match (editing, *drop_target.read()) {
        (true, _) => "block-frame editing",
        (false, true) => "block-frame drop-target",
        (false, false) => "block-frame",
    };

    rsx! {
        div {
            class: "{frame_class}",
            draggable: "true",
            ondragstart: {
                let mut drag_from = drag_from;
                let index = block.index;
                move |_| {
                    drag_from.set(Some(index));
                }
            },
            ondragover: move |event: Event<DragData>| {
                // Required for the element to accept drops.
                event.prevent_default();
                drop_target.set(true);
            },
            ondragleave: move |_| {
                drop_target.set(false);
            },
            ondrop: {
                let mut drag_from = drag_from;
                let to = block.index;
                move |event: Event<DragData>| {
                    event.prevent_default();
                    drop_target.set(false);
                    if let Some(from) = drag_from.write().take() {
                        on_command.call(Cmd::Reorder { from, to });
                    }
                }
            },
            div {
                class: "block-toolbar",
                span { class: "drag-handle", title: "Drag to reorder", "⠿" }
                button {
                    onclick: {
                        let id = block.id.clone();
                        move |_| on_command.call(Cmd::ToggleEdit { id: id.clone() })
                    },
                    if editing { "Done" } else { "Edit" }
                }
                button {
                    class: "remove",
                    onclick: {
                        let id = block.id.clone();
                        move |_| on_command.call(Cmd::RemoveBlock { id: id.clone() })
                    },
                    "Remove"
                }
            }
            div {
                class: if block.css_classes.is_empty() {
                    "block-body".to_string()
                } else {
                    format!("block-body {}", block.css_classes)
                },
                if editing {
                    EditorPanel { block: block.clone(), on_command }
                } else {
                    BlockPreview { data: block.data.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pagecraft_engine::{BlockType, Cmd, Document, EditorState};

    fn render_frame(state: &EditorState) -> String {
        let block = state.snapshot().blocks[0].clone();

        #[component]
        fn Harness(block: RenderBlock) -> Element {
            let drag_from = use_signal(|| None::<usize>);
            rsx! {
                BlockFrame {
                    block,
                    drag_from,
                    on_command: Callback::new(|_| {}),
                }
            }
        }

        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { block });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn preview_mode_shows_toolbar_and_preview() {
        let mut state = EditorState::new(Document::new());
        state.apply(Cmd::AddBlock {
            block_type: BlockType::Text,
        });
        state.apply(Cmd::ClearEdit);

        let html = render_frame(&state);
        assert!(html.contains("Edit"));
        assert!(html.contains("Remove"));
        assert!(!html.contains("editor-panel"));
    }

    #[test]
    fn edit_mode_swaps_in_the_editor_panel() {
        let mut state = EditorState::new(Document::new());
        // AddBlock leaves the new block selected.
        state.apply(Cmd::AddBlock {
            block_type: BlockType::Text,
        });

        let html = render_frame(&state);
        assert!(html.contains("editor-panel"));
        assert!(html.contains("Done"));
    }

    #[test]
    fn decoration_classes_land_on_the_block_body() {
        let mut state = EditorState::new(Document::new());
        let patch = state.apply(Cmd::AddBlock {
            block_type: BlockType::Text,
        });
        state.apply(Cmd::UpdateAnimation {
            id: patch.changed[0].clone(),
            animation: Some(pagecraft_engine::Animation::Fade),
        });
        state.apply(Cmd::ClearEdit);

        let html = render_frame(&state);
        assert!(html.contains("block-body anim-fade"));
    }
}
