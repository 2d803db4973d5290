use crate::ui::components::{AddBlockMenu, BlockFrame};
use dioxus::prelude::*;
use pagecraft_engine::{Cmd, Snapshot};

/// The editing surface for one page: title, block list, add-block menu.
/// `on_save` is only supplied when autosave is off; it renders an explicit
/// Save button next to the title.
#[component]
pub fn PageEditor(
    title: String,
    snapshot: Snapshot,
    on_title_change: Callback<String>,
    on_command: Callback<Cmd>,
    on_save: Option<Callback<()>>,
) -> Element {
    // Index of the block being dragged, shared across every frame so a drop
    // anywhere in the list can be resolved into a Reorder command.
    let drag_from = use_signal(|| None::<usize>);

    rsx! {
        div {
            class: "page-editor",
            div {
                class: "page-header",
                input {
                    class: "page-title-input",
                    r#type: "text",
                    value: title,
                    placeholder: "Page title",
                    onchange: move |event: Event<FormData>| {
                        on_title_change.call(event.value());
                    },
                }
                if let Some(on_save) = on_save {
                    button {
                        class: "save-button",
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                }
            }
            div {
                class: "block-list",
                for block in snapshot.blocks.iter().cloned() {
                    BlockFrame {
                        key: "{block.id}",
                        block,
                        drag_from,
                        on_command,
                    }
                }
            }
            AddBlockMenu { on_command }
        }
    }
}
