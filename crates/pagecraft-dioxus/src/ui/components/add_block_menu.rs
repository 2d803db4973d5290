use dioxus::prelude::*;
use pagecraft_engine::{BlockGroup, Cmd};

/// Grouped catalogue of block types, driven entirely by the registry
/// metadata so a new block type shows up here without UI changes.
#[component]
pub fn AddBlockMenu(on_command: Callback<Cmd>) -> Element {
    rsx! {
        div {
            class: "add-block-menu",
            details {
                summary { "+ Add block" }
                for group in BlockGroup::ALL {
                    div {
                        class: "block-group",
                        h4 { {group.label()} }
                        div {
                            class: "block-choices",
                            for block_type in group.members() {
                                button {
                                    key: "{block_type.as_str()}",
                                    class: "block-choice",
                                    title: block_type.description(),
                                    onclick: move |_| {
                                        on_command.call(Cmd::AddBlock { block_type });
                                    },
                                    "{block_type.icon()} {block_type.label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
