use dioxus::prelude::*;
use pagecraft_engine::editing::Cmd;
use pagecraft_engine::{Animation, BlockId, Spacing, SpacingSize};

/// Spacing and animation controls, shared by every editor panel. An unset
/// decoration means "inherit the stylesheet default"; the reset button
/// returns the block to that state.
#[component]
pub fn DecorationForm(
    id: BlockId,
    spacing: Option<Spacing>,
    animation: Option<Animation>,
    on_command: Callback<Cmd>,
) -> Element {
    let current = spacing.unwrap_or_default();

    let set_edge = {
        let id = id.clone();
        move |edge: SpacingEdge, value: String| {
            let Some(size) = parse_size(&value) else {
                return;
            };
            let mut next = current;
            match edge {
                SpacingEdge::MarginTop => next.margin_top = size,
                SpacingEdge::MarginBottom => next.margin_bottom = size,
                SpacingEdge::PaddingTop => next.padding_top = size,
                SpacingEdge::PaddingBottom => next.padding_bottom = size,
            }
            on_command.call(Cmd::UpdateSpacing {
                id: id.clone(),
                spacing: Some(next),
            });
        }
    };

    rsx! {
        div {
            class: "decoration-form",
            for (edge, label, value) in [
                (SpacingEdge::MarginTop, "Margin top", current.margin_top),
                (SpacingEdge::MarginBottom, "Margin bottom", current.margin_bottom),
                (SpacingEdge::PaddingTop, "Padding top", current.padding_top),
                (SpacingEdge::PaddingBottom, "Padding bottom", current.padding_bottom),
            ] {
                label {
                    key: "{label}",
                    "{label}"
                    select {
                        value: value.as_str(),
                        onchange: {
                            let set_edge = set_edge.clone();
                            move |event: Event<FormData>| set_edge(edge, event.value())
                        },
                        for size in SpacingSize::ALL {
                            option {
                                value: size.as_str(),
                                selected: size == value,
                                "{size.as_str()}"
                            }
                        }
                    }
                }
            }
            label {
                "Animation"
                select {
                    value: animation.unwrap_or_default().as_str(),
                    onchange: {
                        let id = id.clone();
                        move |event: Event<FormData>| {
                            let Some(next) = parse_animation(&event.value()) else {
                                return;
                            };
                            on_command.call(Cmd::UpdateAnimation {
                                id: id.clone(),
                                animation: Some(next),
                            });
                        }
                    },
                    for choice in Animation::ALL {
                        option {
                            value: choice.as_str(),
                            selected: Some(choice) == animation
                                || (choice == Animation::None && animation.is_none()),
                            "{choice.label()}"
                        }
                    }
                }
            }
            button {
                onclick: {
                    let id = id.clone();
                    move |_| {
                        on_command.call(Cmd::UpdateSpacing {
                            id: id.clone(),
                            spacing: None,
                        });
                        on_command.call(Cmd::UpdateAnimation {
                            id: id.clone(),
                            animation: None,
                        });
                    }
                },
                "Reset decorations"
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum SpacingEdge {
    MarginTop,
    MarginBottom,
    PaddingTop,
    PaddingBottom,
}

fn parse_size(value: &str) -> Option<SpacingSize> {
    SpacingSize::ALL.into_iter().find(|s| s.as_str() == value)
}

fn parse_animation(value: &str) -> Option<Animation> {
    Animation::ALL.into_iter().find(|a| a.as_str() == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn parse_round_trips_every_size_and_animation() {
        for size in SpacingSize::ALL {
            assert_eq!(parse_size(size.as_str()), Some(size));
        }
        for animation in Animation::ALL {
            assert_eq!(parse_animation(animation.as_str()), Some(animation));
        }
        assert_eq!(parse_size("huge"), None);
        assert_eq!(parse_animation("spin"), None);
    }

    #[test]
    fn form_offers_all_four_edges_and_animation() {
        #[component]
        fn Harness() -> Element {
            rsx! {
                DecorationForm {
                    id: BlockId::new(),
                    spacing: None,
                    animation: None,
                    on_command: Callback::new(|_| {}),
                }
            }
        }

        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Margin top"));
        assert!(html.contains("Margin bottom"));
        assert!(html.contains("Padding top"));
        assert!(html.contains("Padding bottom"));
        assert!(html.contains("Fade in"));
        assert!(html.contains("Reset decorations"));
    }
}
