use dioxus::prelude::*;
use pagecraft_engine::models::{FieldKind, FormData};

/// Static preview of a form block; inputs are disabled because submission
/// belongs to the published site, not the editor.
#[component]
pub fn FormBlock(data: FormData) -> Element {
    rsx! {
        div {
            class: "form-block",
            if !data.title.is_empty() {
                h3 { "{data.title}" }
            }
            for field in data.fields.iter() {
                label {
                    key: "{field.name}",
                    "{field.label}"
                    if field.required {
                        span { class: "required", " *" }
                    }
                    match field.kind {
                        FieldKind::Textarea => rsx! {
                            textarea { disabled: true, rows: 3 }
                        },
                        FieldKind::Checkbox => rsx! {
                            input { r#type: "checkbox", disabled: true }
                        },
                        FieldKind::Email => rsx! {
                            input { r#type: "email", disabled: true }
                        },
                        FieldKind::Phone => rsx! {
                            input { r#type: "tel", disabled: true }
                        },
                        FieldKind::Text => rsx! {
                            input { r#type: "text", disabled: true }
                        },
                    }
                }
            }
            button { disabled: true, "{data.submit_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pagecraft_engine::BlockType;
    use pagecraft_engine::models::BlockData;

    #[test]
    fn default_form_shows_an_email_field_and_submit_button() {
        let BlockData::Form(data) = BlockType::Form.default_data() else {
            panic!("form default is not a form payload");
        };
        let mut dom = VirtualDom::new_with_props(FormBlock, FormBlockProps { data });
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Send"));
    }
}
