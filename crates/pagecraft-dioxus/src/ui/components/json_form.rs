use dioxus::prelude::*;
use pagecraft_engine::BlockData;
use serde_json::Value;

/// Raw-payload editor for block types without a dedicated form.
///
/// Edits are local until "Apply": the payload must parse as JSON and must
/// match the block type's shape, otherwise the document is left untouched
/// and the error is shown inline.
#[component]
pub fn JsonForm(tag: String, value: Value, on_change: Callback<BlockData>) -> Element {
    let initial = serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    let mut text = use_signal(|| initial);
    let mut error = use_signal(|| None::<String>);

    rsx! {
        div {
            class: "json-form",
            label { "Payload ({tag})" }
            textarea {
                value: text.read().clone(),
                spellcheck: false,
                oninput: move |event: Event<FormData>| {
                    text.set(event.value());
                },
            }
            if let Some(message) = error.read().as_ref() {
                p { class: "error", "{message}" }
            }
            button {
                onclick: {
                    let tag = tag.clone();
                    move |_| {
                        let parsed: Value = match serde_json::from_str(&text.read()) {
                            Ok(value) => value,
                            Err(e) => {
                                error.set(Some(format!("Invalid JSON: {e}")));
                                return;
                            }
                        };
                        match rebuild_payload(&tag, parsed) {
                            Ok(data) => {
                                error.set(None);
                                on_change.call(data);
                            }
                            Err(message) => {
                                error.set(Some(message));
                            }
                        }
                    }
                },
                "Apply"
            }
        }
    }
}

/// Reassemble a full tagged payload from the edited JSON. A payload that no
/// longer matches the type's shape is rejected here instead of being
/// demoted to an unknown block.
fn rebuild_payload(tag: &str, payload: Value) -> Result<BlockData, String> {
    let record = serde_json::json!({ "type": tag, "data": payload });
    let data: BlockData =
        serde_json::from_value(record).map_err(|e| format!("Invalid payload: {e}"))?;
    if data.block_type().is_none() && tag.parse::<pagecraft_engine::BlockType>().is_ok() {
        return Err(format!("Payload does not match the \"{tag}\" shape"));
    }
    Ok(data)
}
