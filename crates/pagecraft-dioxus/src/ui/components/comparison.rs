use dioxus::prelude::*;
use pagecraft_engine::models::ComparisonData;

#[component]
pub fn Comparison(data: ComparisonData) -> Element {
    rsx! {
        table {
            class: "comparison-block",
            thead {
                tr {
                    th {}
                    for (i, column) in data.columns.iter().enumerate() {
                        th { key: "{i}", "{column}" }
                    }
                }
            }
            tbody {
                for (i, row) in data.rows.iter().enumerate() {
                    tr {
                        key: "{i}",
                        th { "{row.label}" }
                        // Rows may be ragged while being edited; pad with
                        // empty cells rather than misaligning columns.
                        for j in 0..data.columns.len() {
                            td {
                                key: "{j}",
                                {row.values.get(j).map(String::as_str).unwrap_or("")}
                            }
                        }
                    }
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
    use pagecraft_engine::models::ComparisonRow;

    #[test]
    fn ragged_rows_are_padded_to_the_column_count() {
        let data = ComparisonData {
            columns: vec!["Basic".to_string(), "Pro".to_string()],
            rows: vec![ComparisonRow {
                label: "Storage".to_string(),
                values: vec!["5 GB".to_string()],
            }],
        };
        let mut dom = VirtualDom::new_with_props(Comparison, ComparisonProps { data });
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("5 GB"));
        assert_eq!(html.matches("<td").count(), 2);
    }
}
