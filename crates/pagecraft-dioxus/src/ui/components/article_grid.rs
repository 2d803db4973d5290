use dioxus::prelude::*;
use pagecraft_engine::models::ArticleGridData;

/// Preview stand-in for the published article grid; the editor has no
/// article store, so this renders the query, not results.
#[component]
pub fn ArticleGrid(data: ArticleGridData) -> Element {
    let category = if data.category.is_empty() {
        "all categories".to_string()
    } else {
        format!("category \"{}\"", data.category)
    };

    rsx! {
        div {
            class: "article-grid-block placeholder",
            "Latest {data.limit} articles from {category}"
            if data.show_excerpt {
                ", with excerpts"
            }
        }
    }
}
