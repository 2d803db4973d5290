use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};

use crate::models::document::Document;

/// One stored page: a title plus the ordered block list.
///
/// This is the persisted JSON shape; the block list serializes as the
/// ordered array of `{id, type, data, spacing?, animation?}` records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "blocks", default)]
    pub document: Document,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            document: Document::new(),
        }
    }
}

/// A page file with a relative path and display-friendly name.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl PageFile {
    /// Create a new PageFile from a relative path.
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Create from a relative path string.
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path.
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name (without .json extension).
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".json").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for PageFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PageFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
