use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{DocumentError, Page, PageFile};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Page not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid pages directory: {0}")]
    InvalidPagesDir(String),
    #[error("Malformed page file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid page document: {0}")]
    Document(#[from] DocumentError),
}

/// Read a page file and return the parsed page.
///
/// The unique-id invariant is checked on load; a page that violates it is
/// rejected rather than silently repaired.
pub fn read_page(relative_path: &RelativePath, pages_root: &Path) -> Result<Page, IoError> {
    let absolute_path = relative_path.to_path(pages_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path).map_err(IoError::Io)?;
    let page: Page = serde_json::from_str(&content).map_err(|source| IoError::Malformed {
        path: absolute_path,
        source,
    })?;
    page.document.validate()?;
    Ok(page)
}

/// Write a page to its file, creating parent directories as needed.
pub fn write_page(
    relative_path: &RelativePath,
    pages_root: &Path,
    page: &Page,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(pages_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    let content = serde_json::to_string_pretty(page).map_err(|source| IoError::Malformed {
        path: absolute_path.clone(),
        source,
    })?;
    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for page files in the pages directory.
///
/// Rejects a root that is missing or not a directory, so callers can use a
/// scan as their startup validation.
pub fn scan_pages(pages_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !pages_root.is_dir() {
        return Err(IoError::InvalidPagesDir(format!(
            "not a directory: {}",
            pages_root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(pages_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// List pages as display-friendly entries, sorted by path.
pub fn list_pages(pages_root: &Path) -> Result<Vec<PageFile>, IoError> {
    let files = scan_pages(pages_root)?;
    let mut pages = Vec::new();
    for file in files {
        let relative = file
            .strip_prefix(pages_root)
            .map_err(|_| IoError::InvalidPagesDir("page outside pages root".to_string()))?;
        if let Ok(relative_path) = RelativePathBuf::from_path(relative) {
            pages.push(PageFile::new(relative_path));
        }
    }
    Ok(pages)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}
