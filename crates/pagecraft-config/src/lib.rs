//! Editor configuration for pagecraft.
//!
//! Settings live in a TOML file at `~/.config/pagecraft/config.toml`. Every
//! key is optional: a file holding only `pages_path` stays valid as options
//! are added, and no file at all falls back to [`Config::default`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory holding the `.json` page files. May be written with
    /// `~` or `$VARS`; expanded on load.
    pub pages_path: PathBuf,
    /// Save after every applied command. When off, the editor saves only on
    /// an explicit save action.
    pub autosave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_path: default_pages_root(),
            autosave: true,
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/pagecraft");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Load from the default location; `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.pages_path = expand_path(&config.pages_path);
        Ok(Some(config))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// Write as TOML, creating parent directories as needed.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Fallback pages root when no config file exists: `~/Documents/pagecraft`.
pub fn default_pages_root() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~/Documents/pagecraft").as_ref())
}

/// Expand `~` and `$VARS` in a configured path. A reference to an unset
/// variable keeps the path as written instead of failing the whole load;
/// the caller's directory validation reports it.
fn expand_path(path: &Path) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
