use crate::error::{CheatError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "conf.yml";

/// Configuration for cheat, read from `conf.yml`.
///
/// Cheatpaths are listed from most global to most local. Only the
/// per-entry `path` is required, and that is enforced when the
/// [`PathSet`](crate::pathset::PathSet) is built rather than here.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CheatConfig {
    #[serde(default)]
    pub cheatpaths: Vec<CheatpathEntry>,

    /// Editor command override (e.g. "vim", "code --wait")
    #[serde(default)]
    pub editor: Option<String>,

    /// Pager command override (e.g. "less -R")
    #[serde(default)]
    pub viewer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CheatpathEntry {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub readonly: bool,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl CheatConfig {
    /// Load config from the given file. A missing file is an error: without
    /// it there are no cheatpaths to work with.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.is_file() {
            return Err(CheatError::Config(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }

        let content = fs::read_to_string(config_path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: CheatConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Editor override, treating an empty string as unset
    pub fn editor(&self) -> Option<&str> {
        non_empty(self.editor.as_deref())
    }

    /// Viewer override, treating an empty string as unset
    pub fn viewer(&self) -> Option<&str> {
        non_empty(self.viewer.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
