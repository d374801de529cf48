//! # Cheatpaths
//!
//! A [`PathSet`] is the ordered list of layers sheets are looked up in. It is
//! built once per invocation from the configured cheatpaths (most global
//! first) plus a synthetic `local` layer for `./.cheat`, which always comes
//! last and therefore has the highest priority.
//!
//! Two traversal orders are exposed and they are not interchangeable:
//!
//! - [`PathSet::layers_by_priority_reversed`] (most local first) is used to
//!   *read*: the first layer holding a sheet shadows all others.
//! - [`PathSet::layers_by_priority`] (configured order) is used to pick the
//!   layer an edit *writes* to: the first writable layer in configured order,
//!   which is not necessarily the most local one.
//!
//! Edits can therefore land in a layer the user did not expect; see
//! [`crate::router`].
//!
//! Directory existence is not checked here. A layer whose root is missing
//! simply contributes no sheets.

use crate::config::CheatConfig;
use crate::error::{CheatError, Result};
use crate::model::{Layer, LOCAL_LAYER_NAME};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub const LOCAL_CHEAT_DIR: &str = ".cheat";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    layers: Vec<Layer>,
}

impl PathSet {
    /// Builds the layer list from config, appending `<cwd>/.cheat` as the
    /// `local` layer when that directory exists.
    pub fn build(config: &CheatConfig, cwd: &Path) -> Result<Self> {
        let mut layers = Vec::with_capacity(config.cheatpaths.len() + 1);

        for (i, entry) in config.cheatpaths.iter().enumerate() {
            let raw_path = entry.path.as_deref().ok_or_else(|| {
                let label = entry
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", i + 1));
                CheatError::Config(format!(
                    "cheatpath {} is missing the required field `path`",
                    label
                ))
            })?;

            let root = expand_home(raw_path);
            let name = entry
                .name
                .clone()
                .unwrap_or_else(|| default_layer_name(&root));

            layers.push(
                Layer::new(name, root, entry.readonly).with_tags(entry.tags.iter().cloned()),
            );
        }

        let local = cwd.join(LOCAL_CHEAT_DIR);
        if local.is_dir() {
            tracing::debug!(path = %local.display(), "adding local cheatpath");
            layers.push(Layer::new(LOCAL_LAYER_NAME, local, false).with_tags([LOCAL_LAYER_NAME]));
        }

        Ok(Self { layers })
    }

    /// Wraps an already ordered list of layers (most global first).
    pub fn from_layers(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Configured order: most global first, `local` last.
    pub fn layers_by_priority(&self) -> impl DoubleEndedIterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Lookup order: most local first.
    pub fn layers_by_priority_reversed(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().rev()
    }

    /// The layer edits are written to: first writable one in configured order.
    pub fn first_writable(&self) -> Option<&Layer> {
        self.layers_by_priority().find(|layer| layer.is_writable())
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    expand_home_with(raw, home.as_deref())
}

fn expand_home_with(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };

    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

fn default_layer_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheatpathEntry;
    use std::fs;
    use tempfile::TempDir;

    fn entry(name: &str, path: &Path, readonly: bool) -> CheatpathEntry {
        CheatpathEntry {
            name: Some(name.to_string()),
            path: Some(path.to_string_lossy().into_owned()),
            readonly,
            tags: vec![name.to_string()],
        }
    }

    #[test]
    fn test_build_keeps_configured_order() {
        let temp = TempDir::new().unwrap();
        let config = CheatConfig {
            cheatpaths: vec![
                entry("community", &temp.path().join("community"), true),
                entry("work", &temp.path().join("work"), false),
                entry("personal", &temp.path().join("personal"), false),
            ],
            ..Default::default()
        };

        let set = PathSet::build(&config, temp.path()).unwrap();
        let names: Vec<_> = set.layers_by_priority().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["community", "work", "personal"]);

        let reversed: Vec<_> = set
            .layers_by_priority_reversed()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(reversed, vec!["personal", "work", "community"]);
    }

    #[test]
    fn test_missing_directories_are_kept() {
        let temp = TempDir::new().unwrap();
        let config = CheatConfig {
            cheatpaths: vec![entry("ghost", &temp.path().join("nope"), false)],
            ..Default::default()
        };

        let set = PathSet::build(&config, temp.path()).unwrap();
        assert_eq!(set.layers_by_priority().count(), 1);
    }

    #[test]
    fn test_local_layer_appended_last_when_present() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(LOCAL_CHEAT_DIR)).unwrap();
        let config = CheatConfig {
            cheatpaths: vec![entry("global", &temp.path().join("g"), true)],
            ..Default::default()
        };

        let set = PathSet::build(&config, temp.path()).unwrap();
        let local = set.layers_by_priority().last().unwrap();
        assert_eq!(local.name, LOCAL_LAYER_NAME);
        assert_eq!(local.root, temp.path().join(LOCAL_CHEAT_DIR));
        assert!(local.is_writable());
        assert!(local.tags.contains(LOCAL_LAYER_NAME));
        assert_eq!(
            set.layers_by_priority_reversed().next().unwrap().name,
            LOCAL_LAYER_NAME
        );
    }

    #[test]
    fn test_no_local_layer_without_dot_cheat() {
        let temp = TempDir::new().unwrap();
        let set = PathSet::build(&CheatConfig::default(), temp.path()).unwrap();
        assert_eq!(set.layers_by_priority().count(), 0);
    }

    #[test]
    fn test_missing_path_is_config_error() {
        let temp = TempDir::new().unwrap();
        let config = CheatConfig {
            cheatpaths: vec![CheatpathEntry {
                name: Some("broken".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let err = PathSet::build(&config, temp.path()).unwrap_err();
        match err {
            CheatError::Config(msg) => assert!(msg.contains("broken")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_name_defaults_to_directory_name() {
        let temp = TempDir::new().unwrap();
        let config = CheatConfig {
            cheatpaths: vec![CheatpathEntry {
                path: Some(temp.path().join("sheets").to_string_lossy().into_owned()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let set = PathSet::build(&config, temp.path()).unwrap();
        assert_eq!(set.layers_by_priority().next().unwrap().name, "sheets");
    }

    #[test]
    fn test_first_writable_uses_configured_order() {
        let set = PathSet::from_layers(vec![
            Layer::new("global", "/g", true),
            Layer::new("work", "/w", false),
            Layer::new("personal", "/p", false),
        ]);
        assert_eq!(set.first_writable().unwrap().name, "work");

        let readonly_only = PathSet::from_layers(vec![Layer::new("global", "/g", true)]);
        assert!(readonly_only.first_writable().is_none());
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/someone");
        assert_eq!(
            expand_home_with("~/cheat", Some(home)),
            PathBuf::from("/home/someone/cheat")
        );
        assert_eq!(expand_home_with("~", Some(home)), home.to_path_buf());
        assert_eq!(
            expand_home_with("/opt/cheat", Some(home)),
            PathBuf::from("/opt/cheat")
        );
        assert_eq!(
            expand_home_with("~other/cheat", Some(home)),
            PathBuf::from("~other/cheat")
        );
        assert_eq!(expand_home_with("~/x", None), PathBuf::from("~/x"));
    }
}
