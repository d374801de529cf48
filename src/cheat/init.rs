use crate::api::CheatApi;
use crate::config::{CheatConfig, CONFIG_FILENAME};
use crate::editor::{get_editor, get_viewer};
use crate::error::Result;
use crate::pathset::PathSet;
use directories::BaseDirs;
use std::env;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "CHEAT_CONFIG_PATH";

#[derive(Debug)]
pub struct CheatContext {
    pub api: CheatApi,
    pub config_path: PathBuf,
}

/// `~/.config/cheat/conf.yml`
pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("cheat")
            .join(CONFIG_FILENAME)
    })
}

/// Picks the config file: explicit flag, then $CHEAT_CONFIG_PATH, then the
/// default location, then `conf.yml` in `cwd` when the default is absent.
pub fn find_config_path(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }

    select_config_path(default_config_path(), cwd)
}

fn select_config_path(default: Option<PathBuf>, cwd: &Path) -> PathBuf {
    let local = cwd.join(CONFIG_FILENAME);
    match default {
        Some(path) if path.is_file() => path,
        Some(path) if !local.is_file() => path,
        Some(_) | None => local,
    }
}

pub fn initialize(cwd: &Path, explicit_config: Option<&Path>) -> Result<CheatContext> {
    let config_path = find_config_path(explicit_config, cwd);
    tracing::debug!(path = %config_path.display(), "loading config");

    let config = CheatConfig::load(&config_path)?;
    let paths = PathSet::build(&config, cwd)?;
    let editor = get_editor(config.editor());
    let viewer = get_viewer(config.viewer());

    let api = CheatApi::new(paths, editor, viewer);
    Ok(CheatContext { api, config_path })
}
