//! # API Facade
//!
//! `CheatApi` is the single entry point for cheat operations. It owns the
//! immutable [`PathSet`] built for this invocation plus the editor and viewer
//! commands, and dispatches to `commands/*.rs`.
//!
//! Like the commands it wraps, it never prints and never exits; it returns
//! `Result<CmdResult>` and leaves presentation to the caller.

use crate::commands;
use crate::error::Result;
use crate::pathset::PathSet;
use std::path::Path;

#[derive(Debug)]
pub struct CheatApi {
    paths: PathSet,
    editor: String,
    viewer: String,
}

impl CheatApi {
    pub fn new(paths: PathSet, editor: impl Into<String>, viewer: impl Into<String>) -> Self {
        Self {
            paths,
            editor: editor.into(),
            viewer: viewer.into(),
        }
    }

    pub fn view_sheet(&self, name: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.paths, &self.viewer, name)
    }

    /// Picks (and if needed creates) the file to edit without launching
    /// anything, so callers can report copy-on-write before the editor starts.
    pub fn prepare_edit(&self, name: &str) -> Result<commands::CmdResult> {
        commands::edit::prepare(&self.paths, name)
    }

    pub fn open_in_editor(&self, path: &Path) -> Result<()> {
        commands::edit::open(&self.editor, path)
    }

    pub fn list_sheets(&self, layer_filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.paths, layer_filter)
    }

    pub fn search_sheets(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.paths, term)
    }

    pub fn directories(&self) -> Result<commands::CmdResult> {
        commands::directories::run(&self.paths)
    }

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn viewer(&self) -> &str {
        &self.viewer
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
