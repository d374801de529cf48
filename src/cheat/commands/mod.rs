use crate::model::{Layer, SearchHit};
use std::path::PathBuf;

pub mod directories;
pub mod edit;
pub mod list;
pub mod search;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub sheet_names: Vec<String>,
    pub search_hits: Vec<SearchHit>,
    pub layers: Vec<Layer>,
    pub sheet_paths: Vec<PathBuf>,
    /// Raw sheet text to print when no pager could be started
    pub fallback_content: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_sheet_names(mut self, names: Vec<String>) -> Self {
        self.sheet_names = names;
        self
    }

    pub fn with_search_hits(mut self, hits: Vec<SearchHit>) -> Self {
        self.search_hits = hits;
        self
    }

    pub fn with_layers(mut self, layers: Vec<Layer>) -> Self {
        self.layers = layers;
        self
    }

    pub fn with_sheet_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.sheet_paths = paths;
        self
    }
}
