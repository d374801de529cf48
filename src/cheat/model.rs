use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Name of the synthetic layer backed by `./.cheat`.
pub const LOCAL_LAYER_NAME: &str = "local";

/// One named root directory contributing sheets to the namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    pub root: PathBuf,
    pub readonly: bool,
    pub tags: BTreeSet<String>,
}

impl Layer {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>, readonly: bool) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            readonly,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_writable(&self) -> bool {
        !self.readonly
    }
}

/// A sheet located in a specific layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSheet {
    pub layer: Layer,
    pub path: PathBuf,
}

/// Outcome of resolving a sheet name across all layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    FoundWritable(ResolvedSheet),
    FoundReadonly(ResolvedSheet),
    NotFound,
}

impl Resolution {
    pub fn found(sheet: ResolvedSheet) -> Self {
        if sheet.layer.readonly {
            Resolution::FoundReadonly(sheet)
        } else {
            Resolution::FoundWritable(sheet)
        }
    }

    pub fn sheet(&self) -> Option<&ResolvedSheet> {
        match self {
            Resolution::FoundWritable(sheet) | Resolution::FoundReadonly(sheet) => Some(sheet),
            Resolution::NotFound => None,
        }
    }

    pub fn into_sheet(self) -> Option<ResolvedSheet> {
        match self {
            Resolution::FoundWritable(sheet) | Resolution::FoundReadonly(sheet) => Some(sheet),
            Resolution::NotFound => None,
        }
    }
}

/// Where an edit lands, decided by the write router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteTarget {
    /// The sheet already lives in a writable layer; edit it where it is.
    InPlace(PathBuf),
    /// The sheet was copied out of a readonly layer before editing.
    CopyOnWrite {
        source: ResolvedSheet,
        target_layer: String,
        target: PathBuf,
        /// An existing file at `target` was overwritten by the copy.
        replaced: bool,
    },
    /// No sheet exists yet; the editor creates `path` on save.
    CreateNew { target_layer: String, path: PathBuf },
}

impl WriteTarget {
    pub fn path(&self) -> &Path {
        match self {
            WriteTarget::InPlace(path) => path.as_path(),
            WriteTarget::CopyOnWrite { target, .. } => target.as_path(),
            WriteTarget::CreateNew { path, .. } => path.as_path(),
        }
    }
}

/// A single line in a sheet matching a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub sheet: String,
    /// 1-based
    pub line_number: usize,
    pub line: String,
}
