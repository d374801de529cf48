//! # Name Resolution
//!
//! Maps a sheet name such as `tar` or `git/branch` to a file. Layers are
//! scanned most local first and the first layer with a match wins outright;
//! lower-priority layers are never consulted after that.
//!
//! Inside a layer a name matches either:
//! 1. the exact file `<root>/<name>`, or
//! 2. `<root>/<name>.<ext>` with a single extension segment. When several
//!    extensions exist (`tar.md`, `tar.txt`) the lexicographically first wins.
//!
//! Names that would leave a layer's root (`../../etc/passwd`, absolute
//! paths, symlinks pointing outside) are treated as a miss for that layer.
//! That case is never reported as its own error.

use crate::model::{Layer, Resolution, ResolvedSheet};
use crate::pathset::PathSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Result of looking a name up in a single layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerLookup {
    Hit(PathBuf),
    Miss,
    Escaped,
}

pub fn resolve(paths: &PathSet, name: &str) -> Resolution {
    for layer in paths.layers_by_priority_reversed() {
        match lookup_in_layer(layer, name) {
            LayerLookup::Hit(path) => {
                tracing::debug!(name, layer = %layer.name, path = %path.display(), "resolved sheet");
                return Resolution::found(ResolvedSheet {
                    layer: layer.clone(),
                    path,
                });
            }
            LayerLookup::Escaped => {
                tracing::debug!(name, layer = %layer.name, "name escapes layer root, skipping");
            }
            LayerLookup::Miss => {}
        }
    }

    Resolution::NotFound
}

pub fn lookup_in_layer(layer: &Layer, name: &str) -> LayerLookup {
    if name.is_empty() || is_hidden_name(name) || !layer.root.is_dir() {
        return LayerLookup::Miss;
    }

    let candidate = layer.root.join(name);
    if !is_contained(&layer.root, &candidate) {
        return LayerLookup::Escaped;
    }

    if candidate.is_file() {
        return LayerLookup::Hit(candidate);
    }

    match first_extension_match(&layer.root, &candidate) {
        Some(path) => LayerLookup::Hit(path),
        None => LayerLookup::Miss,
    }
}

/// Finds `<candidate>.<ext>` siblings, returning the lowest by file name.
fn first_extension_match(root: &Path, candidate: &Path) -> Option<PathBuf> {
    let parent = candidate.parent()?;
    let base = candidate.file_name()?.to_str()?;
    let prefix = format!("{}.", base);

    let entries = fs::read_dir(parent).ok()?;
    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(|file_name| file_name.strip_prefix(&prefix))
                .is_some_and(|ext| !ext.is_empty() && !ext.contains('.'))
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_contained(root, path))
        .collect();

    matches.sort();
    matches.into_iter().next()
}

/// True when `candidate`, after resolving `..` and symlinks, stays inside
/// `root`. Works for candidates that do not exist yet.
pub fn is_contained(root: &Path, candidate: &Path) -> bool {
    match (canonicalize_lenient(root), canonicalize_lenient(candidate)) {
        (Some(root), Some(candidate)) => candidate.starts_with(&root),
        _ => false,
    }
}

/// Resolves `path` one component at a time the way the OS would: existing
/// components (symlinks included) are canonicalized before the next `..` is
/// applied, and only the part that does not exist yet is handled lexically.
/// Returns `None` for dangling symlinks or `..` above the filesystem root.
pub fn canonicalize_lenient(path: &Path) -> Option<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `resolved` holds no symlinks, so popping matches the OS
                if !resolved.pop() {
                    return None;
                }
            }
            Component::Normal(part) => {
                resolved.push(part);
                if fs::symlink_metadata(&resolved).is_ok() {
                    resolved = resolved.canonicalize().ok()?;
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    Some(resolved)
}

/// True when any component of `name` is hidden (`.git`, `notes/.draft`).
pub fn is_hidden_name(name: &str) -> bool {
    Path::new(name).components().any(|c| match c {
        Component::Normal(part) => part.to_str().is_some_and(|p| p.starts_with('.')),
        _ => false,
    })
}
