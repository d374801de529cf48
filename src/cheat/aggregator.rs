//! # Listing and Search
//!
//! Walks every layer and reports sheets by *logical name*: the path relative
//! to the layer root with one trailing extension removed (`git/branch.md`
//! becomes `git/branch`). Hidden files and directories are ignored, except
//! that a layer root may itself be hidden (`.cheat`).
//!
//! Listing reports existence only, so a name present in several layers
//! appears once. Search reports every matching line of every file, in
//! layer order, then file order, then line order.

use crate::model::{Layer, SearchHit};
use crate::pathset::PathSet;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Sorted, de-duplicated logical names across all layers, or only the layer
/// called `layer_filter` when one is given.
pub fn list(paths: &PathSet, layer_filter: Option<&str>) -> Vec<String> {
    let mut names = BTreeSet::new();

    for layer in paths.layers_by_priority() {
        if layer_filter.is_some_and(|wanted| wanted != layer.name) {
            continue;
        }
        for (_, name) in sheet_files(layer) {
            names.insert(name);
        }
    }

    names.into_iter().collect()
}

/// Case-insensitive line search across every sheet in every layer.
pub fn search(paths: &PathSet, term: &str) -> Vec<SearchHit> {
    let needle = term.to_lowercase();
    let mut hits = Vec::new();

    for layer in paths.layers_by_priority() {
        for (path, name) in sheet_files(layer) {
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable sheet");
                    continue;
                }
            };

            let text = decode_lossy(&bytes);
            for (i, line) in text.lines().enumerate() {
                if line.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        sheet: name.clone(),
                        line_number: i + 1,
                        line: line.trim().to_string(),
                    });
                }
            }
        }
    }

    hits
}

/// Regular, non-hidden files under a layer root paired with their logical
/// names, in file-name order.
fn sheet_files(layer: &Layer) -> Vec<(PathBuf, String)> {
    if !layer.root.is_dir() {
        return Vec::new();
    }

    WalkDir::new(&layer.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(layer = %layer.name, error = %e, "skipping entry while walking");
                None
            }
        })
        .filter(|entry| entry.depth() > 0 && entry.path().is_file())
        .filter_map(|entry| {
            let name = logical_name(&layer.root, entry.path())?;
            Some((entry.into_path(), name))
        })
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Layer-relative path with `/` separators and the final extension removed.
pub fn logical_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let (last, parents) = segments.split_last()?;

    let stem = match last.rfind('.') {
        Some(idx) if idx > 0 => &last[..idx],
        _ => last.as_str(),
    };

    let mut name = parents.join("/");
    if !name.is_empty() {
        name.push('/');
    }
    name.push_str(stem);
    Some(name)
}

/// Decodes UTF-8, dropping malformed byte sequences instead of failing.
fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
