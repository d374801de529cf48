//! # Write Routing
//!
//! Decides which file an edit touches:
//!
//! | resolution       | target                                                   |
//! |------------------|----------------------------------------------------------|
//! | found, writable  | the resolved file, untouched                             |
//! | found, readonly  | copy into the first writable layer, then edit the copy   |
//! | not found        | `<first writable root>/<name>`, created by the editor    |
//!
//! "First writable" means first in *configured* order (most global first),
//! while lookups run most local first. With `[global (ro), work, personal]`
//! an edit of a global sheet lands in `work`, not `personal`. This asymmetry
//! is intended but regularly surprises users.
//!
//! Nothing is written when no writable layer exists.

use crate::error::{CheatError, Result};
use crate::model::{Layer, Resolution, ResolvedSheet, WriteTarget};
use crate::pathset::PathSet;
use crate::resolver::{canonicalize_lenient, is_contained, is_hidden_name, resolve};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

/// Resolves `name` and prepares the file an editor should open.
pub fn route(paths: &PathSet, name: &str) -> Result<WriteTarget> {
    route_resolution(paths, name, resolve(paths, name))
}

pub fn route_resolution(
    paths: &PathSet,
    name: &str,
    resolution: Resolution,
) -> Result<WriteTarget> {
    match resolution {
        Resolution::FoundWritable(sheet) => {
            tracing::debug!(name, path = %sheet.path.display(), "editing sheet in place");
            Ok(WriteTarget::InPlace(sheet.path))
        }
        Resolution::FoundReadonly(sheet) => {
            let layer = writable_layer(paths, name)?;
            let target = copy_target(layer, name, &sheet.path);
            check_target(layer, name, &target)?;
            let replaced = copy_sheet(&sheet, &target)?;
            Ok(WriteTarget::CopyOnWrite {
                source: sheet,
                target_layer: layer.name.clone(),
                target,
                replaced,
            })
        }
        Resolution::NotFound => {
            let layer = writable_layer(paths, name)?;
            let path = layer.root.join(name);
            check_target(layer, name, &path)?;
            ensure_parent(&path)?;
            tracing::debug!(name, layer = %layer.name, path = %path.display(), "new sheet");
            Ok(WriteTarget::CreateNew {
                target_layer: layer.name.clone(),
                path,
            })
        }
    }
}

fn writable_layer<'a>(paths: &'a PathSet, name: &str) -> Result<&'a Layer> {
    paths
        .first_writable()
        .ok_or_else(|| CheatError::NoWritableLayer(name.to_string()))
}

/// `<root>/<name>`, carrying over the source's extension when the name lacks it.
fn copy_target(layer: &Layer, name: &str, source: &Path) -> PathBuf {
    let mut target = layer.root.join(name);

    if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
        let suffix = format!(".{}", ext);
        if !name.ends_with(&suffix) {
            let mut file_name = target.file_name().unwrap_or_default().to_os_string();
            file_name.push(&suffix);
            target.set_file_name(file_name);
        }
    }

    target
}

fn check_target(layer: &Layer, name: &str, target: &Path) -> Result<()> {
    if name.is_empty() || is_hidden_name(name) || !is_contained(&layer.root, target) {
        return Err(CheatError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Copies bytes and access/modification times onto `target`, replacing any
/// file already there. Returns whether an existing file was replaced. A
/// failed copy leaves no partial target behind.
fn copy_sheet(source: &ResolvedSheet, target: &Path) -> Result<bool> {
    ensure_parent(target)?;

    let replaced = target.exists();
    if replaced && canonicalize_lenient(target) == canonicalize_lenient(&source.path) {
        return Ok(false);
    }

    let mut reader = File::open(&source.path)?;
    let meta = reader.metadata()?;
    let mut writer = File::create(target)?;
    if let Err(e) = write_copy(&mut reader, &mut writer, &meta) {
        drop(writer);
        let _ = fs::remove_file(target);
        return Err(e.into());
    }

    if replaced {
        tracing::warn!(target = %target.display(), "replaced existing sheet with readonly copy");
    }
    tracing::debug!(
        from = %source.path.display(),
        to = %target.display(),
        layer = %source.layer.name,
        "copied readonly sheet"
    );
    Ok(replaced)
}

fn write_copy(reader: &mut File, writer: &mut File, meta: &fs::Metadata) -> io::Result<()> {
    io::copy(reader, writer)?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    writer.set_times(times)
}
