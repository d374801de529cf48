use crate::commands::{CmdMessage, CmdResult};
use crate::editor::open_in_editor;
use crate::error::Result;
use crate::model::WriteTarget;
use crate::pathset::PathSet;
use crate::router;
use std::path::Path;

/// Routes the edit, copying out of a readonly layer if needed. The returned
/// result carries the single path the editor should open.
pub fn prepare(paths: &PathSet, name: &str) -> Result<CmdResult> {
    let target = router::route(paths, name)?;

    let mut result = CmdResult::default().with_sheet_paths(vec![target.path().to_path_buf()]);
    match &target {
        WriteTarget::InPlace(_) => {}
        WriteTarget::CopyOnWrite {
            source,
            target_layer,
            target,
            replaced,
        } => {
            result.add_message(CmdMessage::info(format!(
                "Path '{}' is read-only. Copying to '{}'...",
                source.layer.name, target_layer
            )));
            if *replaced {
                result.add_message(CmdMessage::warning(format!(
                    "Overwrote existing {}",
                    target.display()
                )));
            }
            result.add_message(CmdMessage::success(format!(
                "Copied to {}",
                target.display()
            )));
        }
        WriteTarget::CreateNew { target_layer, .. } => {
            result.add_message(CmdMessage::info(format!(
                "Creating new cheatsheet '{}' in '{}'",
                name, target_layer
            )));
        }
    }

    Ok(result)
}

/// Opens a prepared sheet in `editor`. Failing to launch is fatal.
pub fn open(editor: &str, path: &Path) -> Result<()> {
    open_in_editor(editor, path)
}
