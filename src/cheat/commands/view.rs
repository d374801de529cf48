use crate::commands::CmdResult;
use crate::editor::{view_file, ViewOutcome};
use crate::error::{CheatError, Result};
use crate::pathset::PathSet;
use crate::resolver::resolve;

pub fn run(paths: &PathSet, viewer: &str, name: &str) -> Result<CmdResult> {
    let sheet = resolve(paths, name)
        .into_sheet()
        .ok_or_else(|| CheatError::NotFound(name.to_string()))?;

    let mut result = CmdResult::default().with_sheet_paths(vec![sheet.path.clone()]);
    if let ViewOutcome::Fallback(content) = view_file(viewer, &sheet.path)? {
        result.fallback_content = Some(content);
    }
    Ok(result)
}
