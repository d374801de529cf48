use crate::error::{CheatError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::{Command, ExitStatus};

const FALLBACK_EDITORS: &[&str] = &["vim", "vi", "nano"];
const DEFAULT_EDITOR: &str = "vi";
const DEFAULT_VIEWER: &str = "less";

/// Picks the editor command: config override, then $EDITOR, then $VISUAL,
/// then the first common editor found on PATH.
pub fn get_editor(config_editor: Option<&str>) -> String {
    if let Some(editor) = config_editor {
        return editor.to_string();
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Some(editor) = env_non_empty(var) {
            return editor;
        }
    }

    FALLBACK_EDITORS
        .iter()
        .find(|candidate| which::which(candidate).is_ok())
        .unwrap_or(&DEFAULT_EDITOR)
        .to_string()
}

/// Picks the pager command: config override, then $PAGER, then `less`.
pub fn get_viewer(config_viewer: Option<&str>) -> String {
    if let Some(viewer) = config_viewer {
        return viewer.to_string();
    }
    env_non_empty("PAGER").unwrap_or_else(|| DEFAULT_VIEWER.to_string())
}

fn env_non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Builds `<program> [args...] <path>` from a command string like
/// `code --wait`.
fn command_for(program: &str, path: &Path) -> Option<Command> {
    let mut parts = program.split_whitespace();
    let mut cmd = Command::new(parts.next()?);
    cmd.args(parts).arg(path);
    Some(cmd)
}

fn launch(program: &str, path: &Path) -> Result<ExitStatus> {
    let mut cmd = command_for(program, path)
        .ok_or_else(|| CheatError::Editor("empty command".to_string()))?;
    cmd.status()
        .map_err(|e| CheatError::Editor(format!("Failed to launch '{}': {}", program, e)))
}

/// Opens `path` in the editor and waits for it to exit. A failed launch is
/// an error; a non-zero exit is only logged.
pub fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    let status = launch(editor, path)?;
    if !status.success() {
        tracing::warn!(editor, %status, "editor exited with non-zero status");
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    Paged,
    /// The pager could not be started; the raw sheet is returned instead.
    Fallback(String),
}

/// Shows `path` in the pager, falling back to the file's content when the
/// pager cannot be launched.
pub fn view_file(viewer: &str, path: &Path) -> Result<ViewOutcome> {
    match launch(viewer, path) {
        Ok(status) => {
            if !status.success() {
                tracing::warn!(viewer, %status, "viewer exited with non-zero status");
            }
            Ok(ViewOutcome::Paged)
        }
        Err(e) => {
            tracing::warn!(error = %e, "viewer unavailable, printing sheet");
            let bytes = fs::read(path)?;
            Ok(ViewOutcome::Fallback(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_override_wins() {
        assert_eq!(get_editor(Some("hx")), "hx");
        assert_eq!(get_viewer(Some("bat --plain")), "bat --plain");
    }

    #[test]
    fn test_command_for_splits_arguments() {
        let cmd = command_for("code --wait -n", Path::new("/tmp/tar.md")).unwrap();
        assert_eq!(cmd.get_program(), "code");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["--wait", "-n", "/tmp/tar.md"]);
    }

    #[test]
    fn test_command_for_empty_program() {
        assert!(command_for("   ", Path::new("x")).is_none());
    }

    #[test]
    fn test_view_falls_back_when_viewer_missing() {
        let temp = TempDir::new().unwrap();
        let sheet = temp.path().join("tar.md");
        fs::write(&sheet, "tar -xzf\n").unwrap();

        let outcome = view_file("cheat-test-no-such-pager-xyz", &sheet).unwrap();
        assert_eq!(outcome, ViewOutcome::Fallback("tar -xzf\n".to_string()));
    }

    #[test]
    fn test_editor_launch_failure_is_error() {
        let temp = TempDir::new().unwrap();
        let err = open_in_editor("cheat-test-no-such-editor-xyz", &temp.path().join("x"))
            .unwrap_err();
        assert!(matches!(err, CheatError::Editor(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_view_with_working_pager() {
        let temp = TempDir::new().unwrap();
        let sheet = temp.path().join("tar.md");
        fs::write(&sheet, "x").unwrap();

        assert_eq!(view_file("true", &sheet).unwrap(), ViewOutcome::Paged);
    }
}
