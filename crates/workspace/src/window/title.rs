use crate::folder::existing_dir;
use std::path::PathBuf;

const EDITOR_SUFFIX: &str = " - Visual Studio Code";
const EDITOR_NAME: &str = "Visual Studio Code";
const UNSAVED_MARKER: &str = "● ";

/// Removes the editor name and unsaved-file marker from a window title.
///
/// Assumes the editor is configured to show the full folder path as the title.
pub fn strip_editor_decorations(window_title: &str) -> String {
    window_title
        .replace(EDITOR_SUFFIX, "")
        .replace(EDITOR_NAME, "")
        .replace(UNSAVED_MARKER, "")
        .trim()
        .to_string()
}

/// Folder named by the title, only when it is an existing directory.
pub fn workspace_path_from_title(window_title: &str) -> Option<PathBuf> {
    existing_dir(&strip_editor_decorations(window_title))
}

/// Like [`workspace_path_from_title`], falling back to the process working directory.
pub fn extract_workspace_path(window_title: &str) -> PathBuf {
    workspace_path_from_title(window_title)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
