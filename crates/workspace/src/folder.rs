use crate::error::{Result, WorkspaceError};
use std::path::{Path, PathBuf};

/// Validates a caller-provided search root and returns it canonicalized.
///
/// The path must be absolute, exist, and be a directory.
pub fn normalize_search_folder(raw: &str) -> Result<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(WorkspaceError::InvalidPath("empty".to_string()));
    }
    let path = Path::new(raw);
    if !path.is_absolute() {
        return Err(WorkspaceError::InvalidPath(format!(
            "'{raw}' is not an absolute path"
        )));
    }
    if !path.exists() {
        return Err(WorkspaceError::InvalidPath(format!("'{raw}' does not exist")));
    }
    if !path.is_dir() {
        return Err(WorkspaceError::InvalidPath(format!(
            "'{raw}' is not a directory"
        )));
    }
    let canonical = path
        .canonicalize()
        .map_err(|err| WorkspaceError::InvalidPath(format!("'{raw}': {err}")))?;
    Ok(strip_verbatim_prefix(canonical))
}

/// `canonicalize` on Windows yields `\\?\C:\...`; callers want the plain form back.
pub fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    if cfg!(windows) {
        let text = path.to_string_lossy();
        if let Some(rest) = text.strip_prefix(r"\\?\") {
            if !rest.starts_with("UNC\\") {
                return PathBuf::from(rest);
            }
        }
    }
    path
}

/// Best-effort "is this an existing directory" check used by the heuristic resolvers.
pub fn existing_dir(candidate: &str) -> Option<PathBuf> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }
    let path = PathBuf::from(candidate);
    path.is_dir().then_some(path)
}
