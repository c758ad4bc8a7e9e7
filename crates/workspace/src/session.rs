use crate::error::{Result, WorkspaceError};
use crate::folder::normalize_search_folder;
use std::path::{Path, PathBuf};

/// Search root explicitly chosen by the connected client.
///
/// Owned by one server connection; `Unset` until the first successful `set_path`, after which
/// every further `set_path` overwrites it.
#[derive(Debug, Default, Clone)]
pub struct SessionFolder {
    folder: Option<PathBuf>,
}

impl SessionFolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.folder.is_some()
    }

    pub fn get(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn require(&self) -> Result<&Path> {
        self.get().ok_or(WorkspaceError::Unset)
    }

    /// A rejected path leaves the previous value untouched.
    pub fn set_path(&mut self, raw: &str) -> Result<&Path> {
        let normalized = normalize_search_folder(raw)?;
        if self.folder.as_ref() != Some(&normalized) {
            log::info!("session search path set to {}", normalized.display());
        }
        Ok(self.folder.insert(normalized).as_path())
    }
}
