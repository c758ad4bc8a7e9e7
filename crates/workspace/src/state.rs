use crate::error::{Result, WorkspaceError};
use crate::window::WindowSnapshot;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the window state file location.
pub const WINDOW_STATE_ENV: &str = "RG_MCP_WINDOW_STATE";
pub const WINDOW_STATE_FILE_NAME: &str = "vscode_window_config.json";
pub const MAX_HISTORY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub window_title: String,
    pub process_name: String,
}

/// On-disk record of the last detected editor window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(
        default,
        rename = "vscode_window",
        skip_serializing_if = "Option::is_none"
    )]
    pub window: Option<WindowSnapshot>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Reads and writes [`WindowState`] at a fixed path.
#[derive(Debug, Clone)]
pub struct WindowStateStore {
    path: PathBuf,
}

impl WindowStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `RG_MCP_WINDOW_STATE`, else `~/vscode_window_config.json`.
    pub fn from_env() -> Result<Self> {
        if let Some(path) = env::var(WINDOW_STATE_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            return Ok(Self::new(path));
        }
        let home = dirs::home_dir().ok_or(WorkspaceError::NoHomeDir)?;
        Ok(Self::new(home.join(WINDOW_STATE_FILE_NAME)))
    }

    /// Explicit path wins; otherwise [`Self::from_env`].
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Ok(Self::new(path)),
            None => Self::from_env(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file has never been written.
    pub fn load(&self) -> Result<Option<WindowState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read(&self.path)?;
        Ok(Some(serde_json::from_slice(&data)?))
    }

    pub fn last_window_title(&self) -> Option<String> {
        match self.load() {
            Ok(state) => state?.window.map(|w| w.window_title),
            Err(err) => {
                log::warn!(
                    "failed to read window state {}: {err}",
                    self.path.display()
                );
                None
            }
        }
    }

    /// Stores `window` as the latest detection and appends it to the bounded history.
    ///
    /// An unreadable existing file only loses its history; the new record is still written.
    pub fn record(&self, window: &WindowSnapshot) -> Result<WindowState> {
        let mut history = match self.load() {
            Ok(state) => state.map(|s| s.history).unwrap_or_default(),
            Err(err) => {
                log::warn!(
                    "discarding unreadable window history {}: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        };

        let now = timestamp_now();
        history.push(HistoryEntry {
            timestamp: now.clone(),
            window_title: window.window_title.clone(),
            process_name: window.process_name.clone(),
        });
        if history.len() > MAX_HISTORY {
            let excess = history.len() - MAX_HISTORY;
            history.drain(..excess);
        }

        let state = WindowState {
            last_updated: Some(now),
            window: Some(window.clone()),
            history,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&state)?;
        fs::write(&self.path, data)?;
        log::info!("window state saved to {}", self.path.display());
        Ok(state)
    }
}

/// Local time, ISO-8601 with microseconds and no offset.
fn timestamp_now() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
