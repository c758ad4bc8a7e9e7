//! Editor window discovery.
//!
//! Enumeration is OS-specific and lives behind [`WindowSource`]; everything else (matching,
//! title parsing) is plain string work and platform-independent.

mod process;
mod title;
#[cfg(windows)]
mod win32;

pub use process::{process_identity, UNKNOWN};
pub use title::{extract_workspace_path, strip_editor_decorations, workspace_path_from_title};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What the tracker knows about one top-level window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub window_title: String,
    pub process_name: String,
    pub exe_path: String,
    pub pid: u32,
}

pub trait WindowSource: Send + Sync {
    /// The window that currently has keyboard focus, if any.
    fn foreground(&self) -> Option<WindowSnapshot>;

    /// Visible top-level windows in z-order.
    fn visible_windows(&self) -> Vec<WindowSnapshot>;
}

/// Used where the platform offers no window enumeration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWindowSource;

impl WindowSource for NoWindowSource {
    fn foreground(&self) -> Option<WindowSnapshot> {
        None
    }

    fn visible_windows(&self) -> Vec<WindowSnapshot> {
        Vec::new()
    }
}

pub fn platform_window_source() -> Arc<dyn WindowSource> {
    #[cfg(windows)]
    {
        Arc::new(win32::Win32WindowSource)
    }
    #[cfg(not(windows))]
    {
        log::debug!("window enumeration is not supported on this platform");
        Arc::new(NoWindowSource)
    }
}

/// Decides whether a window belongs to the editor.
#[derive(Debug, Clone)]
pub struct EditorMatcher {
    process_keywords: Vec<String>,
    title_keywords: Vec<String>,
}

impl Default for EditorMatcher {
    fn default() -> Self {
        Self::vscode()
    }
}

impl EditorMatcher {
    pub fn vscode() -> Self {
        Self {
            process_keywords: vec!["code.exe".into(), "code".into(), "vscode".into()],
            title_keywords: vec!["visual studio code".into(), "vscode".into()],
        }
    }

    pub fn matches(&self, window: &WindowSnapshot) -> bool {
        let process = window.process_name.to_lowercase();
        let title = window.window_title.to_lowercase();
        self.process_keywords.iter().any(|k| process.contains(k))
            || self.title_keywords.iter().any(|k| title.contains(k))
    }
}

/// Foreground window when it is the editor, otherwise the first visible editor window.
pub fn detect_active_editor_window(
    source: &dyn WindowSource,
    matcher: &EditorMatcher,
) -> Option<WindowSnapshot> {
    if let Some(window) = source.foreground() {
        if matcher.matches(&window) {
            return Some(window);
        }
    }
    source
        .visible_windows()
        .into_iter()
        .find(|window| matcher.matches(window))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FakeWindows {
        pub foreground: Option<WindowSnapshot>,
        pub visible: Vec<WindowSnapshot>,
    }

    impl WindowSource for FakeWindows {
        fn foreground(&self) -> Option<WindowSnapshot> {
            self.foreground.clone()
        }

        fn visible_windows(&self) -> Vec<WindowSnapshot> {
            self.visible.clone()
        }
    }

    pub(crate) fn window(title: &str, process: &str) -> WindowSnapshot {
        WindowSnapshot {
            window_title: title.to_string(),
            process_name: process.to_string(),
            exe_path: UNKNOWN.to_string(),
            pid: 42,
        }
    }

    #[test]
    fn matches_by_process_or_title() {
        let matcher = EditorMatcher::vscode();
        assert!(matcher.matches(&window("notes.txt", "Code.exe")));
        assert!(matcher.matches(&window("C:\\repo - Visual Studio Code", "electron")));
        assert!(!matcher.matches(&window("Inbox", "outlook.exe")));
    }

    #[test]
    fn prefers_foreground_editor() {
        let source = FakeWindows {
            foreground: Some(window("front - Visual Studio Code", "Code.exe")),
            visible: vec![window("back - Visual Studio Code", "Code.exe")],
        };
        let found = detect_active_editor_window(&source, &EditorMatcher::vscode()).unwrap();
        assert_eq!(found.window_title, "front - Visual Studio Code");
    }

    #[test]
    fn falls_back_to_first_visible_editor() {
        let source = FakeWindows {
            foreground: Some(window("Terminal", "wt.exe")),
            visible: vec![
                window("Browser", "firefox.exe"),
                window("one - Visual Studio Code", "Code.exe"),
                window("two - Visual Studio Code", "Code.exe"),
            ],
        };
        let found = detect_active_editor_window(&source, &EditorMatcher::vscode()).unwrap();
        assert_eq!(found.window_title, "one - Visual Studio Code");
    }

    #[test]
    fn no_editor_means_none() {
        let source = FakeWindows {
            foreground: None,
            visible: vec![window("Browser", "firefox.exe")],
        };
        assert!(detect_active_editor_window(&source, &EditorMatcher::vscode()).is_none());
        assert!(detect_active_editor_window(&NoWindowSource, &EditorMatcher::vscode()).is_none());
    }
}
