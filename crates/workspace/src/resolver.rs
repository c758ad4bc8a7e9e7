use crate::state::WindowStateStore;
use crate::window::{
    detect_active_editor_window, platform_window_source, workspace_path_from_title,
    EditorMatcher, WindowSource,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Something that can guess the folder the user is working in.
pub trait CurrentWorkspaceResolver: Send + Sync {
    fn name(&self) -> &'static str;

    fn resolve(&self) -> Option<PathBuf>;
}

/// Folder named by the active editor window's title.
///
/// An editor window whose title is not an existing folder yields nothing, so the chain moves on
/// to the recorded window instead of stopping at the working directory.
pub struct ActiveEditorWindow {
    source: Arc<dyn WindowSource>,
    matcher: EditorMatcher,
}

impl ActiveEditorWindow {
    pub fn new(source: Arc<dyn WindowSource>, matcher: EditorMatcher) -> Self {
        Self { source, matcher }
    }
}

impl CurrentWorkspaceResolver for ActiveEditorWindow {
    fn name(&self) -> &'static str {
        "active_editor_window"
    }

    fn resolve(&self) -> Option<PathBuf> {
        let window = detect_active_editor_window(self.source.as_ref(), &self.matcher)?;
        let path = workspace_path_from_title(&window.window_title);
        if path.is_none() {
            log::debug!(
                "editor window title is not a folder: {:?}",
                window.window_title
            );
        }
        path
    }
}

/// Folder named by the last window the tracker recorded.
pub struct LastRecordedWindow {
    store: WindowStateStore,
}

impl LastRecordedWindow {
    pub fn new(store: WindowStateStore) -> Self {
        Self { store }
    }
}

impl CurrentWorkspaceResolver for LastRecordedWindow {
    fn name(&self) -> &'static str {
        "window_state_file"
    }

    fn resolve(&self) -> Option<PathBuf> {
        let title = self.store.last_window_title()?;
        workspace_path_from_title(&title)
    }
}

pub struct CurrentDir;

impl CurrentWorkspaceResolver for CurrentDir {
    fn name(&self) -> &'static str {
        "current_dir"
    }

    fn resolve(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWorkspace {
    pub path: PathBuf,
    pub source: &'static str,
}

/// Ordered fallback list; the first resolver that yields a path wins.
pub struct ResolverChain {
    resolvers: Vec<Box<dyn CurrentWorkspaceResolver>>,
}

impl ResolverChain {
    pub fn new(resolvers: Vec<Box<dyn CurrentWorkspaceResolver>>) -> Self {
        Self { resolvers }
    }

    /// Active editor window, then the recorded window, then the working directory.
    pub fn follow_editor(store: WindowStateStore) -> Self {
        Self::follow_editor_with(platform_window_source(), EditorMatcher::vscode(), store)
    }

    pub fn follow_editor_with(
        source: Arc<dyn WindowSource>,
        matcher: EditorMatcher,
        store: WindowStateStore,
    ) -> Self {
        Self::new(vec![
            Box::new(ActiveEditorWindow::new(source, matcher)),
            Box::new(LastRecordedWindow::new(store)),
            Box::new(CurrentDir),
        ])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    pub fn resolve_with_source(&self) -> Option<ResolvedWorkspace> {
        for resolver in &self.resolvers {
            if let Some(path) = resolver.resolve() {
                log::info!("workspace resolved via {}: {}", resolver.name(), path.display());
                return Some(ResolvedWorkspace {
                    path,
                    source: resolver.name(),
                });
            }
            log::debug!("workspace resolver {} found nothing", resolver.name());
        }
        None
    }
}

impl CurrentWorkspaceResolver for ResolverChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn resolve(&self) -> Option<PathBuf> {
        self.resolve_with_source().map(|r| r.path)
    }
}
