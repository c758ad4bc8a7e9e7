//! # rg-mcp workspace
//!
//! Decides which folder a search runs in.
//!
//! - [`normalize_search_folder`]: validation shared by every mode (absolute, exists, directory).
//! - [`SessionFolder`]: folder chosen explicitly by the connected client.
//! - [`ResolverChain`]: best-effort guess from the editor window, the recorded window state
//!   file, then the working directory.
//! - [`WindowStateStore`]: the JSON file the tracker writes and the chain reads.

mod error;
mod folder;
mod resolver;
mod session;
mod state;
pub mod window;

pub use error::{Result, WorkspaceError};
pub use folder::{existing_dir, normalize_search_folder, strip_verbatim_prefix};
pub use resolver::{
    ActiveEditorWindow, CurrentDir, CurrentWorkspaceResolver, LastRecordedWindow,
    ResolvedWorkspace, ResolverChain,
};
pub use session::SessionFolder;
pub use state::{
    HistoryEntry, WindowState, WindowStateStore, MAX_HISTORY, WINDOW_STATE_ENV,
    WINDOW_STATE_FILE_NAME,
};
pub use window::{
    detect_active_editor_window, extract_workspace_path, platform_window_source,
    workspace_path_from_title, EditorMatcher, NoWindowSource, WindowSnapshot, WindowSource,
};
