use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("search path is not set; call set_search_path with an absolute directory path first")]
    Unset,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("home directory is unavailable")]
    NoHomeDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
