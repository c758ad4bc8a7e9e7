use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures surfaced by a search call.
///
/// The server renders these to text only at the tool boundary, so callers inside the
/// workspace can still tell a missing binary from a bad folder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("ripgrep (rg) not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("search failed: {0}")]
    ExecutionFailure(String),
}

impl SearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::NotFound(_) => "not_found",
            SearchError::InvalidInput(_) => "invalid_input",
            SearchError::ExecutionFailure(_) => "execution_failure",
        }
    }

    /// Text shown to the agent host.
    pub fn render(&self) -> String {
        format!("Error: {self}")
    }
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        SearchError::ExecutionFailure(err.to_string())
    }
}
