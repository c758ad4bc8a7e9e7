use super::{CallToolResult, Content};
use rg_mcp_search::SearchError;
use rg_mcp_workspace::WorkspaceError;

/// Folds workspace failures into the search taxonomy the tools report.
pub(super) fn from_workspace(err: WorkspaceError) -> SearchError {
    match err {
        WorkspaceError::Unset | WorkspaceError::InvalidPath(_) => {
            SearchError::InvalidInput(err.to_string())
        }
        WorkspaceError::NoHomeDir | WorkspaceError::Io(_) | WorkspaceError::Json(_) => {
            SearchError::ExecutionFailure(err.to_string())
        }
    }
}

pub(super) fn tool_error(err: &SearchError) -> CallToolResult {
    log::debug!("tool failed ({}): {err}", err.kind());
    CallToolResult::error(vec![Content::text(err.render())])
}

pub(super) fn tool_text(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
