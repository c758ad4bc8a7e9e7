use super::error::{from_workspace, tool_error, tool_text};
use super::{
    CallToolResult, GetSearchPathRequest, McpError, RgMcpService, RootMode,
    SetSearchPathRequest,
};
use rg_mcp_search::SearchError;
use std::path::PathBuf;

const UNSET: &str = "<unset>";

impl RgMcpService {
    /// Folder the next search runs in, per the startup mode.
    pub(super) async fn resolve_folder(&self) -> Result<PathBuf, SearchError> {
        match self.mode.as_ref() {
            RootMode::Fixed(folder) => Ok(folder.clone()),
            RootMode::Session => {
                let session = self.session.lock().await;
                session
                    .require()
                    .map(|path| path.to_path_buf())
                    .map_err(from_workspace)
            }
            RootMode::FollowEditor(chain) => {
                let chain = chain.clone();
                let resolved = tokio::task::spawn_blocking(move || chain.resolve_with_source())
                    .await
                    .map_err(|err| SearchError::ExecutionFailure(err.to_string()))?;
                resolved.map(|r| r.path).ok_or_else(|| {
                    SearchError::ExecutionFailure(
                        "could not determine the editor workspace folder".to_string(),
                    )
                })
            }
        }
    }
}

pub(super) async fn get_search_path(
    service: &RgMcpService,
    _request: GetSearchPathRequest,
) -> Result<CallToolResult, McpError> {
    let mode = service.mode.label();
    let folder = match service.mode.as_ref() {
        RootMode::Fixed(folder) => folder.display().to_string(),
        RootMode::Session => {
            let session = service.session.lock().await;
            session
                .get()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| UNSET.to_string())
        }
        RootMode::FollowEditor(chain) => {
            let chain = chain.clone();
            match tokio::task::spawn_blocking(move || chain.resolve_with_source()).await {
                Ok(Some(resolved)) => {
                    format!("{} (via {})", resolved.path.display(), resolved.source)
                }
                Ok(None) => UNSET.to_string(),
                Err(err) => {
                    return Ok(tool_error(&SearchError::ExecutionFailure(err.to_string())))
                }
            }
        }
    };
    Ok(tool_text(format!("mode: {mode}\nsearch path: {folder}")))
}

pub(super) async fn set_search_path(
    service: &RgMcpService,
    request: SetSearchPathRequest,
) -> Result<CallToolResult, McpError> {
    if !matches!(service.mode.as_ref(), RootMode::Session) {
        return Ok(tool_error(&SearchError::InvalidInput(format!(
            "the search path is managed by the server ({} mode); restart rg-mcp without a folder argument to choose it per session",
            service.mode.label()
        ))));
    }

    let mut session = service.session.lock().await;
    match session.set_path(&request.path) {
        Ok(path) => Ok(tool_text(format!("Search path set to: {}", path.display()))),
        Err(err) => {
            log::debug!("set_search_path rejected {:?}: {err}", request.path);
            Ok(tool_error(&from_workspace(err)))
        }
    }
}
