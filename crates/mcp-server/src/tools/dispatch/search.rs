use super::error::{tool_error, tool_text};
use super::{
    CallToolResult, McpError, RgMcpService, SearchDefinitionsRequest, SearchFilesRequest,
};
use rg_mcp_search::SearchRequest;

pub(super) async fn search_files(
    service: &RgMcpService,
    request: SearchFilesRequest,
) -> Result<CallToolResult, McpError> {
    let folder = match service.resolve_folder().await {
        Ok(folder) => folder,
        Err(err) => return Ok(tool_error(&err)),
    };

    let request = SearchRequest::new(request.pattern, folder);
    match service.searcher.search_files(&request).await {
        Ok(outcome) => Ok(tool_text(outcome.render())),
        Err(err) => Ok(tool_error(&err)),
    }
}

pub(super) async fn search_definitions(
    service: &RgMcpService,
    request: SearchDefinitionsRequest,
) -> Result<CallToolResult, McpError> {
    let folder = match service.resolve_folder().await {
        Ok(folder) => folder,
        Err(err) => return Ok(tool_error(&err)),
    };

    match service
        .searcher
        .search_definitions(&request.name, &folder)
        .await
    {
        Ok(outcome) => Ok(tool_text(outcome.render())),
        Err(err) => Ok(tool_error(&err)),
    }
}
