use super::{
    CallToolResult, GetSearchPathRequest, McpError, RgMcpService, SearchDefinitionsRequest,
    SearchFilesRequest, SetSearchPathRequest,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_router() -> ToolRouter<RgMcpService> {
    RgMcpService::tool_router()
}

#[tool_router]
impl RgMcpService {
    /// Content search in the active folder.
    #[tool(description = "Search for content in files using ripgrep")]
    pub async fn search_files(
        &self,
        Parameters(request): Parameters<SearchFilesRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::search::search_files(self, request).await
    }

    /// Python definition search in the active folder.
    #[tool(description = "Search for Python function or class definitions using ripgrep")]
    pub async fn search_definitions(
        &self,
        Parameters(request): Parameters<SearchDefinitionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::search::search_definitions(self, request).await
    }

    /// Explicitly set the per-connection search folder.
    #[tool(
        description = "Set the folder to search in for this session. Requires an absolute path to an existing directory; only available when the server was started without a folder."
    )]
    pub async fn set_search_path(
        &self,
        Parameters(request): Parameters<SetSearchPathRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::root::set_search_path(self, request).await
    }

    /// Active mode and folder.
    #[tool(description = "Show how the search folder is chosen and which folder is active.")]
    pub async fn get_search_path(
        &self,
        Parameters(request): Parameters<GetSearchPathRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::root::get_search_path(self, request).await
    }
}
