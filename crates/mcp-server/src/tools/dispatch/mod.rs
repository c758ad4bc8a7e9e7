//! MCP tool dispatch for rg-mcp.

mod error;
mod root;
mod router;
mod search;

use super::schemas::root::{GetSearchPathRequest, SetSearchPathRequest};
use super::schemas::search::{SearchDefinitionsRequest, SearchFilesRequest};
use crate::config::{RootMode, ServerConfig};
use rg_mcp_search::Searcher;
use rg_mcp_workspace::SessionFolder;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ErrorData as McpError, ServerHandler};
use std::sync::Arc;
use tokio::sync::Mutex;

/// rg-mcp MCP Service
///
/// One instance serves one client connection, so the session folder is per connection.
#[derive(Clone)]
pub struct RgMcpService {
    searcher: Arc<Searcher>,
    mode: Arc<RootMode>,
    session: Arc<Mutex<SessionFolder>>,
    tool_router: ToolRouter<Self>,
}

impl RgMcpService {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            searcher: Arc::new(config.searcher),
            mode: Arc::new(config.mode),
            session: Arc::new(Mutex::new(SessionFolder::new())),
            tool_router: router::build_tool_router(),
        }
    }
}

const INSTRUCTIONS: &str = "rg-mcp searches file contents with ripgrep. Use 'search_files' for text/regex search and 'search_definitions' to find Python functions or classes by name. When the server was started without a folder, call 'set_search_path' with an absolute directory first; 'get_search_path' shows the active folder.";

#[tool_handler]
impl ServerHandler for RgMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
