use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFilesRequest {
    /// Pattern to search for (ripgrep regex syntax)
    #[schemars(description = "The search pattern (ripgrep regex syntax)")]
    pub pattern: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchDefinitionsRequest {
    /// Function or class name to find
    #[schemars(description = "The name of the Python function or class to search for")]
    pub name: String,
}
