use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema, Default)]
pub struct GetSearchPathRequest {}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetSearchPathRequest {
    /// Absolute path of an existing directory.
    #[schemars(description = "Absolute path of the directory to search in")]
    pub path: String,
}
