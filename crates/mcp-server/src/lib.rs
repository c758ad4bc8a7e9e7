//! rg-mcp Server
//!
//! Exposes ripgrep text search to AI agents via the MCP protocol.
//!
//! ## Tools
//!
//! - `search_files` - Search file contents for a pattern
//! - `search_definitions` - Find Python function/class definitions by name
//! - `set_search_path` - Choose the search folder for this session
//! - `get_search_path` - Show the active mode and folder
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "rg": {
//!       "command": "rg-mcp",
//!       "args": ["/path/to/project"]
//!     }
//!   }
//! }
//! ```
//!
//! Omit the folder to let the client pick one with `set_search_path`, or pass
//! `--follow-editor` to search whatever folder VS Code has open.

use anyhow::Result;
use clap::Parser;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod config;
mod tools;

pub use config::{RootMode, ServerArgs, ServerConfig};
pub use tools::RgMcpService;

pub async fn main_entry() -> Result<()> {
    // Logging goes to stderr only; stdout carries the MCP protocol.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = ServerArgs::parse();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    };

    log::info!("Starting rg-mcp server ({} mode)", config.mode.label());

    let service = RgMcpService::new(config);
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("rg-mcp server stopped");
    Ok(())
}
