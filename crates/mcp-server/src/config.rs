use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use rg_mcp_search::{
    validate_folder, RgLocator, SearchLimits, Searcher, DEFAULT_DEFINITION_MAX_LINES,
    DEFAULT_MAX_LINES,
};
use rg_mcp_workspace::{strip_verbatim_prefix, ResolverChain, WindowStateStore};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "rg-mcp")]
#[command(about = "MCP server using ripgrep to search content in a folder", long_about = None)]
#[command(version)]
pub struct ServerArgs {
    /// Folder to search in; fixes the search root for the lifetime of the server
    #[arg(value_name = "FOLDER", conflicts_with = "follow_editor")]
    pub folder: Option<PathBuf>,

    /// Search the folder open in the active VS Code window (re-detected on every call)
    #[arg(long)]
    pub follow_editor: bool,

    /// ripgrep executable (overrides RG_MCP_RG_PATH)
    #[arg(long, value_name = "PATH")]
    pub rg: Option<PathBuf>,

    /// Line cap for search_files output
    #[arg(long, default_value_t = DEFAULT_MAX_LINES, value_parser = parse_line_cap)]
    pub max_lines: usize,

    /// Line cap for search_definitions output
    #[arg(long, default_value_t = DEFAULT_DEFINITION_MAX_LINES, value_parser = parse_line_cap)]
    pub definition_max_lines: usize,

    /// Window state file used as fallback with --follow-editor (overrides RG_MCP_WINDOW_STATE)
    #[arg(long, value_name = "PATH")]
    pub window_state: Option<PathBuf>,
}

fn parse_line_cap(raw: &str) -> std::result::Result<usize, String> {
    let value: usize = raw
        .parse()
        .map_err(|err| format!("'{raw}' is not a line count: {err}"))?;
    if value == 0 {
        return Err("line cap must be at least 1".to_string());
    }
    Ok(value)
}

/// Where the search folder comes from. Chosen once at startup.
pub enum RootMode {
    /// Folder given on the command line.
    Fixed(PathBuf),
    /// Folder chosen by the client through `set_search_path`.
    Session,
    /// Folder guessed from the editor before every search.
    FollowEditor(Arc<ResolverChain>),
}

impl RootMode {
    pub fn label(&self) -> &'static str {
        match self {
            RootMode::Fixed(_) => "fixed",
            RootMode::Session => "session",
            RootMode::FollowEditor(_) => "follow_editor",
        }
    }
}

pub struct ServerConfig {
    pub mode: RootMode,
    pub searcher: Searcher,
}

impl ServerArgs {
    pub fn into_config(self) -> Result<ServerConfig> {
        let mode = if let Some(folder) = self.folder {
            validate_folder(&folder).map_err(|err| anyhow::anyhow!("{err}"))?;
            let folder = folder
                .canonicalize()
                .with_context(|| format!("failed to resolve '{}'", folder.display()))?;
            RootMode::Fixed(strip_verbatim_prefix(folder))
        } else if self.follow_editor {
            let store = WindowStateStore::resolve(self.window_state)
                .context("failed to locate the window state file")?;
            log::debug!("window state file: {}", store.path().display());
            RootMode::FollowEditor(Arc::new(ResolverChain::follow_editor(store)))
        } else {
            RootMode::Session
        };

        let locator = RgLocator::from_env().with_explicit(self.rg);
        let limits = SearchLimits {
            max_lines: self.max_lines,
            definition_max_lines: self.definition_max_lines,
        };

        Ok(ServerConfig {
            mode,
            searcher: Searcher::new(locator, limits),
        })
    }
}
