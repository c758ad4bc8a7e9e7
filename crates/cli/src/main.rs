use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rg-mcp-tracker")]
#[command(about = "Track the focused VS Code window and search the folder it has open", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all non-error logs
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Window state file (defaults to RG_MCP_WINDOW_STATE, then ~/vscode_window_config.json)
    #[arg(long, global = true, value_name = "PATH")]
    window_state: Option<PathBuf>,

    /// Explicit path to the rg executable
    #[arg(long, global = true, value_name = "PATH")]
    rg: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the active VS Code window and save it to the window state file
    Record,

    /// Print the folder the follow-editor mode would search
    Resolve {
        /// Emit {"path", "source"} as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a single search and print the same text the MCP tool returns
    Search {
        /// Pattern (or definition name with --definitions)
        pattern: String,

        /// Folder to search (defaults to the follow-editor resolution)
        #[arg(short, long, value_name = "DIR")]
        folder: Option<PathBuf>,

        /// Look for Python def/class definitions named PATTERN
        #[arg(long)]
        definitions: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let options = commands::GlobalOptions {
        window_state: cli.window_state,
        rg: cli.rg,
    };

    match cli.command {
        Commands::Record => commands::record(&options),
        Commands::Resolve { json } => commands::resolve(&options, json),
        Commands::Search {
            pattern,
            folder,
            definitions,
        } => {
            let ok = commands::search(&options, &pattern, folder, definitions).await?;
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
