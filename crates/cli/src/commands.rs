use anyhow::{Context, Result};
use rg_mcp_search::{RgLocator, SearchLimits, SearchRequest, Searcher};
use rg_mcp_workspace::{
    detect_active_editor_window, platform_window_source, workspace_path_from_title,
    EditorMatcher, ResolverChain, WindowStateStore,
};
use serde::Serialize;
use std::path::PathBuf;

pub struct GlobalOptions {
    pub window_state: Option<PathBuf>,
    pub rg: Option<PathBuf>,
}

impl GlobalOptions {
    fn store(&self) -> Result<WindowStateStore> {
        WindowStateStore::resolve(self.window_state.clone())
            .context("Failed to locate the window state file")
    }
}

pub fn record(options: &GlobalOptions) -> Result<()> {
    let store = options.store()?;
    let source = platform_window_source();

    let Some(window) = detect_active_editor_window(source.as_ref(), &EditorMatcher::vscode())
    else {
        println!("No active VS Code window found.");
        println!("Make sure VS Code is running and its window is visible.");
        return Ok(());
    };

    println!("Found VS Code window: {}", window.window_title);
    println!("  process: {} (pid {})", window.process_name, window.pid);
    println!("  executable: {}", window.exe_path);
    match workspace_path_from_title(&window.window_title) {
        Some(path) => println!("  workspace: {}", path.display()),
        None => log::info!("window title does not name an existing folder"),
    }

    let state = store
        .record(&window)
        .with_context(|| format!("Failed to write {}", store.path().display()))?;
    println!(
        "Saved to {} ({} history entries)",
        store.path().display(),
        state.history.len()
    );
    Ok(())
}

#[derive(Serialize)]
struct ResolveOutput {
    path: String,
    source: &'static str,
}

pub fn resolve(options: &GlobalOptions, json: bool) -> Result<()> {
    let chain = ResolverChain::follow_editor(options.store()?);
    let resolved = chain
        .resolve_with_source()
        .context("No workspace folder could be determined")?;

    if json {
        let out = ResolveOutput {
            path: resolved.path.display().to_string(),
            source: resolved.source,
        };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", resolved.path.display());
    }
    Ok(())
}

/// Returns `false` when the search failed; the error text has already been printed.
pub async fn search(
    options: &GlobalOptions,
    pattern: &str,
    folder: Option<PathBuf>,
    definitions: bool,
) -> Result<bool> {
    let folder = match folder {
        Some(folder) => folder,
        None => {
            let chain = ResolverChain::follow_editor(options.store()?);
            chain
                .resolve_with_source()
                .map(|r| r.path)
                .context("No workspace folder could be determined")?
        }
    };
    log::debug!("searching {}", folder.display());

    let locator = RgLocator::from_env().with_explicit(options.rg.clone());
    let searcher = Searcher::new(locator, SearchLimits::default());
    let result = if definitions {
        searcher.search_definitions(pattern, &folder).await
    } else {
        searcher
            .search_files(&SearchRequest::new(pattern, folder))
            .await
    };

    match result {
        Ok(outcome) => {
            println!("{}", outcome.render());
            Ok(true)
        }
        Err(err) => {
            eprintln!("{}", err.render());
            Ok(false)
        }
    }
}
