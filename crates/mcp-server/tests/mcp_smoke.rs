mod support;

use anyhow::{Context, Result};
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;
use support::{call, rg_available, rg_mcp_command, start_server, text};

#[tokio::test]
async fn exposes_search_tools() -> Result<()> {
    let service = start_server(rg_mcp_command(&[])?).await?;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "search_files",
        "search_definitions",
        "set_search_path",
        "get_search_path",
    ] {
        assert!(
            names.contains(expected),
            "missing tool '{expected}' (available: {names:?})"
        );
    }

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn session_mode_requires_set_path_then_searches() -> Result<()> {
    let service = start_server(rg_mcp_command(&[])?).await?;

    let tmp = tempfile::tempdir().context("tempdir")?;
    std::fs::create_dir_all(tmp.path().join("src")).context("mkdir src")?;
    std::fs::write(
        tmp.path().join("src").join("main.rs"),
        "fn main() {\n    println!(\"session_marker\");\n}\n",
    )
    .context("write main.rs")?;

    let before = call(&service, "search_files", json!({ "pattern": "session_marker" })).await?;
    assert_eq!(before.is_error, Some(true));
    assert!(text(&before).contains("call set_search_path"), "{}", text(&before));

    let relative = call(&service, "set_search_path", json!({ "path": "src" })).await?;
    assert_eq!(relative.is_error, Some(true));

    let set = call(
        &service,
        "set_search_path",
        json!({ "path": tmp.path().to_string_lossy() }),
    )
    .await?;
    assert_ne!(set.is_error, Some(true), "{}", text(&set));
    assert!(text(&set).starts_with("Search path set to: "));

    let after = call(&service, "search_files", json!({ "pattern": "session_marker" })).await?;
    assert!(!text(&after).contains("call set_search_path"));
    if rg_available() {
        assert_ne!(after.is_error, Some(true), "{}", text(&after));
        let body = text(&after);
        assert!(body.contains("main.rs"), "{body}");
        assert!(body.contains("2:    println!(\"session_marker\");"), "{body}");
    }

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn fixed_mode_searches_startup_folder() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    std::fs::write(
        tmp.path().join("app.py"),
        "class Service:\n    def start(self):\n        pass\n\nstart()\n",
    )
    .context("write app.py")?;

    let folder = tmp.path().to_string_lossy().to_string();
    let service = start_server(rg_mcp_command(&[&folder])?).await?;

    let path = call(&service, "get_search_path", json!({})).await?;
    assert!(text(&path).starts_with("mode: fixed\n"), "{}", text(&path));

    let refused = call(&service, "set_search_path", json!({ "path": folder })).await?;
    assert_eq!(refused.is_error, Some(true));

    if rg_available() {
        let defs = call(&service, "search_definitions", json!({ "name": "start" })).await?;
        let body = text(&defs);
        assert!(body.starts_with("Python definition search completed in "), "{body}");
        assert!(body.contains("2:    def start(self):"), "{body}");
        assert!(!body.contains("5:start()"), "{body}");

        let none = call(&service, "search_files", json!({ "pattern": "zz_not_there" })).await?;
        assert!(text(&none).ends_with("No matches found"));
    }

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[cfg(not(windows))]
#[tokio::test]
async fn follow_editor_falls_back_to_recorded_window() -> Result<()> {
    let project = tempfile::tempdir().context("tempdir")?;
    let state_dir = tempfile::tempdir().context("tempdir")?;
    let state = state_dir.path().join("window.json");
    std::fs::write(
        &state,
        serde_json::to_vec_pretty(&json!({
            "last_updated": "2024-05-01T10:00:00.000001",
            "vscode_window": {
                "window_title": format!("{} - Visual Studio Code", project.path().display()),
                "process_name": "code",
                "exe_path": "/usr/bin/code",
                "pid": 1
            },
            "history": []
        }))?,
    )
    .context("write window state")?;

    let state_arg = state.to_string_lossy().to_string();
    let service = start_server(rg_mcp_command(&[
        "--follow-editor",
        "--window-state",
        &state_arg,
    ])?)
    .await?;

    let path = call(&service, "get_search_path", json!({})).await?;
    let body = text(&path);
    assert!(body.starts_with("mode: follow_editor\n"), "{body}");
    assert!(
        body.contains(&format!("{} (via window_state_file)", project.path().display())),
        "{body}"
    );

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}
