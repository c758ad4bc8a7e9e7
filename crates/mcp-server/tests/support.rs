#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RoleClient, RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;

pub fn locate_rg_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_rg-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/rg-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let name = format!("rg-mcp{}", std::env::consts::EXE_SUFFIX);
            let candidate = target_profile_dir.join(name);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    anyhow::bail!(
        "failed to locate rg-mcp binary; build with: cargo build -p rg-mcp --bin rg-mcp"
    )
}

pub fn rg_mcp_command(args: &[&str]) -> Result<Command> {
    let mut cmd = Command::new(locate_rg_mcp_bin()?);
    cmd.args(args);
    cmd.env("RUST_LOG", "warn");
    Ok(cmd)
}

pub async fn start_server(cmd: Command) -> Result<RunningService<RoleClient, ()>> {
    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("MCP handshake failed")
}

pub async fn call(
    service: &RunningService<RoleClient, ()>,
    tool: &str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        Duration::from_secs(30),
        service.call_tool(CallToolRequestParam {
            name: tool.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {tool}"))?
    .with_context(|| format!("call {tool}"))
}

pub fn text(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default()
}

pub fn rg_available() -> bool {
    which::which("rg").is_ok()
}
