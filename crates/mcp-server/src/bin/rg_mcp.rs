use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    rg_mcp::main_entry().await
}
