use anyhow::Result;
use nws_weather_mcp::{logging, Weather};
use rmcp::ServiceExt;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting NWS weather MCP server");

    let service = Weather::new()?.serve(rmcp::transport::stdio()).await?;
    let reason = service.waiting().await?;

    tracing::info!(?reason, "Server stopped");
    Ok(())
}
