//! Swap Asset Core MCP Server
//!
//! Exposes the asset registry, address validators, transfer detector and
//! transaction encoder over MCP stdio.

use rmcp::ServiceExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use swap_asset_core::{Config, SwapAssetServer, REGISTRY_VERSION};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stdout carries MCP frames)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!(registry_version = REGISTRY_VERSION, "Starting Swap Asset Core MCP Server");

    let server = SwapAssetServer::new(config)?;

    // Run with stdio transport
    let transport = rmcp::transport::stdio();
    let running = server.serve(transport).await?;

    running.waiting().await?;

    Ok(())
}
