//! MCP Server binary entry point
//!
//! Run with: ORCHESTRATOR_URL=http://host:3001 cargo run --bin mcp-orchestrator-bridge

use std::process::ExitCode;

use mcp_orchestrator_bridge::{BridgeConfig, BridgeError, BridgeService};
use rmcp::{ServiceExt, transport::stdio};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging to stderr (stdout is for MCP protocol)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BridgeError> {
    let config = BridgeConfig::from_env()?;

    let service = BridgeService::from_config(&config)
        .serve(stdio())
        .await
        .map_err(|e| BridgeError::Startup(e.to_string()))?;

    info!("MCP Orchestrator Bridge v{} started", env!("CARGO_PKG_VERSION"));
    info!("Connecting to orchestrator at: {}", config.orchestrator_url);

    // Wait for the client to close the transport
    service
        .waiting()
        .await
        .map_err(|e| BridgeError::Service(e.to_string()))?;

    info!("MCP server shutting down");
    Ok(())
}
