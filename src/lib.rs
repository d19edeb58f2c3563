//! MCP Orchestrator Bridge - expose a remote HTTP tool orchestrator over MCP stdio
//!
//! Agent hosts speak MCP over stdin/stdout; the tools themselves live in a
//! separate orchestrator process reachable over HTTP. This crate sits in
//! between: it republishes the orchestrator's tool catalog and forwards every
//! tool call, turning upstream failures into well-formed MCP results.
//!
//! ## Components
//!
//! - **[`OrchestratorClient`]** - `GET /list-tools` and `POST /call-tool`
//! - **[`ToolCatalog`]** - TTL cache over the tool list (60s by default)
//! - **[`BridgeService`]** - rmcp `ServerHandler` implementing `tools/list`
//!   and `tools/call`
//!
//! ## Failure policy
//!
//! - A failed catalog refresh lists **no tools** for that request; the last
//!   good snapshot is not served once stale.
//! - A failed call returns a text block `Error: <message>` with `isError` set.
//!
//! ## Example
//!
//! ```ignore
//! use mcp_orchestrator_bridge::{BridgeConfig, BridgeService};
//! use rmcp::{transport::stdio, ServiceExt};
//!
//! let config = BridgeConfig::from_env()?;
//! let service = BridgeService::from_config(&config).serve(stdio()).await?;
//! service.waiting().await?;
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod mcp;
pub mod types;

// Re-export core types
pub use cache::{CatalogSnapshot, ToolCatalog};
pub use client::{Orchestrator, OrchestratorClient};
pub use config::{
    BridgeConfig, DEFAULT_CACHE_TTL_MS, DEFAULT_ORCHESTRATOR_URL, ORCHESTRATOR_URL_ENV,
};
pub use mcp::BridgeService;
pub use types::{BridgeError, InvocationOutcome, ToolDescriptor, render_result};
