//! MCP (Model Context Protocol) server implementation
//!
//! This module provides a stdio-based MCP server using the official `rmcp` SDK.
//! It exposes the remote orchestrator's tools to AI clients.

mod server;

pub use server::{BridgeService, SERVER_NAME, default_input_schema, to_mcp_tool};
