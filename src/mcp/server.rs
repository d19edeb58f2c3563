//! MCP Server implementation using the official rmcp SDK
//!
//! Republishes the orchestrator's tools over MCP and forwards calls to it.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
};
use serde_json::Value;
use tracing::{error, info};

use crate::cache::ToolCatalog;
use crate::client::{Orchestrator, OrchestratorClient};
use crate::config::BridgeConfig;
use crate::types::{InvocationOutcome, ToolDescriptor};

pub const SERVER_NAME: &str = "mcp-orchestrator-bridge";

// ============================================================================
// Descriptor mapping
// ============================================================================

/// Schema advertised for tools that do not declare one
pub fn default_input_schema() -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(JsonObject::new()));
    schema
}

/// Convert an orchestrator descriptor into an MCP tool listing entry
pub fn to_mcp_tool(descriptor: &ToolDescriptor) -> Tool {
    let input_schema = match &descriptor.input_schema {
        Some(Value::Object(schema)) => schema.clone(),
        _ => default_input_schema(),
    };

    Tool::new(
        descriptor.name.clone(),
        descriptor.description.clone().unwrap_or_default(),
        Arc::new(input_schema),
    )
}

impl From<InvocationOutcome> for CallToolResult {
    fn from(outcome: InvocationOutcome) -> Self {
        let content = vec![Content::text(outcome.text())];
        if outcome.is_error() {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

// ============================================================================
// MCP Service
// ============================================================================

/// Orchestrator Bridge MCP Service
///
/// Every list and call request is answered with a well-formed result;
/// upstream failures never surface as protocol errors.
#[derive(Clone)]
pub struct BridgeService {
    orchestrator: Arc<dyn Orchestrator>,
    catalog: Arc<ToolCatalog>,
}

impl BridgeService {
    /// Wire a service to an orchestrator and a catalog that fetches from it
    pub fn new(orchestrator: Arc<dyn Orchestrator>, catalog: Arc<ToolCatalog>) -> Self {
        Self {
            orchestrator,
            catalog,
        }
    }

    /// Build the HTTP-backed service described by `config`
    pub fn from_config(config: &BridgeConfig) -> Self {
        let orchestrator: Arc<dyn Orchestrator> =
            Arc::new(OrchestratorClient::new(config.orchestrator_url.clone()));
        let catalog = Arc::new(ToolCatalog::with_ttl(
            Arc::clone(&orchestrator),
            config.cache_ttl,
        ));
        Self::new(orchestrator, catalog)
    }

    /// Enumerate tools in MCP shape
    pub async fn list_bridge_tools(&self) -> Vec<Tool> {
        self.catalog.get_tools().await.iter().map(to_mcp_tool).collect()
    }

    /// Forward a tool call to the orchestrator
    pub async fn invoke(&self, name: &str, arguments: Value) -> InvocationOutcome {
        info!("Calling tool: {}", name);

        match self.orchestrator.invoke_tool(name, &arguments).await {
            Ok(result) => InvocationOutcome::from_result(&result),
            Err(e) => {
                error!("Error calling tool {}: {}", name, e);
                InvocationOutcome::from_error(&e)
            }
        }
    }
}

impl ServerHandler for BridgeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                title: Some("MCP Orchestrator Bridge".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Bridges MCP tool calls to a remote HTTP tool orchestrator".to_string(),
            ),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move { Ok(ListToolsResult::with_all_items(self.list_bridge_tools().await)) }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let arguments = Value::Object(request.arguments.unwrap_or_default());
            let outcome = self.invoke(&request.name, arguments).await;
            Ok(outcome.into())
        }
    }
}
