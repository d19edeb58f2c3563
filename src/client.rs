//! HTTP client for the remote tool orchestrator

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::types::{BridgeError, ToolDescriptor, ToolInvocation, ToolListResponse};

/// The two operations the bridge needs from an orchestrator
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Fetch the orchestrator's current tool list
    async fn fetch_tool_list(&self) -> Result<Vec<ToolDescriptor>, BridgeError>;

    /// Invoke a tool and return its raw JSON result
    async fn invoke_tool(&self, name: &str, arguments: &Value) -> Result<Value, BridgeError>;
}

/// `Orchestrator` backed by the orchestrator's HTTP API
#[derive(Debug, Clone)]
pub struct OrchestratorClient {
    http: Client,
    base_url: String,
}

impl OrchestratorClient {
    /// Create a client for the given base URL. No request timeout is applied.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that reuses an existing `reqwest::Client`
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn check_status(response: Response, context: &'static str) -> Result<Response, BridgeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(BridgeError::UpstreamHttp {
        context,
        status: status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string()),
    })
}

#[async_trait]
impl Orchestrator for OrchestratorClient {
    async fn fetch_tool_list(&self) -> Result<Vec<ToolDescriptor>, BridgeError> {
        let response = self.http.get(self.endpoint("list-tools")).send().await?;
        let response = check_status(response, "Failed to fetch tools")?;
        let body: ToolListResponse = response.json().await?;
        Ok(body.into_tools())
    }

    async fn invoke_tool(&self, name: &str, arguments: &Value) -> Result<Value, BridgeError> {
        // `.json()` also sets `Content-Type: application/json`
        let response = self
            .http
            .post(self.endpoint("call-tool"))
            .json(&ToolInvocation { name, arguments })
            .send()
            .await?;
        let response = check_status(response, "Orchestrator call failed")?;
        Ok(response.json().await?)
    }
}
