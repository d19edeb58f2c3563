//! Core types for the orchestrator bridge

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tool as advertised by the orchestrator's `/list-tools` endpoint
///
/// Only `name` is mandatory; missing fields are defaulted when the tool is
/// re-published over MCP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique tool identifier
    pub name: String,
    /// Human-readable description (may be absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON schema describing the call arguments (may be absent)
    #[serde(
        default,
        rename = "inputSchema",
        skip_serializing_if = "Option::is_none"
    )]
    pub input_schema: Option<serde_json::Value>,
}

impl ToolDescriptor {
    /// Create a descriptor with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set input schema
    pub fn with_input_schema(mut self, schema: serde_json::Value) -> Self {
        self.input_schema = Some(schema);
        self
    }
}

/// Body returned by `GET /list-tools`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolListResponse {
    #[serde(default)]
    pub tools: Option<Vec<ToolDescriptor>>,
}

impl ToolListResponse {
    /// Tools in orchestrator order; an absent or null `tools` field is empty
    pub fn into_tools(self) -> Vec<ToolDescriptor> {
        self.tools.unwrap_or_default()
    }
}

/// Body sent to `POST /call-tool`
#[derive(Debug, Clone, Serialize)]
pub struct ToolInvocation<'a> {
    pub name: &'a str,
    pub arguments: &'a serde_json::Value,
}

/// Outcome of forwarding a tool call, before it is wrapped in an MCP result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// Rendered orchestrator result
    Success(String),
    /// Error message from the failed call
    Failure(String),
}

impl InvocationOutcome {
    /// Build a success outcome from the orchestrator's raw JSON result
    pub fn from_result(result: &serde_json::Value) -> Self {
        Self::Success(render_result(result))
    }

    /// Build a failure outcome from a bridge error
    pub fn from_error(error: &BridgeError) -> Self {
        Self::Failure(error.to_string())
    }

    /// Whether the MCP result should carry `isError: true`
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Text placed in the single MCP content block
    pub fn text(&self) -> String {
        match self {
            Self::Success(text) => text.clone(),
            Self::Failure(message) => format!("Error: {}", message),
        }
    }
}

/// Render an orchestrator result as text
///
/// Bare strings pass through verbatim; anything else is pretty-printed JSON.
pub fn render_result(result: &serde_json::Value) -> String {
    match result {
        serde_json::Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Errors that can occur while bridging
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Orchestrator answered with a non-success status
    #[error("{context}: {status}")]
    UpstreamHttp { context: &'static str, status: String },

    /// Orchestrator unreachable or its response could not be decoded
    #[error("{0}")]
    UpstreamTransport(String),

    #[error("Failed to start MCP transport: {0}")]
    Startup(String),

    #[error("MCP service terminated abnormally: {0}")]
    Service(String),

    #[error("Invalid orchestrator URL '{url}': {reason}")]
    InvalidConfig { url: String, reason: String },
}

impl From<reqwest::Error> for BridgeError {
    fn from(e: reqwest::Error) -> Self {
        BridgeError::UpstreamTransport(error_chain(&e))
    }
}

/// Join an error's message with every `source()` below it
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_missing_fields() {
        let tool: ToolDescriptor = serde_json::from_value(json!({"name": "ping"})).unwrap();
        assert_eq!(tool.name, "ping");
        assert!(tool.description.is_none());
        assert!(tool.input_schema.is_none());
    }

    #[test]
    fn test_descriptor_null_schema_is_absent() {
        let tool: ToolDescriptor =
            serde_json::from_value(json!({"name": "ping", "inputSchema": null})).unwrap();
        assert!(tool.input_schema.is_none());
    }

    #[test]
    fn test_list_response_without_tools() {
        let body: ToolListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(body.into_tools().is_empty());

        let body: ToolListResponse = serde_json::from_value(json!({"tools": null})).unwrap();
        assert!(body.into_tools().is_empty());
    }

    #[test]
    fn test_invocation_body_shape() {
        let args = json!({"host": "example.com"});
        let body = ToolInvocation {
            name: "ping",
            arguments: &args,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "ping", "arguments": {"host": "example.com"}})
        );
    }

    #[test]
    fn test_render_string_verbatim() {
        assert_eq!(render_result(&json!("done")), "done");
    }

    #[test]
    fn test_render_object_pretty() {
        let rendered = render_result(&json!({"result": 42}));
        assert_eq!(rendered, "{\n  \"result\": 42\n}");
    }

    #[test]
    fn test_outcome_failure_text() {
        let err = BridgeError::UpstreamTransport("timeout".to_string());
        let outcome = InvocationOutcome::from_error(&err);
        assert!(outcome.is_error());
        assert_eq!(outcome.text(), "Error: timeout");
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("tcp connect error")]
    struct Middle(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        let err = Outer(Middle(io));
        assert_eq!(
            error_chain(&err),
            "error sending request: tcp connect error: Connection refused"
        );
    }

    #[test]
    fn test_error_chain_skips_repeated_cause() {
        #[derive(Debug, Error)]
        #[error("decode failed: bad json")]
        struct Wrapper(#[source] std::io::Error);

        let err = Wrapper(std::io::Error::other("bad json"));
        assert_eq!(error_chain(&err), "decode failed: bad json");
    }

    #[test]
    fn test_http_error_message() {
        let err = BridgeError::UpstreamHttp {
            context: "Orchestrator call failed",
            status: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Orchestrator call failed: Internal Server Error");
    }
}
