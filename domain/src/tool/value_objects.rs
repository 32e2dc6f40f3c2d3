//! Tool domain value objects: immutable result and error types
//!
//! Every tool invocation produces a [`ToolResult`]. Remote tools carry the
//! controller's JSON body as output; the task tools and the authentication
//! tools carry text. Failures carry a [`ToolError`] whose code tells the
//! front end whether retrying could help.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NOT_CONNECTED_MESSAGE: &str = "Not connected. Use connect() first.";

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `NOT_CONNECTED` | No active Catalyst Center session |
/// | `INVALID_ARGUMENT` | Missing or malformed argument |
/// | `NOT_FOUND` | Unknown tool or resource |
/// | `REMOTE_ERROR` | Controller answered with an error status |
/// | `EXECUTION_FAILED` | Transport or decoding failure |
/// | `TIMEOUT` | Operation timed out |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "NOT_CONNECTED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn not_connected() -> Self {
        Self::new("NOT_CONNECTED", NOT_CONNECTED_MESSAGE)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource.into()),
        )
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Unknown tool: {}", name.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::new(
            "REMOTE_ERROR",
            format!("HTTP {}: {}", status, message.into()),
        )
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            "TIMEOUT",
            format!("Operation timed out: {}", operation.into()),
        )
    }

    pub fn is_not_connected(&self) -> bool {
        self.code == "NOT_CONNECTED"
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution, carrying output or error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Wall-clock time spent in the tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    /// Create a successful result with a JSON body
    pub fn success(tool_name: impl Into<String>, output: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output),
            error: None,
            duration_ms: None,
        }
    }

    /// Create a successful result with text output
    pub fn text(tool_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::success(tool_name, Value::String(text.into()))
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&Value> {
        self.output.as_ref()
    }

    /// Text output, if the output is a JSON string
    pub fn output_text(&self) -> Option<&str> {
        self.output.as_ref().and_then(|v| v.as_str())
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// The value handed back to callers: the output on success, otherwise
    /// `{"error": "<message>"}`.
    pub fn to_json(&self) -> Value {
        match (&self.output, &self.error) {
            (Some(output), _) => output.clone(),
            (None, Some(err)) => serde_json::json!({ "error": err.message }),
            (None, None) => Value::Null,
        }
    }

    /// Human-readable rendering: text outputs as-is, JSON pretty-printed,
    /// failures as `Error: <message>`.
    pub fn render(&self) -> String {
        match (&self.output, &self.error) {
            (Some(Value::String(text)), _) => text.clone(),
            (Some(value), _) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            (None, Some(err)) => format!("Error: {}", err.message),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_error() {
        let err = ToolError::not_found("site-1").with_details("no such site");

        assert_eq!(err.code, "NOT_FOUND");
        assert!(err.message.contains("site-1"));
        assert_eq!(err.to_string(), "[NOT_FOUND] Resource not found: site-1 (no such site)");
    }

    #[test]
    fn test_not_connected() {
        let err = ToolError::not_connected();
        assert!(err.is_not_connected());
        assert_eq!(err.message, "Not connected. Use connect() first.");
    }

    #[test]
    fn test_success_to_json() {
        let result = ToolResult::success("get_sites", json!({"response": []}));

        assert!(result.is_success());
        assert_eq!(result.to_json(), json!({"response": []}));
        assert!(result.output_text().is_none());
    }

    #[test]
    fn test_failure_to_json() {
        let result = ToolResult::failure("get_sites", ToolError::not_connected());

        assert!(!result.is_success());
        assert_eq!(
            result.to_json(),
            json!({"error": "Not connected. Use connect() first."})
        );
        assert_eq!(result.render(), "Error: Not connected. Use connect() first.");
    }

    #[test]
    fn test_render_text() {
        let result = ToolResult::text("check_task_status", "Task ID: t1").with_duration(3);
        assert_eq!(result.render(), "Task ID: t1");
        assert_eq!(result.duration_ms, Some(3));
    }
}
