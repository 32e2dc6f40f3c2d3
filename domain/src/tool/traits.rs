//! Tool domain traits
//!
//! Argument validation runs before any request leaves the gateway.
//! The async execution seam (`ToolGroup`) lives in the application layer.

use super::entities::{ToolCall, ToolDefinition};
use serde_json::Value;

/// Validator for tool calls
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Checks required parameters, rejects unknown ones and
/// verifies the JSON type of integer and boolean arguments.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            if param.required && call.get(&param.name).is_none() {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, definition.name
                ));
            }
        }

        for (arg_name, value) in &call.arguments {
            let Some(param) = definition.parameters.iter().find(|p| &p.name == arg_name) else {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            };

            if value.is_null() {
                continue;
            }

            let type_ok = match param.param_type.as_str() {
                "integer" => call.get_i64(arg_name).is_some(),
                "boolean" => call.get_bool(arg_name).is_some(),
                "object" => matches!(value, Value::Object(_)),
                "array" => matches!(value, Value::Array(_)),
                _ => true,
            };
            if !type_ok {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be of type {}",
                    arg_name, definition.name, param.param_type
                ));
            }
        }

        Ok(())
    }
}
