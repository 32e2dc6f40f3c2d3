//! Tool domain entities

use crate::routing::matching::contains_keyword;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether a tool only reads, or changes state on the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolAccess {
    /// GET endpoints and local helpers
    Read,
    /// POST/PUT/DELETE endpoints; these usually answer with a task id
    Write,
}

impl ToolAccess {
    pub fn as_str(&self) -> &str {
        match self {
            ToolAccess::Read => "read",
            ToolAccess::Write => "write",
        }
    }

    pub fn may_create_task(&self) -> bool {
        matches!(self, ToolAccess::Write)
    }
}

impl std::fmt::Display for ToolAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool exposed to the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_device_list")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Read or write
    pub access: ToolAccess,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
    /// Lower-case phrases that suggest this tool for a free-text query
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// JSON type hint (e.g., "string", "integer", "boolean", "object")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, access: ToolAccess) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            access,
            parameters: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords
            .extend(keywords.into_iter().map(|k| k.into().to_lowercase()));
        self
    }

    /// Whether any keyword occurs in an already lower-cased query.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| contains_keyword(query_lower, k))
    }

    /// JSON schema of the arguments object.
    pub fn input_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for param in &self.parameters {
            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": param.param_type,
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(serde_json::Value::String(param.name.clone()));
            }
        }
        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Ordered catalogue of the tools in one group
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a tool; a later definition with the same name replaces the earlier one.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        match self.index.get(&tool.name) {
            Some(&pos) => self.tools[pos] = tool,
            None => {
                self.index.insert(tool.name.clone(), self.tools.len());
                self.tools.push(tool);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&pos| &self.tools[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Tools in registration order
    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tools whose keywords occur in the query, in registration order.
    pub fn analyze_query(&self, query: &str) -> Vec<&ToolDefinition> {
        let query = query.to_lowercase();
        self.tools
            .iter()
            .filter(|t| t.matches_query(&query))
            .collect()
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Build a call from a JSON object of arguments; anything else yields no arguments.
    pub fn from_json(tool_name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    /// Get an argument, treating JSON `null` as absent
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.arguments.get(key).filter(|v| !v.is_null())
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get an optional i64 argument; numeric strings are accepted
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        let value = self.get(key)?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
    }

    /// Get an optional u64 argument; numeric strings are accepted
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get_i64(key).and_then(|v| u64::try_from(v).ok())
    }

    /// Get an optional bool argument; "true"/"false" strings are accepted
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?;
        value.as_bool().or_else(|| match value.as_str()? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_access() {
        assert!(!ToolAccess::Read.may_create_task());
        assert!(ToolAccess::Write.may_create_task());
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("get_device_by_id", "Get device", ToolAccess::Read)
            .with_parameter(ToolParameter::new("id", "Device UUID", true))
            .with_keywords(["Device Details", "device info"]);

        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.keywords[0], "device details");
        assert!(tool.matches_query("show device details please"));
        assert!(!tool.matches_query("list sites"));
    }

    #[test]
    fn test_input_schema() {
        let tool = ToolDefinition::new("t", "d", ToolAccess::Read)
            .with_parameter(ToolParameter::new("id", "id", true))
            .with_parameter(ToolParameter::new("limit", "limit", false).with_type("integer"));

        let schema = tool.input_schema();
        assert_eq!(schema["properties"]["limit"]["type"], "integer");
        assert_eq!(schema["required"], json!(["id"]));
    }

    #[test]
    fn test_catalog_order_and_replace() {
        let catalog = ToolCatalog::new()
            .register(ToolDefinition::new("b", "first b", ToolAccess::Read))
            .register(ToolDefinition::new("a", "a", ToolAccess::Read))
            .register(ToolDefinition::new("b", "second b", ToolAccess::Write));

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(catalog.get("b").unwrap().description, "second b");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("c").is_none());
    }

    #[test]
    fn test_catalog_analyze_query() {
        let catalog = ToolCatalog::new()
            .register(
                ToolDefinition::new("get_device_list", "List", ToolAccess::Read)
                    .with_keywords(["devices", "inventory"]),
            )
            .register(
                ToolDefinition::new("get_device_health", "Health", ToolAccess::Read)
                    .with_keywords(["device health"]),
            );

        let hits: Vec<&str> = catalog
            .analyze_query("Show DEVICE HEALTH")
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(hits, vec!["get_device_health"]);
        assert!(catalog.analyze_query("nothing relevant").is_empty());
    }

    #[test]
    fn test_tool_call_accessors() {
        let call = ToolCall::from_json(
            "get_tasks",
            json!({"limit": "25", "offset": 2, "verbose": "true", "status": null, "id": ""}),
        );

        assert_eq!(call.get_i64("limit"), Some(25));
        assert_eq!(call.get_u64("offset"), Some(2));
        assert_eq!(call.get_bool("verbose"), Some(true));
        assert!(call.get("status").is_none());
        assert!(call.require_string("id").is_err());
        assert!(call.require_string("missing").is_err());
    }

    #[test]
    fn test_tool_call_from_non_object() {
        let call = ToolCall::from_json("x", json!([1, 2]));
        assert!(call.arguments.is_empty());
    }
}
