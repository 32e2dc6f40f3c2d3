//! Data-driven REST endpoint tools
//!
//! Each [`Endpoint`] describes one Catalyst Center operation: method, path
//! template, and where every argument goes. The same description yields the
//! tool's [`ToolDefinition`] and turns a [`ToolCall`] into an [`ApiRequest`].
//!
//! Path templates use `{name}` placeholders filled from the argument of the
//! same name.

use catc_application::{ApiRequest, HttpMethod};
use catc_domain::tool::{ToolAccess, ToolCall, ToolDefinition, ToolError, ToolParameter};
use catc_domain::util::is_path_segment;
use serde_json::Value;

/// Argument name for write tools that should be followed to completion
pub const MONITOR_ARG: &str = "monitor";
/// Argument name overriding the wait budget of a monitored call
pub const MAX_WAIT_ARG: &str = "max_wait_seconds";
/// Argument name of the request body
pub const PAYLOAD_ARG: &str = "payload";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone)]
pub struct EndpointParam {
    /// Tool argument name
    pub name: &'static str,
    /// Name on the wire (query key); same as `name` for path params
    pub api_name: &'static str,
    pub location: ParamLocation,
    pub required: bool,
    pub param_type: &'static str,
    pub description: &'static str,
}

/// One REST operation exposed as a tool
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub params: Vec<EndpointParam>,
    pub keywords: Vec<&'static str>,
}

impl Endpoint {
    pub fn new(
        method: HttpMethod,
        name: &'static str,
        path: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            method,
            path,
            params: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn get(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Get, name, path, description)
    }

    pub fn post(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Post, name, path, description)
    }

    pub fn put(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Put, name, path, description)
    }

    pub fn delete(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Delete, name, path, description)
    }

    fn param(
        mut self,
        name: &'static str,
        api_name: &'static str,
        location: ParamLocation,
        required: bool,
        param_type: &'static str,
        description: &'static str,
    ) -> Self {
        self.params.push(EndpointParam {
            name,
            api_name,
            location,
            required,
            param_type,
            description,
        });
        self
    }

    /// Required `{name}` segment of the path template
    pub fn path_param(self, name: &'static str, description: &'static str) -> Self {
        self.param(name, name, ParamLocation::Path, true, "string", description)
    }

    /// Optional string query parameter
    pub fn query(self, name: &'static str, api_name: &'static str, description: &'static str) -> Self {
        self.param(name, api_name, ParamLocation::Query, false, "string", description)
    }

    /// Required string query parameter
    pub fn required_query(
        self,
        name: &'static str,
        api_name: &'static str,
        description: &'static str,
    ) -> Self {
        self.param(name, api_name, ParamLocation::Query, true, "string", description)
    }

    /// Optional integer query parameter
    pub fn int_query(
        self,
        name: &'static str,
        api_name: &'static str,
        description: &'static str,
    ) -> Self {
        self.param(name, api_name, ParamLocation::Query, false, "integer", description)
    }

    /// Optional boolean query parameter
    pub fn bool_query(
        self,
        name: &'static str,
        api_name: &'static str,
        description: &'static str,
    ) -> Self {
        self.param(name, api_name, ParamLocation::Query, false, "boolean", description)
    }

    /// `offset` and `limit` paging parameters
    pub fn paged(self) -> Self {
        self.int_query("offset", "offset", "First record to return, numbered from 1")
            .int_query("limit", "limit", "Number of records to return")
    }

    /// Required JSON body, passed as the `payload` argument
    pub fn body(self, param_type: &'static str, description: &'static str) -> Self {
        self.param(PAYLOAD_ARG, PAYLOAD_ARG, ParamLocation::Body, true, param_type, description)
    }

    pub fn keywords(mut self, keywords: &[&'static str]) -> Self {
        self.keywords.extend_from_slice(keywords);
        self
    }

    pub fn access(&self) -> ToolAccess {
        match self.method {
            HttpMethod::Get => ToolAccess::Read,
            _ => ToolAccess::Write,
        }
    }

    /// Tool definition; write tools also accept the monitoring arguments.
    pub fn definition(&self) -> ToolDefinition {
        let mut definition = ToolDefinition::new(self.name, self.description, self.access())
            .with_keywords(self.keywords.iter().copied());

        for param in &self.params {
            definition = definition.with_parameter(
                ToolParameter::new(param.name, param.description, param.required)
                    .with_type(param.param_type),
            );
        }

        if self.access().may_create_task() {
            definition = definition
                .with_parameter(
                    ToolParameter::new(
                        MONITOR_ARG,
                        "Wait for the task started by this call and return its summary",
                        false,
                    )
                    .with_type("boolean"),
                )
                .with_parameter(
                    ToolParameter::new(MAX_WAIT_ARG, "Maximum seconds to wait when monitoring", false)
                        .with_type("integer"),
                );
        }

        definition
    }

    /// Build the HTTP request for a call.
    pub fn build_request(&self, call: &ToolCall) -> Result<ApiRequest, ToolError> {
        let mut path = self.path.to_string();
        let mut request_query = Vec::new();
        let mut body = None;

        for param in &self.params {
            let Some(value) = call.get(param.name) else {
                if param.required {
                    return Err(ToolError::invalid_argument(format!(
                        "Missing required argument: {}",
                        param.name
                    )));
                }
                continue;
            };

            match param.location {
                ParamLocation::Path => {
                    let segment = scalar_string(value).ok_or_else(|| {
                        ToolError::invalid_argument(format!("{} must be a string", param.name))
                    })?;
                    if !is_path_segment(&segment) {
                        return Err(ToolError::invalid_argument(format!(
                            "{} is not a valid path segment: {:?}",
                            param.name, segment
                        )));
                    }
                    path = path.replace(&format!("{{{}}}", param.name), &segment);
                }
                ParamLocation::Query => {
                    let rendered = query_string(value).ok_or_else(|| {
                        ToolError::invalid_argument(format!(
                            "{} must be a scalar or a list of scalars",
                            param.name
                        ))
                    })?;
                    request_query.push((param.api_name.to_string(), rendered));
                }
                ParamLocation::Body => body = Some(value.clone()),
            }
        }

        let mut request = ApiRequest::new(self.method, path).with_query_pairs(request_query);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        Ok(request)
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Scalars as-is; lists comma-joined.
fn query_string(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(scalar_string)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(",")),
        other => scalar_string(other),
    }
}
