//! MCP tool handlers
//!
//! Catalogue tools run through [`RouteQueryUseCase::invoke`], so argument
//! validation and the lazy group cache apply exactly as in the shell.

use async_trait::async_trait;
use catc_application::{LoadError, RouteQueryUseCase};
use catc_domain::{ToolAccess, ToolCall, ToolDefinition, ToolResult};
use pmcp::types::{ToolAnnotations, ToolInfo};
use pmcp::{RequestHandlerExtra, ToolHandler};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

/// Name of the free-text tool answered by the domain router.
pub const ROUTE_TOOL: &str = "route_query";

enum ToolKind {
    Catalog {
        group: String,
        definition: ToolDefinition,
    },
    Route,
}

/// One tool published by the MCP server.
pub struct GatewayTool {
    router: Arc<RouteQueryUseCase>,
    kind: ToolKind,
}

impl GatewayTool {
    pub fn catalog(
        router: Arc<RouteQueryUseCase>,
        group: impl Into<String>,
        definition: ToolDefinition,
    ) -> Self {
        Self {
            router,
            kind: ToolKind::Catalog {
                group: group.into(),
                definition,
            },
        }
    }

    pub fn route(router: Arc<RouteQueryUseCase>) -> Self {
        Self {
            router,
            kind: ToolKind::Route,
        }
    }

    /// Every tool of every group, followed by the free-text tool.
    ///
    /// Loads all groups; a group that fails to load is left out by the
    /// router rather than failing the whole listing.
    pub async fn all(router: &Arc<RouteQueryUseCase>) -> Result<Vec<GatewayTool>, LoadError> {
        let groups = router.list_tools(None).await?;
        let mut tools: Vec<GatewayTool> = groups
            .into_iter()
            .flat_map(|group| {
                let name = group.group;
                group
                    .tools
                    .into_iter()
                    .map(move |definition| (name.clone(), definition))
            })
            .map(|(group, definition)| GatewayTool::catalog(router.clone(), group, definition))
            .collect();
        tools.push(GatewayTool::route(router.clone()));
        Ok(tools)
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            ToolKind::Catalog { definition, .. } => &definition.name,
            ToolKind::Route => ROUTE_TOOL,
        }
    }

    pub fn info(&self) -> ToolInfo {
        match &self.kind {
            ToolKind::Catalog { group, definition } => ToolInfo::with_annotations(
                definition.name.clone(),
                Some(format!("[{}] {}", group, definition.description)),
                definition.input_schema(),
                ToolAnnotations::new()
                    .with_read_only(definition.access == ToolAccess::Read)
                    .with_open_world(true),
            ),
            ToolKind::Route => ToolInfo::with_annotations(
                ROUTE_TOOL,
                Some(
                    "Answer a free-text Catalyst Center question by routing it to the \
                     matching tool group."
                        .to_string(),
                ),
                json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Question or command in plain language"
                        }
                    },
                    "required": ["query"]
                }),
                ToolAnnotations::new().with_open_world(true),
            ),
        }
    }

    pub async fn call(&self, args: Value) -> pmcp::Result<Value> {
        match &self.kind {
            ToolKind::Catalog { definition, .. } => {
                let call = ToolCall::from_json(definition.name.clone(), args);
                let result = self.router.invoke(&call).await;
                if result.is_success() {
                    Ok(result.to_json())
                } else {
                    Err(call_error(&result))
                }
            }
            ToolKind::Route => {
                let query = args
                    .get("query")
                    .and_then(Value::as_str)
                    .filter(|q| !q.trim().is_empty())
                    .ok_or_else(|| pmcp::Error::validation("Missing required argument: query"))?;
                let outcome = self.router.route_with_domain(query).await;
                debug!(domain = %outcome.domain, group = %outcome.group, "Routed MCP query");
                Ok(json!({
                    "domain": outcome.domain.as_str(),
                    "group": outcome.group,
                    "answer": outcome.answer,
                }))
            }
        }
    }
}

/// Caller mistakes become validation errors; everything else is internal.
fn call_error(result: &ToolResult) -> pmcp::Error {
    match result.error() {
        Some(err) if matches!(err.code.as_str(), "INVALID_ARGUMENT" | "NOT_FOUND") => {
            pmcp::Error::validation(err.message.clone())
        }
        Some(err) => pmcp::Error::internal(err.message.clone()),
        None => pmcp::Error::internal(format!("{} failed", result.tool_name)),
    }
}

#[async_trait]
impl ToolHandler for GatewayTool {
    async fn handle(&self, args: Value, _extra: RequestHandlerExtra) -> pmcp::Result<Value> {
        self.call(args).await
    }

    fn metadata(&self) -> Option<ToolInfo> {
        Some(self.info())
    }
}
