//! MCP over stdin/stdout
//!
//! Newline-delimited JSON-RPC as framed by the pmcp stdio transport. The
//! server answers the `initialize` handshake itself and never replies to
//! notifications. Logs go to stderr, so stdout carries protocol traffic only.

use super::tools::GatewayTool;
use catc_application::RouteQueryUseCase;
use pmcp::server::builder::ServerCoreBuilder;
use pmcp::server::core::ServerCore;
use pmcp::{Server, ServerCapabilities};
use std::sync::Arc;
use tracing::info;

const SERVER_NAME: &str = "catc-gateway";

pub struct StdioServer {
    router: Arc<RouteQueryUseCase>,
}

impl StdioServer {
    pub fn new(router: Arc<RouteQueryUseCase>) -> Self {
        Self { router }
    }

    async fn tools(&self) -> pmcp::Result<Vec<GatewayTool>> {
        GatewayTool::all(&self.router)
            .await
            .map_err(|e| pmcp::Error::internal(e.to_string()))
    }

    /// Serve the process's stdin and stdout until stdin closes.
    pub async fn run(&self) -> pmcp::Result<()> {
        let tools = self.tools().await?;
        info!(tools = tools.len(), "MCP server listening on stdio");

        let builder = Server::builder()
            .name(SERVER_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .capabilities(ServerCapabilities::tools_only());
        let server = tools
            .into_iter()
            .fold(builder, |builder, tool| builder.tool(tool.name().to_string(), tool))
            .build()?;

        server.run_stdio().await?;
        info!("stdin closed, stopping MCP server");
        Ok(())
    }

    /// Transport-free protocol core carrying the same tools as [`run`](Self::run).
    pub async fn core(&self) -> pmcp::Result<ServerCore> {
        let tools = self.tools().await?;
        let builder = ServerCoreBuilder::new()
            .name(SERVER_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .capabilities(ServerCapabilities::tools_only());
        tools
            .into_iter()
            .fold(builder, |builder, tool| builder.tool(tool.name().to_string(), tool))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ROUTE_TOOL;
    use async_trait::async_trait;
    use catc_application::{GroupLoader, LoadError, ToolGroup};
    use catc_domain::{
        ToolAccess, ToolCall, ToolCatalog, ToolDefinition, ToolError, ToolParameter, ToolResult,
    };
    use pmcp::server::core::ProtocolHandler;
    use pmcp::types::jsonrpc::{JSONRPCError, ResponsePayload};
    use pmcp::types::{CallToolResult, ClientRequest, Content, ListToolsResult, Request, RequestId};
    use serde_json::{Value, json};

    struct EchoGroup {
        catalog: ToolCatalog,
    }

    impl EchoGroup {
        fn new() -> Self {
            Self {
                catalog: ToolCatalog::new()
                    .register(
                        ToolDefinition::new(
                            "get_sites",
                            "Get the site hierarchy.",
                            ToolAccess::Read,
                        )
                        .with_parameter(ToolParameter::new("name", "Site name", false))
                        .with_keywords(["site"]),
                    )
                    .register(
                        ToolDefinition::new("create_site", "Create a site.", ToolAccess::Write)
                            .with_parameter(ToolParameter::new("name", "Site name", true)),
                    ),
            }
        }
    }

    #[async_trait]
    impl ToolGroup for EchoGroup {
        fn id(&self) -> &str {
            "sda"
        }

        fn catalog(&self) -> &ToolCatalog {
            &self.catalog
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            match call.tool_name.as_str() {
                "get_sites" => {
                    ToolResult::success(&call.tool_name, json!({ "echo": call.get_string("name") }))
                }
                _ => ToolResult::failure(&call.tool_name, ToolError::not_connected()),
            }
        }
    }

    struct SdaOnly;

    #[async_trait]
    impl GroupLoader for SdaOnly {
        fn group_names(&self) -> Vec<String> {
            vec!["sda".to_string()]
        }

        async fn load(&self, group: &str) -> Result<Arc<dyn ToolGroup>, LoadError> {
            match group {
                "sda" => Ok(Arc::new(EchoGroup::new())),
                other => Err(LoadError::UnknownGroup(other.to_string())),
            }
        }
    }

    fn router() -> Arc<RouteQueryUseCase> {
        Arc::new(RouteQueryUseCase::new(Arc::new(SdaOnly)))
    }

    fn client_request(method: &str, params: Value) -> Request {
        let request: ClientRequest =
            serde_json::from_value(json!({ "method": method, "params": params })).unwrap();
        Request::Client(Box::new(request))
    }

    async fn send(core: &ServerCore, id: i64, method: &str, params: Value) -> ResponsePayload<Value, JSONRPCError> {
        core.handle_request(RequestId::from(id), client_request(method, params), None)
            .await
            .payload
    }

    /// A core that has completed the `initialize` handshake.
    async fn initialized_core() -> ServerCore {
        let core = StdioServer::new(router()).core().await.unwrap();
        let payload = send(
            &core,
            1,
            "initialize",
            json!({
                "protocolVersion": "2025-06-18",
                "capabilities": {},
                "clientInfo": { "name": "test-client", "version": "1.0.0" }
            }),
        )
        .await;

        match payload {
            ResponsePayload::Result(result) => {
                assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
                assert!(result["capabilities"]["tools"].is_object());
            }
            ResponsePayload::Error(e) => panic!("initialize failed: {}", e.message),
        }
        core
    }

    fn call_text(payload: ResponsePayload<Value, JSONRPCError>) -> Value {
        let ResponsePayload::Result(result) = payload else {
            panic!("expected a result");
        };
        let result: CallToolResult = serde_json::from_value(result).unwrap();
        assert!(!result.is_error);
        match &result.content[0] {
            Content::Text { text, .. } => serde_json::from_str(text).unwrap(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_every_catalog_tool_and_route_tool_are_listed() {
        let core = initialized_core().await;

        let ResponsePayload::Result(result) = send(&core, 2, "tools/list", json!({})).await else {
            panic!("tools/list failed");
        };
        let listed: ListToolsResult = serde_json::from_value(result).unwrap();
        let mut names: Vec<&str> = listed.tools.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["create_site", "get_sites", ROUTE_TOOL]);

        let get_sites = listed.tools.iter().find(|t| t.name == "get_sites").unwrap();
        assert_eq!(get_sites.description.as_deref(), Some("[sda] Get the site hierarchy."));
        assert_eq!(get_sites.input_schema["properties"]["name"]["type"], "string");
        let annotations = get_sites.annotations.as_ref().unwrap();
        assert_eq!(annotations.read_only_hint, Some(true));
    }

    #[tokio::test]
    async fn test_tools_call_invokes_catalog_tool() {
        let core = initialized_core().await;
        let payload = send(
            &core,
            3,
            "tools/call",
            json!({ "name": "get_sites", "arguments": { "name": "Global" } }),
        )
        .await;

        assert_eq!(call_text(payload), json!({ "echo": "Global" }));
    }

    #[tokio::test]
    async fn test_tools_call_validation_failure_is_an_error() {
        let core = initialized_core().await;
        let payload = send(
            &core,
            4,
            "tools/call",
            json!({ "name": "create_site", "arguments": {} }),
        )
        .await;

        let ResponsePayload::Error(error) = payload else {
            panic!("missing argument accepted");
        };
        assert!(error.message.contains("name"));
    }

    #[tokio::test]
    async fn test_route_tool_answers_free_text() {
        let core = initialized_core().await;
        let payload = send(
            &core,
            5,
            "tools/call",
            json!({ "name": ROUTE_TOOL, "arguments": { "query": "list fabric site" } }),
        )
        .await;

        let body = call_text(payload);
        assert_eq!(body["domain"], "sda");
        assert_eq!(body["group"], "sda");
        assert!(body["answer"].as_str().unwrap().contains("get_sites"));
    }

    #[tokio::test]
    async fn test_route_tool_requires_query() {
        let tools = GatewayTool::all(&router()).await.unwrap();
        let route = tools.iter().find(|t| t.name() == ROUTE_TOOL).unwrap();
        assert!(route.call(json!({ "query": "  " })).await.is_err());
    }

    #[tokio::test]
    async fn test_tool_missing_from_catalog_is_rejected() {
        let tool = GatewayTool::catalog(
            router(),
            "sda",
            ToolDefinition::new("delete_site", "Delete a site.", ToolAccess::Write),
        );
        let err = tool.call(json!({})).await.unwrap_err();
        assert!(err.to_string().contains("Unknown tool"));
    }
}
