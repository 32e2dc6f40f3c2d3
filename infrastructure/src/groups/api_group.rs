//! Tool group backed by REST endpoints
//!
//! Every tool is an [`Endpoint`]; execution goes through the shared session.
//! Write tools called with `monitor=true` are handed to the task monitor and
//! answer with its text summary instead of the raw response.

use super::endpoint::{Endpoint, MAX_WAIT_ARG, MONITOR_ARG};
use super::tool_error;
use async_trait::async_trait;
use catc_application::{GroupCapability, SessionHandle, TaskMonitor, ToolGroup, suggest_tools};
use catc_domain::routing::matching::contains_keyword;
use catc_domain::tool::{ToolCall, ToolCatalog, ToolError, ToolResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Hand queries mentioning any of `keywords` to another group.
pub struct QueryForward {
    keywords: Vec<&'static str>,
    target: Arc<dyn ToolGroup>,
}

impl QueryForward {
    pub fn new(keywords: &[&'static str], target: Arc<dyn ToolGroup>) -> Self {
        Self {
            keywords: keywords.to_vec(),
            target,
        }
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| contains_keyword(query_lower, k))
    }
}

pub struct ApiToolGroup {
    id: String,
    catalog: ToolCatalog,
    endpoints: HashMap<&'static str, Endpoint>,
    session: SessionHandle,
    monitor: Arc<TaskMonitor>,
    forward: Option<QueryForward>,
}

impl ApiToolGroup {
    pub fn new(
        id: impl Into<String>,
        endpoints: Vec<Endpoint>,
        session: SessionHandle,
        monitor: Arc<TaskMonitor>,
    ) -> Self {
        let mut catalog = ToolCatalog::new();
        let mut by_name = HashMap::new();
        for endpoint in endpoints {
            catalog = catalog.register(endpoint.definition());
            by_name.insert(endpoint.name, endpoint);
        }

        Self {
            id: id.into(),
            catalog,
            endpoints: by_name,
            session,
            monitor,
            forward: None,
        }
    }

    pub fn with_forward(mut self, forward: QueryForward) -> Self {
        self.forward = Some(forward);
        self
    }

    pub fn endpoint(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.get(name)
    }
}

#[async_trait]
impl ToolGroup for ApiToolGroup {
    fn id(&self) -> &str {
        &self.id
    }

    fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    fn capability(&self) -> GroupCapability {
        GroupCapability::Basic
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(endpoint) = self.endpoints.get(call.tool_name.as_str()) else {
            return ToolResult::failure(&call.tool_name, ToolError::unknown_tool(&call.tool_name));
        };

        let transport = match self.session.require() {
            Ok(transport) => transport,
            Err(_) => return ToolResult::failure(endpoint.name, ToolError::not_connected()),
        };

        let request = match endpoint.build_request(call) {
            Ok(request) => request,
            Err(e) => return ToolResult::failure(endpoint.name, e),
        };
        debug!(
            tool = endpoint.name,
            method = %request.method,
            path = %request.path,
            "Calling endpoint"
        );

        let monitored =
            endpoint.access().may_create_task() && call.get_bool(MONITOR_ARG).unwrap_or(false);
        if monitored {
            let max_wait = call.get_u64(MAX_WAIT_ARG).map(Duration::from_secs);
            let text = self
                .monitor
                .execute_and_monitor(endpoint.name, transport.request(request), true, max_wait)
                .await;
            return ToolResult::text(endpoint.name, text);
        }

        match transport.request(request).await {
            Ok(value) => ToolResult::success(endpoint.name, value),
            Err(e) => ToolResult::failure(endpoint.name, tool_error(&e)),
        }
    }

    async fn process_request(&self, query: &str) -> String {
        if let Some(forward) = &self.forward
            && forward.matches(&query.to_lowercase())
        {
            debug!(from = %self.id, to = forward.target.id(), "Forwarding query");
            return forward.target.process_request(query).await;
        }

        match suggest_tools(&self.id, &self.catalog, query) {
            Some(answer) => answer,
            None => self.run_tools(query).await,
        }
    }
}
