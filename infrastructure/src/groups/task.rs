//! The `task` group
//!
//! Raw task lookups answer with the API's JSON; the monitoring tools answer
//! with the task monitor's text summaries.

use super::endpoint::Endpoint;
use super::tool_error;
use async_trait::async_trait;
use catc_application::{DEFAULT_FAILURE_LIMIT, PollParams, SessionHandle, TaskMonitor, ToolGroup};
use catc_domain::tool::{
    ToolAccess, ToolCall, ToolCatalog, ToolDefinition, ToolError, ToolParameter, ToolResult,
};
use catc_domain::{SortOrder, TaskQuery, TaskStatusFilter, is_valid_task_id};
use std::sync::Arc;
use std::time::Duration;

const TASK_TREE_TOOL: &str = "get_task_tree";

pub struct TaskToolGroup {
    catalog: ToolCatalog,
    monitor: Arc<TaskMonitor>,
    session: SessionHandle,
    tree: Endpoint,
}

fn task_id_param() -> ToolParameter {
    ToolParameter::new("task_id", "Task UUID", true)
}

/// Filters shared by `get_tasks` and `get_task_count`.
fn with_filters(mut definition: ToolDefinition) -> ToolDefinition {
    for param in [
        ToolParameter::new("status", "PENDING, FAILURE or SUCCESS", false),
        ToolParameter::new("parent_id", "Only tasks with this parent", false),
        ToolParameter::new("root_id", "Only tasks with this root", false),
        ToolParameter::new("start_time", "Start time, epoch milliseconds", false).with_type("integer"),
        ToolParameter::new("end_time", "End time, epoch milliseconds", false).with_type("integer"),
    ] {
        definition = definition.with_parameter(param);
    }
    definition
}

impl TaskToolGroup {
    pub fn new(session: SessionHandle, monitor: Arc<TaskMonitor>) -> Self {
        let tree = Endpoint::get(
            TASK_TREE_TOOL,
            "/dna/intent/api/v1/task/{task_id}/tree",
            "Get a task together with all of its subtasks.",
        )
        .path_param("task_id", "Root task UUID")
        .keywords(&["task tree", "subtasks"]);

        let get_tasks = with_filters(
            ToolDefinition::new(
                "get_tasks",
                "List tasks, filtered by status, parent, root or time range.",
                ToolAccess::Read,
            )
            .with_keywords(["list tasks", "tasks", "task list"]),
        )
        .with_parameter(ToolParameter::new("offset", "First record, numbered from 1", false).with_type("integer"))
        .with_parameter(ToolParameter::new("limit", "Records per page, 1 to 500", false).with_type("integer"))
        .with_parameter(ToolParameter::new("sort_by", "Property to sort by", false))
        .with_parameter(ToolParameter::new("order", "asc or desc", false));

        let catalog = ToolCatalog::new()
            .register(
                ToolDefinition::new("get_task_by_id", "Get the raw record of one task.", ToolAccess::Read)
                    .with_parameter(task_id_param())
                    .with_keywords(["task by id", "task details", "task info"]),
            )
            .register(get_tasks)
            .register(
                with_filters(ToolDefinition::new(
                    "get_task_count",
                    "Count tasks matching the filters.",
                    ToolAccess::Read,
                ))
                .with_keywords(["task count", "number of tasks"]),
            )
            .register(tree.definition())
            .register(
                ToolDefinition::new(
                    "check_task_status",
                    "Look a task up once and summarise its status, progress and errors.",
                    ToolAccess::Read,
                )
                .with_parameter(task_id_param())
                .with_keywords(["task status", "check task", "status of task"]),
            )
            .register(
                ToolDefinition::new(
                    "wait_for_task_completion",
                    "Poll a task until it completes, fails or the wait budget runs out.",
                    ToolAccess::Read,
                )
                .with_parameter(task_id_param())
                .with_parameter(
                    ToolParameter::new("max_wait_seconds", "Maximum seconds to wait (default 300)", false)
                        .with_type("integer"),
                )
                .with_parameter(
                    ToolParameter::new("check_interval_seconds", "Seconds between checks (default 5)", false)
                        .with_type("integer"),
                )
                .with_keywords(["wait for task", "task completion", "monitor task"]),
            )
            .register(
                ToolDefinition::new(
                    "get_recent_failed_tasks",
                    "Report the most recent failed tasks with their error codes and reasons.",
                    ToolAccess::Read,
                )
                .with_parameter(
                    ToolParameter::new("limit", "Number of tasks to report (default 10)", false)
                        .with_type("integer"),
                )
                .with_keywords(["failed tasks", "task failures", "recent failures"]),
            );

        Self {
            catalog,
            monitor,
            session,
            tree,
        }
    }

    fn poll_params(&self, call: &ToolCall) -> Result<PollParams, ToolError> {
        let mut params = self.monitor.params();
        if let Some(max_wait) = call.get_u64("max_wait_seconds") {
            params = params.with_max_wait(Duration::from_secs(max_wait));
        }
        if let Some(interval) = call.get_u64("check_interval_seconds") {
            if interval == 0 {
                return Err(ToolError::invalid_argument(
                    "check_interval_seconds must be positive",
                ));
            }
            params = params.with_check_interval(Duration::from_secs(interval));
        }
        Ok(params)
    }

    async fn json_tool(&self, call: &ToolCall) -> ToolResult {
        let name = call.tool_name.as_str();
        let source = self.monitor.source();
        if !source.is_connected() {
            return ToolResult::failure(name, ToolError::not_connected());
        }

        let response = match name {
            "get_task_by_id" => match task_id_arg(call) {
                Ok(task_id) => source.fetch_task(task_id).await,
                Err(e) => return ToolResult::failure(name, e),
            },
            "get_tasks" | "get_task_count" => {
                let query = match task_query(call) {
                    Ok(query) => query,
                    Err(e) => return ToolResult::failure(name, e),
                };
                if name == "get_tasks" {
                    source.list_tasks(&query).await
                } else {
                    source.count_tasks(&query).await
                }
            }
            TASK_TREE_TOOL => {
                let request = match self.tree.build_request(call) {
                    Ok(request) => request,
                    Err(e) => return ToolResult::failure(name, e),
                };
                match self.session.require() {
                    Ok(transport) => transport.request(request).await,
                    Err(e) => Err(e),
                }
            }
            _ => return ToolResult::failure(name, ToolError::unknown_tool(name)),
        };

        match response {
            Ok(value) => ToolResult::success(name, value),
            Err(e) => ToolResult::failure(name, tool_error(&e)),
        }
    }
}

/// The `task_id` argument, refused unless it is a single path segment.
fn task_id_arg(call: &ToolCall) -> Result<&str, ToolError> {
    let task_id = call.require_string("task_id").map_err(ToolError::invalid_argument)?;
    if !is_valid_task_id(task_id) {
        return Err(ToolError::invalid_argument(format!(
            "task_id is not a valid task id: {:?}",
            task_id
        )));
    }
    Ok(task_id)
}

/// Listing filters from tool arguments.
fn task_query(call: &ToolCall) -> Result<TaskQuery, ToolError> {
    let mut query = TaskQuery::new();

    if let Some(offset) = call.get_u64("offset") {
        let offset = u32::try_from(offset)
            .map_err(|_| ToolError::invalid_argument("offset is out of range"))?;
        query = query.with_offset(offset);
    }
    if let Some(limit) = call.get_u64("limit") {
        query = query.with_limit(u32::try_from(limit).unwrap_or(u32::MAX));
    }
    if let Some(status) = call.get_string("status") {
        let status = TaskStatusFilter::parse(status).ok_or_else(|| {
            ToolError::invalid_argument(format!(
                "status must be PENDING, FAILURE or SUCCESS, got {:?}",
                status
            ))
        })?;
        query = query.with_status(status);
    }
    if let Some(parent_id) = call.get_string("parent_id") {
        query = query.with_parent_id(parent_id);
    }
    if let Some(root_id) = call.get_string("root_id") {
        query = query.with_root_id(root_id);
    }
    query = query.with_time_range(call.get_i64("start_time"), call.get_i64("end_time"));

    query.sort_by = call.get_string("sort_by").map(str::to_string);
    if let Some(order) = call.get_string("order") {
        query.order = Some(match order.to_lowercase().as_str() {
            "asc" | "ascending" => SortOrder::Asc,
            "desc" | "descending" => SortOrder::Desc,
            other => {
                return Err(ToolError::invalid_argument(format!(
                    "order must be asc or desc, got {:?}",
                    other
                )));
            }
        });
    }

    Ok(query)
}

#[async_trait]
impl ToolGroup for TaskToolGroup {
    fn id(&self) -> &str {
        catc_domain::routing::groups::TASK
    }

    fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let name = call.tool_name.as_str();
        match name {
            "check_task_status" => match task_id_arg(call) {
                Ok(task_id) => ToolResult::text(name, self.monitor.check_status(task_id).await),
                Err(e) => ToolResult::failure(name, e),
            },
            "wait_for_task_completion" => {
                let task_id = match task_id_arg(call) {
                    Ok(task_id) => task_id,
                    Err(e) => return ToolResult::failure(name, e),
                };
                match self.poll_params(call) {
                    Ok(params) => ToolResult::text(
                        name,
                        self.monitor.wait_for_completion(task_id, params).await,
                    ),
                    Err(e) => ToolResult::failure(name, e),
                }
            }
            "get_recent_failed_tasks" => {
                let limit = call
                    .get_u64("limit")
                    .map(|l| u32::try_from(l).unwrap_or(u32::MAX))
                    .unwrap_or(DEFAULT_FAILURE_LIMIT);
                ToolResult::text(name, self.monitor.recent_failures(limit).await)
            }
            _ => self.json_tool(call).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::testing::{FakeTransport, connected_session, monitor_for};
    use serde_json::json;

    fn group(session: SessionHandle) -> TaskToolGroup {
        let monitor = monitor_for(&session);
        TaskToolGroup::new(session, monitor)
    }

    #[test]
    fn test_catalog() {
        let group = group(SessionHandle::new());
        let names: Vec<&str> = group.catalog().names().collect();
        assert_eq!(
            names,
            vec![
                "get_task_by_id",
                "get_tasks",
                "get_task_count",
                "get_task_tree",
                "check_task_status",
                "wait_for_task_completion",
                "get_recent_failed_tasks",
            ]
        );
    }

    #[tokio::test]
    async fn test_not_connected() {
        let group = group(SessionHandle::new());

        let raw = group
            .execute(&ToolCall::new("get_task_by_id").with_arg("task_id", "t-1"))
            .await;
        assert_eq!(raw.to_json(), json!({"error": "Not connected. Use connect() first."}));

        let text = group
            .execute(&ToolCall::new("check_task_status").with_arg("task_id", "t-1"))
            .await;
        assert_eq!(text.output_text(), Some("Error: Not connected. Use connect() first."));
    }

    #[tokio::test]
    async fn test_get_tasks_query() {
        let transport = FakeTransport::new().respond("/dna/intent/api/v1/tasks", Ok(json!({"response": []})));
        let group = group(connected_session(transport.clone()));

        let call = ToolCall::from_json(
            "get_tasks",
            json!({"status": "failure", "limit": 900, "parent_id": "p-1", "order": "desc"}),
        );
        let result = group.execute(&call).await;
        assert_eq!(result.to_json(), json!({"response": []}));

        let sent = transport.requests();
        assert_eq!(
            sent[0].query,
            vec![
                ("limit".to_string(), "500".to_string()),
                ("status".to_string(), "FAILURE".to_string()),
                ("parentId".to_string(), "p-1".to_string()),
                ("order".to_string(), "desc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_tasks_rejects_unknown_status() {
        let group = group(connected_session(FakeTransport::new()));
        let result = group
            .execute(&ToolCall::new("get_tasks").with_arg("status", "DONE"))
            .await;
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_task_tree() {
        let transport = FakeTransport::new().respond(
            "/dna/intent/api/v1/task/t-1/tree",
            Ok(json!({"response": [{"id": "t-1"}, {"id": "t-2"}]})),
        );
        let group = group(connected_session(transport));
        let result = group
            .execute(&ToolCall::new("get_task_tree").with_arg("task_id", "t-1"))
            .await;
        assert_eq!(result.to_json()["response"][1]["id"], "t-2");
    }

    #[tokio::test]
    async fn test_check_task_status() {
        let transport = FakeTransport::new().respond(
            "/dna/intent/api/v1/task/t-1",
            Ok(json!({"response": {"id": "t-1", "isError": true, "errorCode": "E1", "failureReason": "boom"}})),
        );
        let group = group(connected_session(transport));
        let result = group
            .execute(&ToolCall::new("check_task_status").with_arg("task_id", "t-1"))
            .await;

        let text = result.output_text().unwrap();
        assert!(text.contains("Status: FAILED"));
        assert!(text.contains("Failure Reason: boom"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_completion_uses_arguments() {
        let transport = FakeTransport::new().respond(
            "/dna/intent/api/v1/task/t-1",
            Ok(json!({"response": {"id": "t-1", "startTime": 1000, "endTime": 0}})),
        );
        let group = group(connected_session(transport));
        let call = ToolCall::new("wait_for_task_completion")
            .with_arg("task_id", "t-1")
            .with_arg("max_wait_seconds", 2)
            .with_arg("check_interval_seconds", 1);

        let result = group.execute(&call).await;
        assert!(
            result
                .output_text()
                .unwrap()
                .starts_with("Timeout: Task t-1 did not complete within 2 seconds")
        );
    }

    #[tokio::test]
    async fn test_task_id_must_be_one_path_segment() {
        let transport = FakeTransport::new();
        let group = group(connected_session(transport.clone()));

        for tool in ["get_task_by_id", "check_task_status", "wait_for_task_completion"] {
            let result = group
                .execute(&ToolCall::new(tool).with_arg("task_id", "../network-device?limit=500"))
                .await;
            assert!(!result.is_success(), "{} accepted a traversal id", tool);
            assert_eq!(result.error.unwrap().code, "INVALID_ARGUMENT");
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_wait_rejects_zero_interval() {
        let group = group(connected_session(FakeTransport::new()));
        let call = ToolCall::new("wait_for_task_completion")
            .with_arg("task_id", "t-1")
            .with_arg("check_interval_seconds", 0);
        assert!(!group.execute(&call).await.is_success());
    }

    #[tokio::test]
    async fn test_recent_failed_tasks_default_limit() {
        let transport = FakeTransport::new().respond("/dna/intent/api/v1/tasks", Ok(json!({"response": []})));
        let group = group(connected_session(transport.clone()));

        let result = group.execute(&ToolCall::new("get_recent_failed_tasks")).await;
        assert_eq!(result.output_text(), Some("No recent failed tasks found."));
        assert!(
            transport.requests()[0]
                .query
                .contains(&("limit".to_string(), "10".to_string()))
        );
    }
}
