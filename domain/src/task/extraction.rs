//! Task id extraction from write-operation responses.
//!
//! Catalyst Center reports asynchronous work in several shapes. The lookup
//! order is fixed and the first hit wins:
//!
//! | # | Location | Example |
//! |---|----------|---------|
//! | 1 | `response.taskId` | `{"response": {"taskId": "abc"}}` |
//! | 2 | `response.url` containing `/task/<id>` | `{"response": {"url": "/api/v1/task/abc"}}` |
//! | 3 | top-level `taskId` | `{"taskId": "abc"}` |
//! | 4 | top-level `executionId` | `{"executionId": "abc"}` |
//!
//! No hit means the operation completed synchronously.

use crate::util::is_path_segment;
use serde_json::Value;

const TASK_PATH_MARKER: &str = "/task/";

/// Extract a task id from an operation's raw JSON response.
///
/// Ids are coerced to strings whatever their JSON type. `null` and empty
/// values count as absent.
pub fn extract_task_id(response: Option<&Value>) -> Option<String> {
    let response = response?;

    if let Some(inner) = response.get("response") {
        if let Some(id) = inner.get("taskId").and_then(id_string) {
            return Some(id);
        }

        if let Some(id) = inner
            .get("url")
            .and_then(Value::as_str)
            .and_then(task_id_from_url)
        {
            return Some(id);
        }
    }

    ["taskId", "executionId"]
        .into_iter()
        .find_map(|key| response.get(key).and_then(id_string))
}

/// Whether `id` can be looked up as `/task/{id}`.
pub fn is_valid_task_id(id: &str) -> bool {
    is_path_segment(id)
}

/// Take the segment after the last `/task/` in a URL.
fn task_id_from_url(url: &str) -> Option<String> {
    let (_, id) = url.rsplit_once(TASK_PATH_MARKER)?;
    (!id.is_empty()).then(|| id.to_string())
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
