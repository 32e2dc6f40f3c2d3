//! Task monitor use case
//!
//! Wraps Catalyst Center's asynchronous operations: find the task id in a
//! write response, poll the task until it ends or the wait budget runs out,
//! and render the result as plain text.
//!
//! ```text
//!            ┌──────────┐  isError            ┌────────┐
//!  start ──▶ │ POLLING  │────────────────────▶│ FAILED │
//!            │          │  endTime > 0        ├────────┴──┐
//!            │          │────────────────────▶│ COMPLETED │
//!            │          │  elapsed ≥ max_wait ├───────────┤
//!            │          │────────────────────▶│ TIMED_OUT │
//!            │          │  fetch failed       ├───────────┴──┐
//!            └──────────┘────────────────────▶│ LOOKUP_ERROR │
//!                                             └──────────────┘
//! ```
//!
//! Fetches are strictly sequential and timeouts are reported, never retried.
//! The elapsed time comes from the monotonic clock (`tokio::time::Instant`),
//! so paused-time tests are deterministic.

pub mod summary;

use crate::config::PollParams;
use crate::ports::task_source::TaskSource;
use catc_domain::{NOT_CONNECTED_MESSAGE, TaskQuery, TaskRecord, extract_task_id};
use serde_json::Value;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

pub use summary::{failure_entry, format_epoch_millis, status_summary};

/// Default number of entries in the recent-failures report
pub const DEFAULT_FAILURE_LIMIT: u32 = 10;

/// Terminal state of one poll loop
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Completed {
        record: TaskRecord,
        waited: Duration,
    },
    Failed {
        record: TaskRecord,
        waited: Duration,
    },
    TimedOut {
        task_id: String,
        max_wait: Duration,
        waited: Duration,
    },
    LookupError {
        task_id: String,
        reason: String,
    },
}

impl PollOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PollOutcome::Completed { .. })
    }

    /// Human-readable rendering. Timeouts start with `Timeout:`.
    pub fn render(&self) -> String {
        match self {
            PollOutcome::Completed { record, waited } | PollOutcome::Failed { record, waited } => {
                format!(
                    "{}\n\nWait Time: {:.1} seconds",
                    status_summary(record),
                    waited.as_secs_f64()
                )
            }
            PollOutcome::TimedOut {
                task_id,
                max_wait,
                waited,
            } => format!(
                "Timeout: Task {} did not complete within {} seconds (waited {:.1}s)",
                task_id,
                max_wait.as_secs(),
                waited.as_secs_f64()
            ),
            PollOutcome::LookupError { task_id, .. } => lookup_error(task_id),
        }
    }
}

fn lookup_error(task_id: &str) -> String {
    format!("Error: Could not retrieve task {}", task_id)
}

fn not_connected() -> String {
    format!("Error: {}", NOT_CONNECTED_MESSAGE)
}

/// Polls and reports on Catalyst Center tasks
pub struct TaskMonitor {
    source: Arc<dyn TaskSource>,
    params: PollParams,
}

impl TaskMonitor {
    pub fn new(source: Arc<dyn TaskSource>) -> Self {
        Self {
            source,
            params: PollParams::default(),
        }
    }

    pub fn with_params(mut self, params: PollParams) -> Self {
        self.params = params;
        self
    }

    /// Default poll parameters
    pub fn params(&self) -> PollParams {
        self.params
    }

    pub fn source(&self) -> &Arc<dyn TaskSource> {
        &self.source
    }

    async fn fetch_record(&self, task_id: &str) -> Result<TaskRecord, String> {
        let envelope = self
            .source
            .fetch_task(task_id)
            .await
            .map_err(|e| e.to_string())?;
        TaskRecord::from_envelope(&envelope).map_err(|e| e.to_string())
    }

    /// Poll a task until it is terminal, the lookup fails or `max_wait` elapses.
    pub async fn poll(&self, task_id: &str, params: PollParams) -> PollOutcome {
        let started = Instant::now();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let record = match self.fetch_record(task_id).await {
                Ok(record) => record,
                Err(reason) => {
                    warn!(task_id, attempt, %reason, "Task lookup failed");
                    return PollOutcome::LookupError {
                        task_id: task_id.to_string(),
                        reason,
                    };
                }
            };

            let status = record.status();
            debug!(task_id, attempt, status = %status, "Polled task");

            if record.is_error {
                return PollOutcome::Failed {
                    record,
                    waited: started.elapsed(),
                };
            }
            if status.is_terminal() {
                return PollOutcome::Completed {
                    record,
                    waited: started.elapsed(),
                };
            }

            sleep(params.check_interval).await;

            let waited = started.elapsed();
            if waited >= params.max_wait {
                info!(task_id, attempt, "Task did not complete in time");
                return PollOutcome::TimedOut {
                    task_id: task_id.to_string(),
                    max_wait: params.max_wait,
                    waited,
                };
            }
        }
    }

    /// Poll a task and render the outcome.
    pub async fn wait_for_completion(&self, task_id: &str, params: PollParams) -> String {
        if !self.source.is_connected() {
            return not_connected();
        }
        self.poll(task_id, params).await.render()
    }

    /// Single fetch, rendered as a status summary.
    pub async fn check_status(&self, task_id: &str) -> String {
        if !self.source.is_connected() {
            return not_connected();
        }
        match self.fetch_record(task_id).await {
            Ok(record) => status_summary(&record),
            Err(reason) => {
                debug!(task_id, %reason, "Task status lookup failed");
                lookup_error(task_id)
            }
        }
    }

    /// Run a write operation and follow the task it starts.
    ///
    /// `max_wait` overrides the default wait budget for this call only.
    pub async fn execute_and_monitor<Fut, E>(
        &self,
        name: &str,
        operation: Fut,
        auto_wait: bool,
        max_wait: Option<Duration>,
    ) -> String
    where
        Fut: Future<Output = Result<Value, E>>,
        E: Display,
    {
        if !self.source.is_connected() {
            return not_connected();
        }

        info!(operation = name, "Executing operation");
        let response = match operation.await {
            Ok(response) => response,
            Err(e) => {
                warn!(operation = name, error = %e, "Operation failed");
                return format!("Error executing {}: {}", name, e);
            }
        };

        if is_empty_response(&response) {
            return format!("Error: {} failed - no response received", name);
        }

        let Some(task_id) = extract_task_id(Some(&response)) else {
            return format!("{} completed immediately. Response: {}", name, response);
        };

        let mut result = format!("{} initiated successfully.\nTask ID: {}\n", name, task_id);
        if auto_wait {
            let params = match max_wait {
                Some(max_wait) => self.params.with_max_wait(max_wait),
                None => self.params,
            };
            result.push_str(&format!(
                "\nWaiting for completion (max {}s)...\n",
                params.max_wait_secs()
            ));
            result.push_str(&self.poll(&task_id, params).await.render());
        } else {
            result.push_str(&format!(
                "\nUse 'check task status for {}' to monitor progress.",
                task_id
            ));
        }
        result
    }

    /// Most recent failed tasks, newest first.
    pub async fn recent_failures(&self, limit: u32) -> String {
        if !self.source.is_connected() {
            return not_connected();
        }

        let query = TaskQuery::recent_failures(limit);
        let records = match self.source.list_tasks(&query).await {
            Ok(envelope) => TaskRecord::list_from_envelope(&envelope).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        let mut records = match records {
            Ok(records) => records,
            Err(reason) => {
                warn!(%reason, "Failed to list failed tasks");
                return "No failed tasks found or error retrieving tasks.".to_string();
            }
        };

        if records.is_empty() {
            return "No recent failed tasks found.".to_string();
        }

        records.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        let entries: Vec<String> = records
            .iter()
            .map(|r| failure_entry(r, &chrono::Local))
            .collect();

        format!("Recent Failed Tasks:\n{}", entries.join("\n---\n"))
    }
}

fn is_empty_response(response: &Value) -> bool {
    match response {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::transport::TransportError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays scripted task envelopes; the last one repeats forever.
    struct ScriptedSource {
        connected: bool,
        fetches: Mutex<VecDeque<Result<Value, TransportError>>>,
        fetch_count: AtomicUsize,
        listing: Mutex<Option<Result<Value, TransportError>>>,
        last_query: Mutex<Option<TaskQuery>>,
    }

    impl ScriptedSource {
        fn new(fetches: Vec<Result<Value, TransportError>>) -> Self {
            Self {
                connected: true,
                fetches: Mutex::new(fetches.into()),
                fetch_count: AtomicUsize::new(0),
                listing: Mutex::new(None),
                last_query: Mutex::new(None),
            }
        }

        fn disconnected() -> Self {
            Self {
                connected: false,
                ..Self::new(vec![])
            }
        }

        fn with_listing(self, listing: Result<Value, TransportError>) -> Self {
            *self.listing.lock().unwrap() = Some(listing);
            self
        }

        fn fetch_count(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TaskSource for ScriptedSource {
        fn is_connected(&self) -> bool {
            self.connected
        }

        async fn fetch_task(&self, _task_id: &str) -> Result<Value, TransportError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            let mut fetches = self.fetches.lock().unwrap();
            if fetches.len() > 1 {
                fetches.pop_front().unwrap()
            } else {
                fetches
                    .front()
                    .cloned()
                    .unwrap_or(Err(TransportError::NotConnected))
            }
        }

        async fn list_tasks(&self, query: &TaskQuery) -> Result<Value, TransportError> {
            *self.last_query.lock().unwrap() = Some(query.clone());
            self.listing
                .lock()
                .unwrap()
                .clone()
                .unwrap_or(Ok(json!({"response": []})))
        }

        async fn count_tasks(&self, _query: &TaskQuery) -> Result<Value, TransportError> {
            Ok(json!({"response": 0}))
        }
    }

    fn running() -> Result<Value, TransportError> {
        Ok(json!({"response": {"id": "t1", "isError": false, "startTime": 1_000, "endTime": 0}}))
    }

    fn finished() -> Result<Value, TransportError> {
        Ok(json!({"response": {
            "id": "t1", "isError": false, "progress": "done",
            "startTime": 1_000, "endTime": 3_000
        }}))
    }

    fn monitor(source: Arc<ScriptedSource>) -> TaskMonitor {
        TaskMonitor::new(source)
    }

    #[tokio::test(start_paused = true)]
    async fn test_completes_after_three_fetches() {
        let source = Arc::new(ScriptedSource::new(vec![running(), running(), finished()]));
        let outcome = monitor(source.clone())
            .poll("t1", PollParams::from_secs(10, 1))
            .await;

        assert_eq!(source.fetch_count(), 3);
        assert!(outcome.is_success());
        let rendered = outcome.render();
        assert!(rendered.contains("Status: COMPLETED"));
        assert!(rendered.contains("Duration: 2.00 seconds"));
        assert!(rendered.ends_with("Wait Time: 2.0 seconds"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_task_is_terminal() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(json!({"response": {
            "id": "t1", "isError": true, "failureReason": "boom", "errorCode": "E42"
        }}))]));
        let outcome = monitor(source.clone())
            .poll("t1", PollParams::default())
            .await;

        assert_eq!(source.fetch_count(), 1);
        assert!(matches!(outcome, PollOutcome::Failed { .. }));
        let rendered = outcome.render();
        assert!(rendered.contains("Status: FAILED"));
        assert!(rendered.contains("Failure Reason: boom"));
        assert!(rendered.ends_with("Wait Time: 0.0 seconds"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_task_with_loosely_typed_fields() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(json!({"response": {
            "id": "t1", "isError": true, "errorCode": 1234, "failureReason": "boom",
            "data": {"k": 1}, "progress": null, "endTime": 5
        }}))]));
        let outcome = monitor(source.clone())
            .poll("t1", PollParams::default())
            .await;

        assert!(matches!(outcome, PollOutcome::Failed { .. }));
        let rendered = outcome.render();
        assert!(rendered.contains("Status: FAILED"));
        assert!(rendered.contains("Error Code: 1234"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_null_is_error_completes() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(json!({"response": {
            "id": "t1", "isError": null, "startTime": 1_000, "endTime": 2_000
        }}))]));
        let outcome = monitor(source).poll("t1", PollParams::default()).await;

        assert!(outcome.is_success());
        assert!(outcome.render().contains("Status: COMPLETED"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out() {
        let source = Arc::new(ScriptedSource::new(vec![running()]));
        let outcome = monitor(source.clone())
            .poll("t1", PollParams::from_secs(1, 1))
            .await;

        let PollOutcome::TimedOut { waited, .. } = &outcome else {
            panic!("expected timeout, got {:?}", outcome);
        };
        assert!(*waited >= Duration::from_secs(1));
        assert!(*waited <= Duration::from_secs(2));
        let rendered = outcome.render();
        assert!(rendered.starts_with("Timeout:"));
        assert_eq!(
            rendered,
            "Timeout: Task t1 did not complete within 1 seconds (waited 1.0s)"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_error_is_immediate() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(json!({"unexpected": true}))]));
        let outcome = monitor(source.clone())
            .poll("t9", PollParams::default())
            .await;

        assert_eq!(source.fetch_count(), 1);
        assert!(matches!(outcome, PollOutcome::LookupError { .. }));
        assert_eq!(outcome.render(), "Error: Could not retrieve task t9");
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_error_mid_poll() {
        let source = Arc::new(ScriptedSource::new(vec![
            running(),
            Err(TransportError::Status {
                status: 500,
                body: "oops".to_string(),
            }),
        ]));
        let outcome = monitor(source.clone())
            .poll("t1", PollParams::from_secs(30, 5))
            .await;

        assert_eq!(source.fetch_count(), 2);
        let PollOutcome::LookupError { reason, .. } = outcome else {
            panic!("expected lookup error");
        };
        assert!(reason.contains("500"));
    }

    #[tokio::test]
    async fn test_wait_requires_connection() {
        let source = Arc::new(ScriptedSource::disconnected());
        let text = monitor(source.clone())
            .wait_for_completion("t1", PollParams::default())
            .await;

        assert_eq!(text, "Error: Not connected. Use connect() first.");
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_check_status() {
        let source = Arc::new(ScriptedSource::new(vec![running()]));
        let text = monitor(source).check_status("t1").await;
        assert!(text.contains("Status: IN PROGRESS"));
        assert!(text.ends_with("Still running..."));
    }

    #[tokio::test]
    async fn test_check_status_lookup_error() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(json!({"response": null}))]));
        let text = monitor(source).check_status("t1").await;
        assert_eq!(text, "Error: Could not retrieve task t1");
    }

    #[tokio::test]
    async fn test_execute_synchronous_operation() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let text = monitor(source.clone())
            .execute_and_monitor(
                "Add site",
                async { Ok::<_, TransportError>(json!({"response": {"status": "ok"}})) },
                true,
                None,
            )
            .await;

        assert_eq!(
            text,
            r#"Add site completed immediately. Response: {"response":{"status":"ok"}}"#
        );
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_and_wait() {
        let source = Arc::new(ScriptedSource::new(vec![running(), finished()]));
        let text = monitor(source.clone())
            .execute_and_monitor(
                "Provision device",
                async {
                    Ok::<_, TransportError>(
                        json!({"response": {"url": "/api/v1/task/t1", "taskId": null}}),
                    )
                },
                true,
                Some(Duration::from_secs(60)),
            )
            .await;

        assert!(text.starts_with("Provision device initiated successfully.\nTask ID: t1\n"));
        assert!(text.contains("Waiting for completion (max 60s)..."));
        assert!(text.contains("Status: COMPLETED"));
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_execute_without_wait() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let text = monitor(source.clone())
            .execute_and_monitor(
                "Delete site",
                async { Ok::<_, TransportError>(json!({"executionId": "e-7"})) },
                false,
                None,
            )
            .await;

        assert!(text.ends_with("Use 'check task status for e-7' to monitor progress."));
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_execute_operation_error() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let m = monitor(source);

        let text = m
            .execute_and_monitor(
                "Add site",
                async {
                    Err::<Value, _>(TransportError::Status {
                        status: 400,
                        body: "bad".to_string(),
                    })
                },
                true,
                None,
            )
            .await;
        assert_eq!(text, "Error executing Add site: HTTP 400: bad");

        let text = m
            .execute_and_monitor("Add site", async { Ok::<_, TransportError>(json!({})) }, true, None)
            .await;
        assert_eq!(text, "Error: Add site failed - no response received");
    }

    #[tokio::test]
    async fn test_recent_failures_sorted_newest_first() {
        let source = Arc::new(ScriptedSource::new(vec![]).with_listing(Ok(json!({"response": [
            {"id": "old", "serviceType": "A", "startTime": 0, "errorCode": "E1", "failureReason": "r1"},
            {"id": "new", "serviceType": "B", "startTime": 1_700_000_000_000_i64, "errorCode": "E2"}
        ]}))));
        let text = monitor(source.clone()).recent_failures(5).await;

        assert!(text.starts_with("Recent Failed Tasks:\nTask ID: new\n"));
        assert!(text.contains("\n---\nTask ID: old\n"));
        assert!(text.contains("Time: Unknown"));
        assert!(text.contains("Reason: Unknown reason"));

        let query = source.last_query.lock().unwrap().clone().unwrap();
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("status".to_string(), "FAILURE".to_string())));
        assert!(pairs.contains(&("limit".to_string(), "5".to_string())));
        assert!(pairs.contains(&("order".to_string(), "desc".to_string())));
    }

    #[tokio::test]
    async fn test_recent_failures_empty() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        assert_eq!(
            monitor(source).recent_failures(DEFAULT_FAILURE_LIMIT).await,
            "No recent failed tasks found."
        );
    }

    #[tokio::test]
    async fn test_recent_failures_listing_error() {
        let source = Arc::new(
            ScriptedSource::new(vec![]).with_listing(Err(TransportError::Timeout)),
        );
        assert_eq!(
            monitor(source).recent_failures(10).await,
            "No failed tasks found or error retrieving tasks."
        );
    }
}
