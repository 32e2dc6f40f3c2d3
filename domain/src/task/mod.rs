//! Task domain module
//!
//! Catalyst Center runs write and provisioning operations asynchronously:
//! the HTTP call answers immediately with a task id and the real work is
//! tracked as a remote **task**. This module holds the pure pieces:
//!
//! - [`extract_task_id`]: find the task id in a heterogeneous response
//! - [`TaskRecord`] / [`TaskStatus`]: the observed task and its status rule
//! - [`TaskQuery`]: filters for the task listing endpoint
//!
//! Polling and summaries live in the application layer's task monitor.

pub mod extraction;
pub mod query;
pub mod record;

pub use extraction::{extract_task_id, is_valid_task_id};
pub use query::{MAX_TASK_PAGE, SortOrder, TaskQuery, TaskStatusFilter};
pub use record::{TaskRecord, TaskRecordError, TaskStatus};
