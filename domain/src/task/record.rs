//! Task records as reported by Catalyst Center.
//!
//! A task is created remotely by a write operation and only ever observed
//! here. `endTime == 0` means the task has not ended; `isError` may flip to
//! true at any point after creation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Observable status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    InProgress,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::InProgress => "IN PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskStatus::InProgress)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a task response could not be turned into a [`TaskRecord`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRecordError {
    #[error("response has no 'response' field")]
    MissingResponse,

    #[error("malformed task record: {0}")]
    Malformed(String),
}

/// A single task as returned by `GET /dna/intent/api/v1/task/{id}`.
///
/// Every field is read leniently: a side field of an unexpected JSON type
/// degrades to a string (or to unset) instead of rejecting the record, so a
/// task that ran is never mistaken for a failed lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// `null`, absent or non-boolean values read as false
    #[serde(deserialize_with = "lenient_bool")]
    pub is_error: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub progress: Option<String>,
    /// Epoch milliseconds, 0 when unset
    #[serde(deserialize_with = "lenient_millis")]
    pub start_time: i64,
    /// Epoch milliseconds, 0 while the task is running
    #[serde(deserialize_with = "lenient_millis")]
    pub end_time: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub failure_reason: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub error_code: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub service_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub parent_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub root_id: Option<String>,
    /// Free-form payload; objects and arrays are kept as compact JSON
    #[serde(deserialize_with = "lenient_string")]
    pub data: Option<String>,
    #[serde(deserialize_with = "lenient_optional_millis")]
    pub last_update: Option<i64>,
    /// Status string used by the newer `/tasks` listing (PENDING, FAILURE, SUCCESS)
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(millis(&Value::deserialize(deserializer)?).unwrap_or(0))
}

fn lenient_optional_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(millis(&Value::deserialize(deserializer)?))
}

impl TaskRecord {
    /// Parse the `response` envelope of a task lookup.
    pub fn from_envelope(envelope: &Value) -> Result<Self, TaskRecordError> {
        let inner = envelope
            .get("response")
            .ok_or(TaskRecordError::MissingResponse)?;
        Self::from_value(inner)
    }

    /// Parse a bare task object.
    pub fn from_value(value: &Value) -> Result<Self, TaskRecordError> {
        if !value.is_object() {
            return Err(TaskRecordError::Malformed(format!(
                "expected an object, got {}",
                value
            )));
        }
        serde_json::from_value(value.clone()).map_err(|e| TaskRecordError::Malformed(e.to_string()))
    }

    /// Parse the `response` array of a task listing.
    pub fn list_from_envelope(envelope: &Value) -> Result<Vec<Self>, TaskRecordError> {
        let inner = envelope
            .get("response")
            .ok_or(TaskRecordError::MissingResponse)?;
        match inner {
            Value::Array(items) => items.iter().map(Self::from_value).collect(),
            Value::Null => Ok(Vec::new()),
            other => Err(TaskRecordError::Malformed(format!(
                "expected an array, got {}",
                other
            ))),
        }
    }

    pub fn status(&self) -> TaskStatus {
        if self.is_error {
            TaskStatus::Failed
        } else if self.end_time > 0 {
            TaskStatus::Completed
        } else {
            TaskStatus::InProgress
        }
    }

    /// Whether polling can stop.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Task duration from the remote timestamps, in seconds.
    ///
    /// `None` unless both `startTime` and `endTime` are set.
    pub fn duration_secs(&self) -> Option<f64> {
        if self.start_time > 0 && self.end_time > 0 {
            Some((self.end_time - self.start_time) as f64 / 1000.0)
        } else {
            None
        }
    }

    pub fn has_started(&self) -> bool {
        self.start_time > 0
    }

    pub fn id_or_unknown(&self) -> &str {
        self.id.as_deref().unwrap_or("Unknown")
    }

    pub fn service_type_or_unknown(&self) -> &str {
        self.service_type.as_deref().unwrap_or("Unknown")
    }

    pub fn progress_or_unknown(&self) -> &str {
        self.progress.as_deref().unwrap_or("Unknown")
    }
}
