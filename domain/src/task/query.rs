//! Filters for the task listing endpoint (`GET /dna/intent/api/v1/tasks`).

use serde::{Deserialize, Serialize};

/// Status filter accepted by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatusFilter {
    Pending,
    Failure,
    Success,
}

impl TaskStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatusFilter::Pending => "PENDING",
            TaskStatusFilter::Failure => "FAILURE",
            TaskStatusFilter::Success => "SUCCESS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Some(TaskStatusFilter::Pending),
            "FAILURE" => Some(TaskStatusFilter::Failure),
            "SUCCESS" => Some(TaskStatusFilter::Success),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Task listing filters. Unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQuery {
    /// First record to show (numbered from 1)
    pub offset: Option<u32>,
    /// Records per page (1..=500)
    pub limit: Option<u32>,
    pub status: Option<TaskStatusFilter>,
    pub parent_id: Option<String>,
    pub root_id: Option<String>,
    /// Epoch milliseconds
    pub start_time: Option<i64>,
    /// Epoch milliseconds
    pub end_time: Option<i64>,
    pub sort_by: Option<String>,
    pub order: Option<SortOrder>,
}

/// Largest page the listing endpoint accepts.
pub const MAX_TASK_PAGE: u32 = 500;

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The query used by the recent-failures report.
    pub fn recent_failures(limit: u32) -> Self {
        Self::new()
            .with_status(TaskStatusFilter::Failure)
            .with_limit(limit)
            .with_sort("startTime", SortOrder::Desc)
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the page size, clamped to `1..=MAX_TASK_PAGE`.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit.clamp(1, MAX_TASK_PAGE));
        self
    }

    pub fn with_status(mut self, status: TaskStatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = Some(root_id.into());
        self
    }

    pub fn with_time_range(mut self, start_time: Option<i64>, end_time: Option<i64>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.order = Some(order);
        self
    }

    /// Render as query-string pairs using the API's parameter names.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key.to_string(), value));
            }
        };

        push("offset", self.offset.map(|v| v.to_string()));
        push("limit", self.limit.map(|v| v.to_string()));
        push("status", self.status.map(|s| s.as_str().to_string()));
        push("parentId", self.parent_id.clone());
        push("rootId", self.root_id.clone());
        push("startTime", self.start_time.map(|v| v.to_string()));
        push("endTime", self.end_time.map(|v| v.to_string()));
        push("sortBy", self.sort_by.clone());
        push("order", self.order.map(|o| o.as_str().to_string()));

        pairs
    }
}
