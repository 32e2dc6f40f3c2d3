//! Poll parameters: task monitor loop control.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MAX_WAIT_SECS: u64 = 300;
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 5;

/// How long the task monitor waits for a task and how often it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollParams {
    /// Upper bound on the monotonic time spent polling one task.
    pub max_wait: Duration,
    /// Sleep between two fetches.
    pub check_interval: Duration,
}

impl Default for PollParams {
    fn default() -> Self {
        Self {
            max_wait: Duration::from_secs(DEFAULT_MAX_WAIT_SECS),
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS),
        }
    }
}

impl PollParams {
    pub fn from_secs(max_wait_secs: u64, check_interval_secs: u64) -> Self {
        Self {
            max_wait: Duration::from_secs(max_wait_secs),
            check_interval: Duration::from_secs(check_interval_secs),
        }
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    /// Whole seconds of `max_wait`, as printed in timeout messages.
    pub fn max_wait_secs(&self) -> u64 {
        self.max_wait.as_secs()
    }
}
