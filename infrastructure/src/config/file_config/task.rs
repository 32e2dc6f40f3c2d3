//! Task monitor settings (`[task]` section)

use super::issue::ConfigIssue;
use catc_application::PollParams;
use catc_application::config::poll_params::{DEFAULT_CHECK_INTERVAL_SECS, DEFAULT_MAX_WAIT_SECS};
use serde::{Deserialize, Serialize};

/// Raw `[task]` configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTaskConfig {
    /// Default wait budget of `wait_for_task_completion` and monitored writes
    pub max_wait_seconds: u64,
    pub check_interval_seconds: u64,
}

impl Default for FileTaskConfig {
    fn default() -> Self {
        Self {
            max_wait_seconds: DEFAULT_MAX_WAIT_SECS,
            check_interval_seconds: DEFAULT_CHECK_INTERVAL_SECS,
        }
    }
}

impl FileTaskConfig {
    /// Zero values are replaced by the defaults and reported.
    pub fn poll_params(&self) -> (PollParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut value = |field: &str, configured: u64, default: u64| {
            if configured == 0 {
                issues.push(ConfigIssue::warning(
                    field,
                    format!("cannot be 0, using {}", default),
                ));
                default
            } else {
                configured
            }
        };

        let max_wait = value("task.max_wait_seconds", self.max_wait_seconds, DEFAULT_MAX_WAIT_SECS);
        let interval = value(
            "task.check_interval_seconds",
            self.check_interval_seconds,
            DEFAULT_CHECK_INTERVAL_SECS,
        );
        (PollParams::from_secs(max_wait, interval), issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_zero_interval_is_reported() {
        let config = FileTaskConfig {
            max_wait_seconds: 60,
            check_interval_seconds: 0,
        };
        let (params, issues) = config.poll_params();
        assert_eq!(params.max_wait, Duration::from_secs(60));
        assert_eq!(params.check_interval, Duration::from_secs(5));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "task.check_interval_seconds");
    }
}
