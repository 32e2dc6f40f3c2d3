//! Log file settings (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[logging]` configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rolling log files; stderr only when unset
    pub directory: Option<String>,
    /// File name prefix of the log files
    pub file_prefix: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: "catc-gateway.log".to_string(),
        }
    }
}

impl FileLoggingConfig {
    /// Log directory with a leading `~` expanded.
    pub fn directory_path(&self) -> Option<PathBuf> {
        let raw = self.directory.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}
