//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion to domain and application
//! types happens in the `parse_*` style accessors, which also report issues.

mod catalyst;
mod issue;
mod logging;
mod router;
mod task;

pub use catalyst::FileCatalystConfig;
pub use issue::{ConfigIssue, Severity};
pub use logging::FileLoggingConfig;
pub use router::FileRouterConfig;
pub use task::FileTaskConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Controller connection
    pub catalyst: FileCatalystConfig,
    /// Classification and group mapping
    pub router: FileRouterConfig,
    /// Task monitor defaults
    pub task: FileTaskConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.catalyst.validate();
        issues.extend(self.router.parse_default_domain().1);
        issues.extend(self.router.group_map().1);
        issues.extend(self.task.poll_params().1);
        issues
    }

    /// TOML rendering for `--show-config`, with the password masked.
    pub fn to_display_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.catalyst.password.is_some() {
            shown.catalyst.password = Some("********".to_string());
        }
        toml::to_string_pretty(&shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catc_domain::Domain;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[catalyst]
base_url = "https://10.1.1.1"
username = "admin"
password = "Secret123"
verify_tls = true

[router]
default_domain = "events"

[router.groups]
wireless = "connectivity"

[task]
max_wait_seconds = 120
check_interval_seconds = 2

[logging]
directory = "/tmp/catc-logs"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalyst.base_url.as_deref(), Some("https://10.1.1.1"));
        assert!(config.catalyst.verify_tls);
        assert_eq!(config.router.parse_default_domain().0, Domain::Events);
        assert_eq!(config.task.poll_params().0.check_interval, Duration::from_secs(2));
        assert_eq!(config.logging.directory.as_deref(), Some("/tmp/catc-logs"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[task]\nmax_wait_seconds = 10\n").unwrap();
        assert_eq!(config.task.max_wait_seconds, 10);
        assert_eq!(config.task.check_interval_seconds, 5);
        assert_eq!(config.catalyst.request_timeout_secs, 30);
        assert!(config.catalyst.base_url.is_none());
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let config: FileConfig = toml::from_str(
            r#"
[router]
default_domain = "billing"

[task]
check_interval_seconds = 0
"#,
        )
        .unwrap();

        let fields: Vec<String> = config.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec!["router.default_domain", "task.check_interval_seconds"]
        );
    }

    #[test]
    fn test_display_masks_password() {
        let mut config = FileConfig::default();
        config.catalyst.password = Some("Secret123".to_string());
        let shown = config.to_display_toml().unwrap();
        assert!(!shown.contains("Secret123"));
        assert!(shown.contains("********"));
    }
}
