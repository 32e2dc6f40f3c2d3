//! Controller connection settings (`[catalyst]` section)

use super::issue::ConfigIssue;
use crate::catalyst::ClientOptions;
use catc_domain::Credentials;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw `[catalyst]` configuration from TOML
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalystConfig {
    /// `https://<host>` of the controller; enables auto-connect with the
    /// username and password
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Verify the controller's TLS certificate
    pub verify_tls: bool,
    pub request_timeout_secs: u64,
    pub auth_timeout_secs: u64,
}

impl Default for FileCatalystConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            username: None,
            password: None,
            verify_tls: false,
            request_timeout_secs: 30,
            auth_timeout_secs: 60,
        }
    }
}

impl std::fmt::Debug for FileCatalystConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCatalystConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("verify_tls", &self.verify_tls)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("auth_timeout_secs", &self.auth_timeout_secs)
            .finish()
    }
}

impl FileCatalystConfig {
    /// Credentials for auto-connect, when all three fields are set.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.base_url, &self.username, &self.password) {
            (Some(url), Some(user), Some(password)) => {
                Some(Credentials::new(url, user, password))
            }
            _ => None,
        }
    }

    pub fn client_options(&self) -> ClientOptions {
        let defaults = ClientOptions::default();
        let secs = |value: u64, fallback: Duration| {
            if value == 0 {
                fallback
            } else {
                Duration::from_secs(value)
            }
        };

        ClientOptions {
            verify_tls: self.verify_tls,
            request_timeout: secs(self.request_timeout_secs, defaults.request_timeout),
            auth_timeout: secs(self.auth_timeout_secs, defaults.auth_timeout),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(url) = &self.base_url {
            let lower = url.to_lowercase();
            if !(lower.starts_with("https://") || lower.starts_with("http://")) {
                issues.push(ConfigIssue::error(
                    "catalyst.base_url",
                    format!("'{}' must start with https:// or http://", url),
                ));
            }
        }

        let set = [&self.base_url, &self.username, &self.password]
            .iter()
            .filter(|v| v.is_some())
            .count();
        if set > 0 && set < 3 {
            issues.push(ConfigIssue::warning(
                "catalyst",
                "base_url, username and password must all be set for auto-connect",
            ));
        }

        for (field, value) in [
            ("catalyst.request_timeout_secs", self.request_timeout_secs),
            ("catalyst.auth_timeout_secs", self.auth_timeout_secs),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::warning(field, "cannot be 0, using the default"));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_need_all_fields() {
        let mut config = FileCatalystConfig {
            base_url: Some("https://10.1.1.1/".to_string()),
            username: Some("admin".to_string()),
            ..Default::default()
        };
        assert!(config.credentials().is_none());
        assert_eq!(config.validate().len(), 1);

        config.password = Some("Secret123".to_string());
        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.base_url, "https://10.1.1.1");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = FileCatalystConfig {
            password: Some("Secret123".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("Secret123"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = FileCatalystConfig {
            request_timeout_secs: 0,
            verify_tls: true,
            ..Default::default()
        };
        let options = config.client_options();
        assert_eq!(options.request_timeout, Duration::from_secs(30));
        assert!(options.verify_tls);
        assert_eq!(config.validate()[0].field, "catalyst.request_timeout_secs");
    }

    #[test]
    fn test_bad_scheme_is_error() {
        let config = FileCatalystConfig {
            base_url: Some("ftp://10.1.1.1".to_string()),
            ..Default::default()
        };
        assert!(config.validate().iter().any(ConfigIssue::is_error));
    }
}
