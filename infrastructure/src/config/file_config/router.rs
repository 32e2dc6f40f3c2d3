//! Routing settings (`[router]` section)
//!
//! ```toml
//! [router]
//! default_domain = "devices"
//!
//! [router.groups]
//! wireless = "connectivity"
//! ```

use super::issue::ConfigIssue;
use catc_domain::{DEFAULT_DOMAIN, Domain, DomainClassifier, GroupMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw `[router]` configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    /// Domain used when no keyword matches
    pub default_domain: Option<String>,
    /// Domain name to group name overrides
    pub groups: BTreeMap<String, String>,
}

impl FileRouterConfig {
    /// Parse `default_domain`; unknown names fall back to the built-in default.
    pub fn parse_default_domain(&self) -> (Domain, Vec<ConfigIssue>) {
        match &self.default_domain {
            None => (DEFAULT_DOMAIN, Vec::new()),
            Some(name) => match name.parse::<Domain>() {
                Ok(domain) => (domain, Vec::new()),
                Err(e) => (
                    DEFAULT_DOMAIN,
                    vec![ConfigIssue::warning(
                        "router.default_domain",
                        format!("{}, falling back to '{}'", e, DEFAULT_DOMAIN),
                    )],
                ),
            },
        }
    }

    /// The built-in group map with the configured overrides applied.
    pub fn group_map(&self) -> (GroupMap, Vec<ConfigIssue>) {
        let mut map = GroupMap::builtin();
        let mut issues = Vec::new();

        for (domain, group) in &self.groups {
            let field = format!("router.groups.{}", domain);
            match domain.parse::<Domain>() {
                Ok(_) if group.trim().is_empty() => {
                    issues.push(ConfigIssue::warning(field, "group name cannot be empty"));
                }
                Ok(domain) => map = map.with_override(domain, group.trim()),
                Err(e) => issues.push(ConfigIssue::warning(field, e.to_string())),
            }
        }

        (map, issues)
    }

    pub fn classifier(&self) -> (DomainClassifier, Vec<ConfigIssue>) {
        let (domain, issues) = self.parse_default_domain();
        (DomainClassifier::builtin().with_default_domain(domain), issues)
    }
}
