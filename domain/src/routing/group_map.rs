//! Domain-to-group mapping.
//!
//! User-facing intents are finer grained than the implemented tool groups,
//! so several domains can resolve to the same physical group.

use super::domain::Domain;
use std::collections::BTreeMap;

/// Group names shipped with the gateway.
pub mod groups {
    pub const AUTHENTICATION: &str = "authentication";
    pub const SDA: &str = "sda";
    pub const DEVICES: &str = "devices";
    pub const CONNECTIVITY: &str = "connectivity";
    pub const EVENTS: &str = "events";
    pub const SYSTEM: &str = "system";
    pub const APPLIANCE: &str = "appliance";
    pub const ECOSYSTEM: &str = "ecosystem";
    pub const TASK: &str = "task";
}

/// Mapping from every [`Domain`] to a tool group name.
///
/// Total by construction: domains without an explicit entry map to a group
/// with the same name as the domain.
#[derive(Debug, Clone)]
pub struct GroupMap {
    entries: BTreeMap<Domain, String>,
}

impl Default for GroupMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GroupMap {
    /// The built-in mapping.
    pub fn builtin() -> Self {
        let entries = Domain::ALL
            .into_iter()
            .map(|domain| {
                let group = match domain {
                    Domain::Authentication => groups::AUTHENTICATION,
                    Domain::Sda => groups::SDA,
                    Domain::Devices | Domain::Inventory | Domain::Interfaces => groups::DEVICES,
                    Domain::Connectivity | Domain::Wireless => groups::CONNECTIVITY,
                    Domain::Events => groups::EVENTS,
                    Domain::System => groups::SYSTEM,
                    Domain::Appliance => groups::APPLIANCE,
                    Domain::Ecosystem => groups::ECOSYSTEM,
                    Domain::Task => groups::TASK,
                };
                (domain, group.to_string())
            })
            .collect();
        Self { entries }
    }

    /// Point `domain` at a different group (builder pattern).
    pub fn with_override(mut self, domain: Domain, group: impl Into<String>) -> Self {
        self.entries.insert(domain, group.into());
        self
    }

    /// Group name for a domain.
    pub fn group_for(&self, domain: Domain) -> &str {
        self.entries
            .get(&domain)
            .map(String::as_str)
            .unwrap_or_else(|| domain.as_str())
    }

    /// Distinct group names referenced by the mapping, sorted.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Domains that resolve to `group`.
    pub fn domains_for(&self, group: &str) -> Vec<Domain> {
        Domain::ALL
            .into_iter()
            .filter(|d| self.group_for(*d) == group)
            .collect()
    }
}
