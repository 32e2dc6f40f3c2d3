//! Static keyword tables used by the classifier.
//!
//! [`KeywordTable`] is ordered: the position of a domain in the table is the
//! tie-break rule when two domains score the same. [`OverrideRule`]s are the
//! intent shortcuts evaluated before any scoring happens.

use super::domain::Domain;

/// Keywords belonging to a single domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainKeywords {
    pub domain: Domain,
    pub keywords: Vec<String>,
}

/// Ordered mapping from domain to keywords.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<DomainKeywords>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append keywords for a domain (builder pattern).
    ///
    /// Adding to a domain that is already present extends its keyword list in
    /// place, so the domain keeps its original table position.
    pub fn with_domain<I, S>(mut self, domain: Domain, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .filter(|k| !k.is_empty());

        match self.entries.iter_mut().find(|e| e.domain == domain) {
            Some(entry) => {
                for keyword in keywords {
                    if !entry.keywords.contains(&keyword) {
                        entry.keywords.push(keyword);
                    }
                }
            }
            None => {
                let mut unique: Vec<String> = Vec::new();
                for keyword in keywords {
                    if !unique.contains(&keyword) {
                        unique.push(keyword);
                    }
                }
                self.entries.push(DomainKeywords {
                    domain,
                    keywords: unique,
                });
            }
        }
        self
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[DomainKeywords] {
        &self.entries
    }

    pub fn domains(&self) -> impl Iterator<Item = Domain> + '_ {
        self.entries.iter().map(|e| e.domain)
    }

    pub fn keywords_for(&self, domain: Domain) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.domain == domain)
            .map(|e| e.keywords.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in Catalyst Center keyword table.
    pub fn builtin() -> Self {
        Self::new()
            .with_domain(
                Domain::Authentication,
                [
                    "connect", "login", "auth", "authenticate", "sign in", "credential",
                    "user", "users", "role", "roles", "rbac", "permission", "permissions",
                    "token", "ldap", "aaa",
                ],
            )
            .with_domain(
                Domain::Sda,
                [
                    "sda", "fabric", "sd-access", "software defined access", "virtual network",
                    "anycast", "gateway", "transit", "multicast", "layer2", "layer3",
                    "l2", "l3", "port assignment", "edge", "border", "control plane",
                    "provision",
                ],
            )
            .with_domain(
                Domain::Devices,
                [
                    "device", "devices", "network device", "hostname", "serial", "platform",
                    "config", "configuration", "device health", "physical component",
                    "module", "stack",
                ],
            )
            .with_domain(
                Domain::Inventory,
                [
                    "inventory", "count", "number of", "total", "mismatch", "resync",
                    "sync interval", "reachability", "unreachable",
                ],
            )
            .with_domain(
                Domain::Interfaces,
                [
                    "interface", "interfaces", "port", "ports", "vlan", "vlans", "uplink",
                    "downlink", "speed", "duplex",
                ],
            )
            .with_domain(
                Domain::Connectivity,
                [
                    "connectivity", "topology", "wired", "link", "links", "ethernet",
                    "network health", "neighbor", "neighbors", "path",
                ],
            )
            .with_domain(
                Domain::Wireless,
                [
                    "wireless", "wifi", "wi-fi", "wlan", "ssid", "access point",
                    "access points", "ap", "rf profile", "client",
                ],
            )
            .with_domain(
                Domain::Events,
                [
                    "event", "events", "notification", "notifications", "alert", "alerts",
                    "subscription", "subscriptions", "webhook", "syslog", "issue", "issues",
                ],
            )
            .with_domain(
                Domain::System,
                [
                    "system", "backup", "restore", "release", "version", "license",
                    "licenses", "audit", "ntp", "dns", "cluster", "node", "nodes",
                    "disaster recovery", "system health",
                ],
            )
            .with_domain(
                Domain::Appliance,
                [
                    "imc", "appliance", "hardware", "server", "power", "bios", "raid",
                    "disk", "fan", "psu",
                ],
            )
            .with_domain(
                Domain::Ecosystem,
                [
                    "itsm", "servicenow", "integration", "integrations", "ticket",
                    "siem", "splunk", "third party", "third-party",
                ],
            )
            .with_domain(
                Domain::Task,
                [
                    "task", "tasks", "job", "jobs", "progress", "failed", "failure",
                    "pending", "execution", "operation",
                ],
            )
    }
}

/// An intent shortcut: any of `words` appearing as a whole word routes the
/// query straight to `domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRule {
    pub domain: Domain,
    pub words: Vec<String>,
}

impl OverrideRule {
    pub fn new<I, S>(domain: Domain, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain,
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    /// The built-in override rules, highest priority first.
    ///
    /// Authentication comes first: "connect" must always reach the session
    /// tool even when the rest of the query is full of device keywords.
    pub fn builtin() -> Vec<OverrideRule> {
        vec![
            OverrideRule::new(
                Domain::Authentication,
                ["connect", "login", "log in", "auth", "authenticate", "sign in"],
            ),
            OverrideRule::new(
                Domain::Sda,
                [
                    "fabric", "fabrics", "sda", "sd-access", "anycast", "transit",
                    "virtual network", "virtual networks",
                ],
            ),
            OverrideRule::new(
                Domain::Devices,
                ["device", "devices", "inventory", "switch", "switches", "router", "routers"],
            ),
            OverrideRule::new(
                Domain::Task,
                ["task", "tasks", "job", "jobs", "status of"],
            ),
        ]
    }
}
