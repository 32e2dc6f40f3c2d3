//! Logical routing domains.
//!
//! A [`Domain`] is a user-facing intent category. It is deliberately finer
//! grained than the set of implemented tool groups; see
//! [`GroupMap`](super::group_map::GroupMap) for the many-to-one mapping.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Logical category of a user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Session establishment, users, roles
    Authentication,
    /// Software-Defined Access fabrics, virtual networks, transits
    Sda,
    /// Network device inventory and details
    Devices,
    /// Inventory queries (counts, mismatches, resync)
    Inventory,
    /// Device interfaces and ports
    Interfaces,
    /// Wired/wireless connectivity and topology
    Connectivity,
    /// SSIDs, access points and wireless profiles
    Wireless,
    /// Events, notifications and subscriptions
    Events,
    /// Platform health, backups, releases
    System,
    /// Cisco IMC appliance hardware
    Appliance,
    /// ITSM and third-party integrations
    Ecosystem,
    /// Asynchronous task tracking
    Task,
}

impl Domain {
    /// Every domain, in declaration order.
    pub const ALL: [Domain; 12] = [
        Domain::Authentication,
        Domain::Sda,
        Domain::Devices,
        Domain::Inventory,
        Domain::Interfaces,
        Domain::Connectivity,
        Domain::Wireless,
        Domain::Events,
        Domain::System,
        Domain::Appliance,
        Domain::Ecosystem,
        Domain::Task,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Authentication => "authentication",
            Domain::Sda => "sda",
            Domain::Devices => "devices",
            Domain::Inventory => "inventory",
            Domain::Interfaces => "interfaces",
            Domain::Connectivity => "connectivity",
            Domain::Wireless => "wireless",
            Domain::Events => "events",
            Domain::System => "system",
            Domain::Appliance => "appliance",
            Domain::Ecosystem => "ecosystem",
            Domain::Task => "task",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownDomain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>().unwrap(), domain);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" SDA ".parse::<Domain>().unwrap(), Domain::Sda);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "billing".parse::<Domain>().unwrap_err();
        assert!(err.to_string().contains("billing"));
    }
}
