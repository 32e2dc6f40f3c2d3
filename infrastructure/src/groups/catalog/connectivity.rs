//! Client, topology and wireless endpoints.
//!
//! Fabric questions are not answered here; see [`SDA_FORWARD_KEYWORDS`].

use crate::groups::endpoint::Endpoint;

/// Queries mentioning any of these go to the sda group.
pub const SDA_FORWARD_KEYWORDS: &[&str] = &[
    "sda",
    "fabric",
    "sd-access",
    "software defined access",
    "virtual network",
    "fabric site",
    "anycast",
    "transit",
];

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_client_health",
            "/dna/intent/api/v1/client-health",
            "Get wired and wireless client health scores.",
        )
        .int_query("timestamp", "timestamp", "Epoch milliseconds")
        .keywords(&["client health", "connectivity health", "network health"]),
        Endpoint::get(
            "get_client_detail",
            "/dna/intent/api/v1/client-detail",
            "Get details of one client by MAC address.",
        )
        .required_query("mac_address", "macAddress", "Client MAC address")
        .int_query("timestamp", "timestamp", "Epoch milliseconds")
        .keywords(&["client detail", "client info"]),
        Endpoint::get(
            "get_physical_topology",
            "/dna/intent/api/v1/topology/physical-topology",
            "Get the physical topology: nodes and links.",
        )
        .query("node_type", "nodeType", "Node type filter")
        .keywords(&["topology", "network map", "connectivity map", "link status"]),
        Endpoint::get(
            "get_vlan_names",
            "/dna/intent/api/v1/topology/vlan/vlan-names",
            "List the VLAN names known to the topology service.",
        )
        .keywords(&["vlan", "switching", "wired"]),
        Endpoint::get(
            "get_wireless_profiles",
            "/dna/intent/api/v1/wireless/profile",
            "List wireless network profiles.",
        )
        .query("profile_name", "profileName", "Profile name")
        .keywords(&["wireless", "wifi", "wlan", "wireless profile"]),
        Endpoint::get(
            "get_enterprise_ssids",
            "/dna/intent/api/v1/enterprise-ssid",
            "List enterprise SSIDs.",
        )
        .query("ssid_name", "ssidName", "SSID name")
        .keywords(&["ssid", "enterprise ssid"]),
        Endpoint::get(
            "get_access_point_configuration",
            "/dna/intent/api/v1/wireless/accesspoint-configuration/summary",
            "Get the configuration summary of an access point.",
        )
        .required_query("key", "key", "Access point Ethernet MAC address")
        .keywords(&["access point", "ap config"]),
    ]
}
