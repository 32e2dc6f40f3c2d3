//! Software-Defined Access fabric endpoints.

use crate::groups::endpoint::Endpoint;

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_sites",
            "/dna/intent/api/v1/site",
            "Get the site hierarchy: areas, buildings and floors.",
        )
        .query("name", "name", "Site name hierarchy")
        .query("site_id", "siteId", "Site UUID")
        .query("type", "type", "area, building or floor")
        .paged()
        .keywords(&["site", "sites", "location", "locations"]),
        Endpoint::get(
            "get_fabric_sites",
            "/dna/intent/api/v1/sda/fabricSites",
            "List fabric sites.",
        )
        .query("id", "id", "Fabric site id")
        .query("site_id", "siteId", "Site UUID")
        .paged()
        .keywords(&["fabric sites", "sda sites", "fabric locations", "fabric site"]),
        Endpoint::post(
            "add_fabric_site",
            "/dna/intent/api/v1/sda/fabricSites",
            "Turn existing sites into fabric sites. Starts a task.",
        )
        .body("array", "Fabric site definitions: siteId, authenticationProfileName, isPubSubEnabled")
        .keywords(&["add site", "create site", "provision site", "add fabric site"]),
        Endpoint::delete(
            "delete_fabric_site_by_id",
            "/dna/intent/api/v1/sda/fabricSites/{id}",
            "Remove a fabric site. Starts a task.",
        )
        .path_param("id", "Fabric site id")
        .keywords(&["delete fabric site", "remove fabric site"]),
        Endpoint::get(
            "get_fabric_site_count",
            "/dna/intent/api/v1/sda/fabricSites/count",
            "Count fabric sites.",
        )
        .keywords(&["fabric site count"]),
        Endpoint::get(
            "get_fabric_devices",
            "/dna/intent/api/v1/sda/fabricDevices",
            "List the devices of a fabric with their fabric roles.",
        )
        .required_query("fabric_id", "fabricId", "Fabric id")
        .query("network_device_id", "networkDeviceId", "Device UUID")
        .query("device_roles", "deviceRoles", "CONTROL_PLANE_NODE, EDGE_NODE, BORDER_NODE or WIRELESS_CONTROLLER_NODE")
        .paged()
        .keywords(&["fabric device", "sda device", "fabric equipment", "edge", "border", "control plane"]),
        Endpoint::post(
            "add_fabric_devices",
            "/dna/intent/api/v1/sda/fabricDevices",
            "Add devices to a fabric with the given roles. Starts a task.",
        )
        .body("array", "Fabric device definitions")
        .keywords(&["add fabric device"]),
        Endpoint::get(
            "get_layer3_virtual_networks",
            "/dna/intent/api/v1/sda/layer3VirtualNetworks",
            "List layer 3 virtual networks.",
        )
        .query("virtual_network_name", "virtualNetworkName", "Virtual network name")
        .query("fabric_id", "fabricId", "Fabric id")
        .query("anchored_site_id", "anchoredSiteId", "Anchor site id")
        .paged()
        .keywords(&["virtual network", "vn", "layer3", "l3", "layer 3"]),
        Endpoint::post(
            "add_layer3_virtual_networks",
            "/dna/intent/api/v1/sda/layer3VirtualNetworks",
            "Create layer 3 virtual networks. Starts a task.",
        )
        .body("array", "Virtual network definitions")
        .keywords(&["add virtual network", "create vn", "provision vn"]),
        Endpoint::put(
            "update_layer3_virtual_networks",
            "/dna/intent/api/v1/sda/layer3VirtualNetworks",
            "Update layer 3 virtual networks. Starts a task.",
        )
        .body("array", "Virtual network updates")
        .keywords(&["update virtual network"]),
        Endpoint::get(
            "get_layer2_virtual_networks",
            "/dna/intent/api/v1/sda/layer2VirtualNetworks",
            "List layer 2 virtual networks.",
        )
        .query("fabric_id", "fabricId", "Fabric id")
        .query("vlan_name", "vlanName", "VLAN name")
        .int_query("vlan_id", "vlanId", "VLAN id")
        .paged()
        .keywords(&["layer2", "l2", "layer 2"]),
        Endpoint::get(
            "get_anycast_gateways",
            "/dna/intent/api/v1/sda/anycastGateways",
            "List anycast gateways.",
        )
        .query("fabric_id", "fabricId", "Fabric id")
        .query("virtual_network_name", "virtualNetworkName", "Virtual network name")
        .query("ip_pool_name", "ipPoolName", "IP pool name")
        .paged()
        .keywords(&["anycast", "gateway", "gateways"]),
        Endpoint::post(
            "add_anycast_gateways",
            "/dna/intent/api/v1/sda/anycastGateways",
            "Create anycast gateways. Starts a task.",
        )
        .body("array", "Anycast gateway definitions")
        .keywords(&["add anycast", "create gateway"]),
        Endpoint::get(
            "get_multicast_virtual_networks",
            "/dna/intent/api/v1/sda/multicast/virtualNetworks",
            "List multicast configuration of virtual networks.",
        )
        .query("fabric_id", "fabricId", "Fabric id")
        .query("virtual_network_name", "virtualNetworkName", "Virtual network name")
        .paged()
        .keywords(&["multicast", "multicast vn", "multicast networks"]),
        Endpoint::get(
            "get_port_assignments",
            "/dna/intent/api/v1/sda/portAssignments",
            "List host onboarding port assignments of fabric edge devices.",
        )
        .query("fabric_id", "fabricId", "Fabric id")
        .query("network_device_id", "networkDeviceId", "Device UUID")
        .query("interface_name", "interfaceName", "Interface name")
        .paged()
        .keywords(&["port assignment", "interface assignment", "host onboarding"]),
        Endpoint::get(
            "get_port_channels",
            "/dna/intent/api/v1/sda/portChannels",
            "List port channels of fabric devices.",
        )
        .query("fabric_id", "fabricId", "Fabric id")
        .query("network_device_id", "networkDeviceId", "Device UUID")
        .paged()
        .keywords(&["port channel", "port channels"]),
        Endpoint::get(
            "get_transit_networks",
            "/dna/intent/api/v1/sda/transitNetworks",
            "List IP and SDA transit networks.",
        )
        .query("name", "name", "Transit name")
        .query("type", "type", "IP_BASED_TRANSIT, SDA_LISP_PUB_SUB_TRANSIT or SDA_LISP_BGP_TRANSIT")
        .paged()
        .keywords(&["transit", "transit network", "underlay"]),
        Endpoint::get(
            "get_provisioned_devices",
            "/dna/intent/api/v1/sda/provisionDevices",
            "List devices provisioned into fabric sites.",
        )
        .query("site_id", "siteId", "Site UUID")
        .query("network_device_id", "networkDeviceId", "Device UUID")
        .paged()
        .keywords(&["provisioned", "provisioned device"]),
        Endpoint::post(
            "provision_devices",
            "/dna/intent/api/v1/sda/provisionDevices",
            "Provision network devices to sites. Starts a task.",
        )
        .body("array", "Provisioning requests: siteId, networkDeviceId")
        .keywords(&["provision", "deploy", "configure device"]),
        Endpoint::get(
            "get_pending_fabric_events",
            "/dna/intent/api/v1/sda/pendingFabricEvents",
            "List fabric configuration events waiting to be applied.",
        )
        .query("fabric_id", "fabricId", "Fabric id")
        .paged()
        .keywords(&["pending fabric events", "pending events"]),
        Endpoint::get(
            "get_fabric_summary",
            "/dna/data/api/v1/fabricSummary",
            "Summary of fabric sites, zones, devices and virtual networks.",
        )
        .int_query("start_time", "startTime", "Start time, UTC epoch milliseconds")
        .int_query("end_time", "endTime", "End time, UTC epoch milliseconds")
        .keywords(&["fabric summary", "sda summary"]),
    ]
}
