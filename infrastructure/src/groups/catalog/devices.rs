//! Inventory, device health and interface endpoints.

use crate::groups::endpoint::Endpoint;

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_device_list",
            "/dna/intent/api/v1/network-device",
            "Get the list of network devices in inventory, filtered by any of the given attributes. \
             List-valued filters match any of the values.",
        )
        .query("hostname", "hostname", "Device hostname(s)")
        .query("management_ip_address", "managementIpAddress", "Management IP address(es)")
        .query("mac_address", "macAddress", "MAC address(es)")
        .query("serial_number", "serialNumber", "Serial number(s)")
        .query("family", "family", "Device family, e.g. Switches and Hubs")
        .query("platform_id", "platformId", "Platform id(s)")
        .query("role", "role", "Device role, e.g. ACCESS or CORE")
        .query("reachability_status", "reachabilityStatus", "Reachability status")
        .query("software_version", "softwareVersion", "Software version(s)")
        .paged()
        .keywords(&["device", "devices", "inventory", "list devices", "network devices"]),
        Endpoint::get(
            "get_device_by_id",
            "/dna/intent/api/v1/network-device/{id}",
            "Get a network device by its id.",
        )
        .path_param("id", "Device UUID")
        .keywords(&["device details", "device info", "specific device", "device id"]),
        Endpoint::post(
            "add_device",
            "/dna/intent/api/v1/network-device",
            "Add a device to inventory with its credentials. Starts a task.",
        )
        .body("object", "Device definition: IP addresses, CLI/SNMP credentials, type")
        .keywords(&["add device", "register device", "discover device", "new device"]),
        Endpoint::put(
            "update_device_details",
            "/dna/intent/api/v1/network-device",
            "Update the credentials and management details of devices in inventory. Starts a task.",
        )
        .body("object", "Device update request")
        .keywords(&["update device", "modify device", "edit device"]),
        Endpoint::delete(
            "delete_device_by_id",
            "/dna/intent/api/v1/network-device/{id}",
            "Delete a network device from inventory. Starts a task.",
        )
        .path_param("id", "Device UUID")
        .bool_query("clean_config", "cleanConfig", "Remove the configuration pushed by Catalyst Center")
        .keywords(&["delete device", "remove device", "unregister device"]),
        Endpoint::get(
            "get_device_health",
            "/dna/intent/api/v1/device-health",
            "Get device health from Assurance, optionally filtered by role, site or health category.",
        )
        .query("device_role", "deviceRole", "CORE, ACCESS, DISTRIBUTION, ROUTER, WLC or AP")
        .query("site_id", "siteId", "Site UUID")
        .query("health", "health", "POOR, FAIR or GOOD")
        .int_query("start_time", "startTime", "Start time, UTC epoch milliseconds")
        .int_query("end_time", "endTime", "End time, UTC epoch milliseconds")
        .paged()
        .keywords(&["device health", "health status", "device performance"]),
        Endpoint::post(
            "get_network_devices_count",
            "/dna/data/api/v1/networkDevices/query/count",
            "Count network devices matching a filter body.",
        )
        .body("object", "Filter definition")
        .keywords(&["device count", "number of devices", "total devices"]),
        Endpoint::get(
            "get_network_device_interface_count",
            "/dna/data/api/v1/interfaces/count",
            "Count interfaces across network devices.",
        )
        .query("network_device_id", "networkDeviceId", "Device UUID")
        .query("interface_id", "interfaceId", "Interface UUID")
        .query("site_hierarchy", "siteHierarchy", "Site name hierarchy")
        .int_query("start_time", "startTime", "Start time, UTC epoch milliseconds")
        .int_query("end_time", "endTime", "End time, UTC epoch milliseconds")
        .keywords(&["interface", "interfaces", "port count", "network interfaces"]),
        Endpoint::get(
            "get_device_config_by_id",
            "/dna/intent/api/v1/network-device/{network_device_id}/config",
            "Get the running configuration of a device.",
        )
        .path_param("network_device_id", "Device UUID")
        .keywords(&["device config", "configuration", "device settings"]),
        Endpoint::get(
            "get_device_config_count",
            "/dna/intent/api/v1/network-device/config/count",
            "Count devices whose configuration has been collected.",
        )
        .keywords(&["config count"]),
        Endpoint::put(
            "update_interface_details",
            "/dna/intent/api/v1/interface/{interface_uuid}",
            "Update description, admin status, VLAN or voice VLAN of an interface. Starts a task.",
        )
        .path_param("interface_uuid", "Interface UUID")
        .query("deployment_mode", "deploymentMode", "Preview or Deploy")
        .body("object", "Interface changes")
        .keywords(&["interface config", "port config", "interface settings"]),
        Endpoint::get(
            "legit_operations_for_interface",
            "/dna/intent/api/v1/interface/{interface_uuid}/legit-operation",
            "List the operations allowed on an interface.",
        )
        .path_param("interface_uuid", "Interface UUID")
        .keywords(&["interface operations", "valid operations", "allowed operations"]),
        Endpoint::get(
            "get_device_interface_vlans",
            "/dna/intent/api/v1/network-device/{id}/vlan",
            "Get the VLANs configured on a device's interfaces.",
        )
        .path_param("id", "Device UUID")
        .query("interface_type", "interfaceType", "Interface type filter")
        .keywords(&["device vlan", "interface vlan"]),
        Endpoint::get(
            "get_resync_interval_for_the_network_device",
            "/dna/intent/api/v1/networkDevices/{id}/resyncIntervalSettings",
            "Get the resync interval of a device.",
        )
        .path_param("id", "Device UUID")
        .keywords(&["resync", "sync interval", "device sync"]),
        Endpoint::put(
            "update_resync_interval_for_the_network_device",
            "/dna/intent/api/v1/networkDevices/{id}/resyncIntervalSettings",
            "Update the resync interval of a device.",
        )
        .path_param("id", "Device UUID")
        .body("object", "{\"interval\": minutes}")
        .keywords(&["update resync", "change sync interval"]),
        Endpoint::get(
            "get_the_details_of_physical_components_of_the_given_device",
            "/dna/intent/api/v1/network-device/{device_uuid}/equipment",
            "Get power supplies, fans and other physical components of a device.",
        )
        .path_param("device_uuid", "Device UUID")
        .query("type", "type", "PowerSupply, Fan, Chassis, Backplane, Module or PROVISIONED")
        .keywords(&["physical components", "hardware details", "device components"]),
        Endpoint::get(
            "get_inventory_insight_device_link_mismatch",
            "/dna/intent/api/v1/network-device/insight/{site_id}/device-link",
            "Find links whose two ends disagree on VLAN or speed/duplex.",
        )
        .path_param("site_id", "Site UUID")
        .required_query("category", "category", "vlan or speed-duplex")
        .paged()
        .keywords(&["mismatch", "link mismatch", "inventory mismatch"]),
        Endpoint::get(
            "get_planned_access_points_for_floor",
            "/dna/intent/api/v1/floors/{floor_id}/planned-access-points",
            "List the planned access points of a floor.",
        )
        .path_param("floor_id", "Floor UUID")
        .paged()
        .keywords(&["planned access point", "floor plan"]),
    ]
}
