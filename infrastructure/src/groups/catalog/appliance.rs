use crate::groups::endpoint::Endpoint;

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_imc_status",
            "/dna/system/api/v1/ciscoImcs",
            "List the Cisco IMC configuration of each appliance node.",
        )
        .keywords(&["imc", "appliance status", "hardware status"]),
        Endpoint::get(
            "get_imc_by_id",
            "/dna/system/api/v1/ciscoImcs/{id}",
            "Get the Cisco IMC configuration of one node.",
        )
        .path_param("id", "IMC configuration id")
        .keywords(&["imc config", "appliance config"]),
        Endpoint::post(
            "configure_imc",
            "/dna/system/api/v1/ciscoImcs",
            "Add Cisco IMC credentials for an appliance node.",
        )
        .body("object", "{\"nodeId\", \"ipAddress\", \"username\", \"password\"}")
        .keywords(&["configure imc"]),
        Endpoint::get(
            "get_nodes_configuration",
            "/dna/intent/api/v1/nodes-config",
            "Get the network configuration of the cluster nodes.",
        )
        .keywords(&["nodes", "cluster", "system info", "hardware info", "appliance info", "network adapter", "nic"]),
        Endpoint::get(
            "get_disaster_recovery_status",
            "/dna/intent/api/v1/disasterrecovery/system/operationstatus",
            "Get the status of the last disaster recovery operation.",
        )
        .keywords(&["disaster recovery", "failover"]),
    ]
}
