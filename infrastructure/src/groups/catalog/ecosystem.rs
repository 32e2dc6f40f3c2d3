use crate::groups::endpoint::Endpoint;

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_itsm_integrations",
            "/dna/intent/api/v1/integration-settings/itsm/instances",
            "List ITSM integration instances such as ServiceNow.",
        )
        .paged()
        .keywords(&["itsm", "servicenow", "service management", "ticket"]),
        Endpoint::get(
            "get_itsm_integration_by_id",
            "/dna/intent/api/v1/integration-settings/instances/itsm/{instance_id}",
            "Get one ITSM integration instance.",
        )
        .path_param("instance_id", "Instance id")
        .keywords(&["itsm instance"]),
        Endpoint::get(
            "get_integration_events",
            "/dna/intent/api/v1/integration/events",
            "List events forwarded to external integrations and their delivery status.",
        )
        .query("instance_id", "instanceId", "Integration instance id")
        .query("status", "status", "Delivery status")
        .paged()
        .keywords(&["integration", "webhook", "external", "siem", "monitoring"]),
    ]
}
