//! Platform, health and audit endpoints.

use crate::groups::endpoint::Endpoint;

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_release_summary",
            "/dna/intent/api/v1/dnac-release",
            "Get the Catalyst Center release summary.",
        )
        .keywords(&["release", "version", "platform"]),
        Endpoint::get(
            "get_installed_packages",
            "/dna/intent/api/v1/dnac-packages",
            "List installed platform packages and their versions.",
        )
        .keywords(&["packages", "platform management"]),
        Endpoint::get(
            "get_system_health",
            "/dna/intent/api/v1/diagnostics/system/health",
            "Get health events of the Catalyst Center system.",
        )
        .query("summary", "summary", "true to return only a summary")
        .query("domain", "domain", "Health domain")
        .query("subdomain", "subdomain", "Health subdomain")
        .paged()
        .keywords(&["system health", "health check", "system status"]),
        Endpoint::get(
            "get_performance_metrics",
            "/dna/intent/api/v1/diagnostics/system/performance",
            "Get CPU, memory and network utilisation of the system.",
        )
        .query("kpi", "kpi", "cpu, memory or network")
        .query("function", "function", "average, max or utilization")
        .int_query("start_time", "startTime", "Start time, UTC epoch milliseconds")
        .int_query("end_time", "endTime", "End time, UTC epoch milliseconds")
        .keywords(&["performance", "metrics", "system performance"]),
        Endpoint::get(
            "get_audit_logs",
            "/dna/data/api/v1/event/event-series/audit-logs",
            "Get audit log records of configuration and user actions.",
        )
        .query("user_id", "userId", "User id")
        .query("category", "category", "INFO, WARN or ERROR")
        .int_query("start_time", "startTime", "Start time, UTC epoch milliseconds")
        .int_query("end_time", "endTime", "End time, UTC epoch milliseconds")
        .paged()
        .keywords(&["audit", "audit trail", "system logs", "logs"]),
        Endpoint::get(
            "get_backups",
            "/dna/system/api/v1/backup",
            "List system backups.",
        )
        .keywords(&["backup", "system backup"]),
        Endpoint::post(
            "create_backup",
            "/dna/system/api/v1/backup",
            "Start a system backup. Starts a task.",
        )
        .body("object", "{\"name\": backup name, \"scope\": CISCO_DNA_DATA_WITH_ASSURANCE or CISCO_DNA_DATA_WITHOUT_ASSURANCE}")
        .keywords(&["create backup"]),
        Endpoint::get(
            "get_license_summary",
            "/dna/intent/api/v1/licenses/device/summary",
            "Get the license summary of managed devices.",
        )
        .required_query("page_number", "page_number", "Page number")
        .required_query("order", "order", "asc or des")
        .required_query("limit", "limit", "Page size")
        .keywords(&["license", "licenses", "licensing"]),
        Endpoint::get(
            "get_certificates",
            "/dna/system/api/v1/trustedCertificates",
            "List trusted certificates.",
        )
        .keywords(&["certificate", "cert", "ssl", "tls"]),
    ]
}
