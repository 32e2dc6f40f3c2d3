//! Event notifications and subscriptions.

use crate::groups::endpoint::Endpoint;

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_events",
            "/dna/intent/api/v1/events",
            "Get the catalogue of events that can be subscribed to.",
        )
        .query("event_id", "eventId", "Event id")
        .required_query("tags", "tags", "Event tags, e.g. ASSURANCE")
        .paged()
        .query("sort_by", "sortBy", "Sort field")
        .query("order", "order", "asc or desc")
        .keywords(&["events", "event", "notifications", "alerts"]),
        Endpoint::get(
            "get_event_count",
            "/dna/intent/api/v1/events/count",
            "Count events with the given tags.",
        )
        .query("event_id", "eventId", "Event id")
        .required_query("tags", "tags", "Event tags")
        .keywords(&["event count", "number of events"]),
        Endpoint::get(
            "get_event_series",
            "/dna/intent/api/v1/event/event-series",
            "Get notifications that were raised, filtered by time, severity and domain.",
        )
        .query("event_ids", "eventIds", "Event id(s)")
        .int_query("start_time", "startTime", "Start time, UTC epoch milliseconds")
        .int_query("end_time", "endTime", "End time, UTC epoch milliseconds")
        .query("category", "category", "INFO, WARN, ERROR, ALERT, TASK_PROGRESS, TASK_FAILURE or TASK_COMPLETE")
        .query("severity", "severity", "1 to 5")
        .query("domain", "domain", "Event domain")
        .query("source", "source", "Event source")
        .paged()
        .keywords(&["event series", "event analytics", "event trends", "notification history"]),
        Endpoint::get(
            "get_event_subscriptions",
            "/dna/intent/api/v1/event/subscription",
            "List event subscriptions.",
        )
        .query("event_ids", "eventIds", "Event id(s)")
        .paged()
        .keywords(&["subscription", "subscriptions", "event subscription"]),
        Endpoint::post(
            "create_event_subscription",
            "/dna/intent/api/v1/event/subscription",
            "Create event subscriptions.",
        )
        .body("array", "Subscription definitions: name, filter, subscriptionEndpoints")
        .keywords(&["create subscription", "subscribe", "add subscription"]),
        Endpoint::put(
            "update_event_subscription",
            "/dna/intent/api/v1/event/subscription",
            "Update event subscriptions.",
        )
        .body("array", "Subscription updates")
        .keywords(&["update subscription", "modify subscription"]),
        Endpoint::delete(
            "delete_event_subscription",
            "/dna/intent/api/v1/event/subscription",
            "Delete event subscriptions by id.",
        )
        .required_query("subscriptions", "subscriptions", "Subscription id(s)")
        .keywords(&["delete subscription", "remove subscription", "unsubscribe"]),
        Endpoint::get(
            "get_webhook_destinations",
            "/dna/intent/api/v1/event/webhook",
            "List webhook destinations for event notifications.",
        )
        .query("webhook_ids", "webhookIds", "Webhook id(s)")
        .paged()
        .keywords(&["webhook destination", "notification config", "alert config"]),
        Endpoint::get(
            "get_event_artifacts",
            "/dna/system/api/v1/event/artifact",
            "Get event artifacts: templates and enrichment details of events.",
        )
        .query("event_ids", "eventIds", "Event id(s)")
        .query("tags", "tags", "Event tags")
        .paged()
        .keywords(&["artifacts", "event artifacts", "event details", "event types", "enrichment"]),
    ]
}
