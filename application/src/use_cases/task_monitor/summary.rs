//! Plain-text renderings of task records.

use catc_domain::TaskRecord;
use chrono::{TimeZone, Utc};
use std::fmt::Display;

/// Multi-line status summary of one task.
pub fn status_summary(record: &TaskRecord) -> String {
    let mut lines = vec![
        "Task Status Summary:".to_string(),
        "-------------------".to_string(),
        format!("Task ID: {}", record.id_or_unknown()),
        format!("Status: {}", record.status()),
        format!("Service Type: {}", record.service_type_or_unknown()),
        format!("Progress: {}", record.progress_or_unknown()),
    ];

    if let Some(secs) = record.duration_secs() {
        lines.push(format!("Duration: {:.2} seconds", secs));
    } else if record.has_started() {
        lines.push("Still running...".to_string());
    }

    let error_code = non_empty(record.error_code.as_deref());
    let failure_reason = non_empty(record.failure_reason.as_deref());
    if record.is_error && (error_code.is_some() || failure_reason.is_some()) {
        lines.push(String::new());
        lines.push("Error Details:".to_string());
        lines.push("--------------".to_string());
        if let Some(code) = error_code {
            lines.push(format!("Error Code: {}", code));
        }
        if let Some(reason) = failure_reason {
            lines.push(format!("Failure Reason: {}", reason));
        }
    }

    lines.join("\n")
}

/// One entry of the recent-failures report, with times in `tz`.
pub fn failure_entry<Tz>(record: &TaskRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "Task ID: {}\nService: {}\nTime: {}\nError Code: {}\nReason: {}",
        record.id_or_unknown(),
        record.service_type_or_unknown(),
        format_epoch_millis(record.start_time, tz),
        record.error_code.as_deref().unwrap_or(""),
        record.failure_reason.as_deref().unwrap_or("Unknown reason"),
    )
}

/// `%Y-%m-%d %H:%M:%S` in `tz`, or `Unknown` when unset or out of range.
pub fn format_epoch_millis<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if millis <= 0 {
        return "Unknown".to_string();
    }
    match tz.timestamp_millis_opt(millis).earliest() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "Unknown".to_string(),
    }
}

/// Convenience wrapper for UTC rendering.
pub fn format_epoch_millis_utc(millis: i64) -> String {
    format_epoch_millis(millis, &Utc)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
