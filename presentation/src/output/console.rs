//! Console output formatting

use crate::cli::commands::OutputFormat;
use catc_application::GroupTools;
use catc_domain::{Classification, ClassificationReason, ToolAccess, ToolResult};
use colored::Colorize;

/// Formats gateway results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Tool result in the requested format.
    pub fn format_result(result: &ToolResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => result.to_json().to_string(),
            OutputFormat::Text if result.is_success() => result.render(),
            OutputFormat::Text => result.render().red().to_string(),
        }
    }

    /// Answer of a routed query, prefixed with where it went.
    pub fn format_answer(domain: &str, group: &str, answer: &str) -> String {
        format!(
            "{} {}\n\n{}",
            "Routed to:".cyan().bold(),
            route_label(domain, group),
            answer
        )
    }

    pub fn format_classification(query: &str, classification: &Classification, group: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), query));
        output.push_str(&format!(
            "{} {}\n",
            "Domain:".cyan().bold(),
            route_label(classification.domain.as_str(), group)
        ));

        let reason = match &classification.reason {
            ClassificationReason::Override { word } => format!("override word '{}'", word),
            ClassificationReason::Scored { score } => format!("keyword score {}", score),
            ClassificationReason::Default => "no keyword matched, default domain".to_string(),
        };
        output.push_str(&format!("{} {}\n", "Reason:".cyan().bold(), reason));

        let scored: Vec<String> = classification
            .scores
            .iter()
            .filter(|s| s.score > 0)
            .map(|s| format!("{}={}", s.domain, s.score))
            .collect();
        if !scored.is_empty() {
            output.push_str(&format!("{} {}\n", "Scores:".cyan().bold(), scored.join(", ")));
        }
        output
    }

    /// Tool listing grouped by tool group.
    pub fn format_tools(groups: &[GroupTools]) -> String {
        let mut output = String::new();
        for group in groups {
            output.push_str(&Self::section_header(&format!(
                "{} ({} tools)",
                group.group,
                group.tools.len()
            )));
            for tool in &group.tools {
                let marker = match tool.access {
                    ToolAccess::Read => "R".green(),
                    ToolAccess::Write => "W".yellow(),
                };
                output.push_str(&format!(
                    "  [{}] {} - {}\n",
                    marker,
                    tool.name.bold(),
                    catc_domain::util::first_line(&tool.description)
                ));
            }
        }
        output
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }
}

fn route_label(domain: &str, group: &str) -> String {
    if domain == group {
        domain.to_string()
    } else {
        format!("{} (group {})", domain, group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catc_domain::{DomainClassifier, ToolDefinition, ToolError};
    use serde_json::json;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_result_json() {
        plain();
        let ok = ToolResult::success("get_sites", json!({"response": []}));
        assert_eq!(
            ConsoleFormatter::format_result(&ok, OutputFormat::Json),
            r#"{"response":[]}"#
        );

        let failed = ToolResult::failure("get_sites", ToolError::not_connected());
        assert_eq!(
            ConsoleFormatter::format_result(&failed, OutputFormat::Json),
            r#"{"error":"Not connected. Use connect() first."}"#
        );
    }

    #[test]
    fn test_format_result_text() {
        plain();
        let text = ToolResult::text("check_task_status", "Task t-1\nStatus: COMPLETED");
        assert_eq!(
            ConsoleFormatter::format_result(&text, OutputFormat::Text),
            "Task t-1\nStatus: COMPLETED"
        );
    }

    #[test]
    fn test_format_classification_override() {
        plain();
        let classification = DomainClassifier::default().classify_detailed("connect to switch inventory");
        let shown = ConsoleFormatter::format_classification(
            "connect to switch inventory",
            &classification,
            "authentication",
        );
        assert!(shown.contains("Domain: authentication\n"));
        assert!(shown.contains("override word 'connect'"));
    }

    #[test]
    fn test_format_tools() {
        plain();
        let groups = vec![GroupTools {
            group: "task".to_string(),
            tools: vec![ToolDefinition::new(
                "get_task_by_id",
                "Get a task by id.\nMore detail.",
                ToolAccess::Read,
            )],
        }];
        let shown = ConsoleFormatter::format_tools(&groups);
        assert!(shown.contains("── task (1 tools) ──"));
        assert!(shown.contains("  [R] get_task_by_id - Get a task by id.\n"));
    }
}
