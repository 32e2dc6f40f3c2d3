//! Tool group port
//!
//! A tool group is the unit the router loads: a catalogue of tools plus a
//! free-text entry point. Groups are built by the infrastructure layer and
//! shared behind `Arc<dyn ToolGroup>`.

use async_trait::async_trait;
use catc_domain::tool::{ToolCall, ToolCatalog, ToolResult};
use catc_domain::util::{first_line, truncate_chars};

/// Maximum number of suggestions in a keyword answer
pub const MAX_SUGGESTED_TOOLS: usize = 5;
/// Maximum number of tool names in the fallback listing
pub const MAX_LISTED_TOOLS: usize = 10;
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// How the router should answer a free-text query with a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupCapability {
    /// Keyword suggestions via [`ToolGroup::process_request`]
    #[default]
    Basic,
    /// The group acts on the query itself via [`ToolGroup::run_tools`]
    RichText,
}

#[async_trait]
pub trait ToolGroup: Send + Sync {
    /// Group name (e.g. "devices")
    fn id(&self) -> &str;

    /// Tools of this group, in presentation order
    fn catalog(&self) -> &ToolCatalog;

    fn capability(&self) -> GroupCapability {
        GroupCapability::Basic
    }

    /// Execute one tool. Never fails: errors are carried in the result.
    async fn execute(&self, call: &ToolCall) -> ToolResult;

    /// Suggest tools whose keywords occur in the query; without a match,
    /// fall back to [`run_tools`](Self::run_tools).
    async fn process_request(&self, query: &str) -> String {
        match suggest_tools(self.id(), self.catalog(), query) {
            Some(answer) => answer,
            None => self.run_tools(query).await,
        }
    }

    /// Default answer: list the first tools of the group.
    async fn run_tools(&self, _query: &str) -> String {
        list_tools(self.id(), self.catalog())
    }
}

/// Keyword suggestions for a query, or `None` when no tool matches.
pub fn suggest_tools(group: &str, catalog: &ToolCatalog, query: &str) -> Option<String> {
    let relevant = catalog.analyze_query(query);
    if relevant.is_empty() {
        return None;
    }

    let lines: Vec<String> = relevant
        .iter()
        .take(MAX_SUGGESTED_TOOLS)
        .map(|tool| {
            format!(
                "- {}: {}...",
                tool.name,
                truncate_chars(first_line(&tool.description), DESCRIPTION_PREVIEW_CHARS)
            )
        })
        .collect();

    Some(format!(
        "Based on your query '{}', here are the most relevant tools in {}:\n\n{}",
        query,
        group,
        lines.join("\n")
    ))
}

/// `Available tools in <group>: a, b, c...`
pub fn list_tools(group: &str, catalog: &ToolCatalog) -> String {
    let names: Vec<&str> = catalog.names().take(MAX_LISTED_TOOLS).collect();
    let more = if catalog.len() > MAX_LISTED_TOOLS {
        "..."
    } else {
        ""
    };
    format!("Available tools in {}: {}{}", group, names.join(", "), more)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catc_domain::tool::{ToolAccess, ToolDefinition};

    struct StaticGroup {
        catalog: ToolCatalog,
    }

    #[async_trait]
    impl ToolGroup for StaticGroup {
        fn id(&self) -> &str {
            "events"
        }

        fn catalog(&self) -> &ToolCatalog {
            &self.catalog
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            ToolResult::text(&call.tool_name, "ok")
        }
    }

    fn group(count: usize) -> StaticGroup {
        let mut catalog = ToolCatalog::new().register(
            ToolDefinition::new(
                "get_notifications",
                "Get the list of event notifications.\nLonger details follow.",
                ToolAccess::Read,
            )
            .with_keywords(["notification"]),
        );
        for i in 1..count {
            catalog = catalog.register(ToolDefinition::new(
                format!("tool_{}", i),
                "x",
                ToolAccess::Read,
            ));
        }
        StaticGroup { catalog }
    }

    #[tokio::test]
    async fn test_process_request_suggests_tools() {
        let answer = group(1).process_request("show me notifications").await;
        assert_eq!(
            answer,
            "Based on your query 'show me notifications', here are the most relevant tools in events:\n\n\
             - get_notifications: Get the list of event notifications...."
        );
    }

    #[tokio::test]
    async fn test_process_request_falls_back_to_listing() {
        let answer = group(3).process_request("unrelated").await;
        assert_eq!(
            answer,
            "Available tools in events: get_notifications, tool_1, tool_2"
        );
    }

    #[test]
    fn test_list_tools_truncates_after_ten() {
        let g = group(12);
        let listing = list_tools(g.id(), g.catalog());
        assert!(listing.ends_with("tool_9..."));
        assert_eq!(listing.matches(", ").count(), MAX_LISTED_TOOLS - 1);
    }

    #[test]
    fn test_default_capability() {
        assert_eq!(group(1).capability(), GroupCapability::Basic);
    }
}
