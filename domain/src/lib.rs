//! Domain layer for catc-gateway
//!
//! This crate contains the pure logic of the gateway: no I/O, no async.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! A free-text query is classified into one of twelve functional
//! [`Domain`]s by the keyword [`DomainClassifier`]. Override words are checked
//! first, then every domain's keyword list is scored and the best wins.
//! The [`GroupMap`] folds domains onto the tool groups that serve them.
//!
//! ## Tasks
//!
//! Write operations on Catalyst Center return a task id. [`extract_task_id`]
//! finds it in a response; [`TaskRecord`] is the observed task and
//! [`TaskStatus`] its derived status.
//!
//! ## Tools
//!
//! Each group publishes a [`ToolCatalog`] of [`ToolDefinition`]s that callers
//! invoke with a [`ToolCall`].

pub mod core;
pub mod routing;
pub mod session;
pub mod task;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use routing::{
    Classification, ClassificationReason, DEFAULT_DOMAIN, Domain, DomainClassifier, DomainKeywords,
    DomainScore, GroupMap, KeywordTable, OverrideRule,
};
pub use session::{ConnectParseError, Credentials, parse_connect_command};
pub use task::{
    MAX_TASK_PAGE, SortOrder, TaskQuery, TaskRecord, TaskRecordError, TaskStatus,
    TaskStatusFilter, extract_task_id, is_valid_task_id,
};
pub use tool::{
    DefaultToolValidator, NOT_CONNECTED_MESSAGE, ToolAccess, ToolCall, ToolCatalog,
    ToolDefinition, ToolError, ToolParameter, ToolResult, ToolValidator,
};
