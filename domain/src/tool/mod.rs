//! Tool domain module
//!
//! Every operation the gateway exposes is a tool: a named entry in a group's
//! [`ToolCatalog`], invoked with a [`ToolCall`], answered with a [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolCatalog  │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (per group)  │    │ (invocation) │    │ (JSON/text)  │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Each [`ToolDefinition`] carries lower-case keywords so a group can suggest
//! tools for a free-text query, and a [`ToolAccess`] marking whether the
//! call may start a remote task.

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolAccess, ToolCall, ToolCatalog, ToolDefinition, ToolParameter};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{NOT_CONNECTED_MESSAGE, ToolError, ToolResult};
