//! MCP server over stdio
//!
//! Every catalogue tool is published as an MCP tool, next to one free-text
//! tool that goes through the domain router.

mod stdio;
mod tools;

pub use stdio::StdioServer;
pub use tools::{GatewayTool, ROUTE_TOOL};
