//! Presentation layer for catc-gateway
//!
//! This crate contains CLI definitions, output formatters, the stdio
//! MCP server and the interactive shell.

pub mod cli;
pub mod output;
pub mod repl;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use repl::GatewayRepl;
pub use server::StdioServer;
