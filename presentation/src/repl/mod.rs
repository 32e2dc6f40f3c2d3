//! Interactive shell
//!
//! A reedline-based shell: plain lines are routed queries, `/` lines are
//! shell commands.

mod command;
mod shell;

pub use command::ReplCommand;
pub use shell::GatewayRepl;
