//! Slash commands understood by the interactive shell

use crate::cli::commands::parse_tool_arg;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// Session state, via the `session_status` tool
    Status,
    /// Groups loaded so far
    Groups,
    Tools(Option<String>),
    Classify(String),
    Call {
        tool: String,
        args: Vec<(String, Value)>,
    },
    /// Query routed to a tool group
    Query(String),
}

impl ReplCommand {
    /// Parse one input line; anything not starting with `/` is a query.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(ReplCommand::Query(line.to_string()));
        };

        let (name, tail) = match rest.split_once(char::is_whitespace) {
            Some((name, tail)) => (name, tail.trim()),
            None => (rest, ""),
        };

        match name {
            "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
            "help" | "h" | "?" => Ok(ReplCommand::Help),
            "status" => Ok(ReplCommand::Status),
            "groups" => Ok(ReplCommand::Groups),
            "tools" => Ok(ReplCommand::Tools(
                (!tail.is_empty()).then(|| tail.to_string()),
            )),
            "classify" if !tail.is_empty() => Ok(ReplCommand::Classify(tail.to_string())),
            "classify" => Err("Usage: /classify <query>".to_string()),
            "call" => {
                let mut words = tail.split_whitespace();
                let tool = words
                    .next()
                    .ok_or_else(|| "Usage: /call <tool> [key=value]...".to_string())?;
                let args = words.map(parse_tool_arg).collect::<Result<Vec<_>, _>>()?;
                Ok(ReplCommand::Call {
                    tool: tool.to_string(),
                    args,
                })
            }
            other => Err(format!(
                "Unknown command: /{}\nType /help for available commands",
                other
            )),
        }
    }
}

pub const HELP: &str = "\
Commands:
  /help, /h, /?            - Show this help
  /status                  - Show the Catalyst Center session
  /groups                  - Show tool groups loaded so far
  /tools [group]           - List tools
  /classify <query>        - Show how a query would be routed
  /call <tool> [key=value] - Invoke a tool directly
  /quit, /exit, /q         - Exit

Anything else is routed to the matching tool group, e.g.
  connect to https://10.1.1.1 admin Secret123
  show me the fabric sites";
