//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

/// Output format for tool results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text, JSON pretty-printed
    #[default]
    Text,
    /// Single-line JSON
    Json,
}

/// CLI arguments for catc-gateway
#[derive(Parser, Debug)]
#[command(name = "catc-gateway")]
#[command(author, version, about = "Catalyst Center tool gateway with natural-language routing")]
#[command(long_about = r#"
catc-gateway exposes Cisco Catalyst Center REST APIs as named tools, grouped
by functional area. A free-text query is classified into a domain and handed
to the tool group that serves it.

Configuration files are loaded from (in priority order):
1. CATC_* environment variables
2. --config <path>     Explicit config file
3. ./catc-gateway.toml Project-level config
4. ~/.config/catc-gateway/config.toml   Global config

Example:
  catc-gateway route "connect to https://10.1.1.1 admin Secret123"
  catc-gateway call get_device_list --arg family=Switches
  catc-gateway tools --group task
  catc-gateway serve
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Catalyst Center base URL; connects at startup when credentials are complete
    #[arg(long, env = "CATC_BASE_URL", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    #[arg(long, env = "CATC_USERNAME", global = true)]
    pub username: Option<String>,

    #[arg(long, env = "CATC_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Classify a free-text query and let the matching tool group answer it
    Route {
        /// The query, e.g. "show me the fabric sites"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Invoke one tool by name
    Call {
        /// Tool name, e.g. get_device_list
        tool: String,

        /// Tool argument as key=value; values that parse as JSON keep their type
        #[arg(short, long = "arg", value_name = "KEY=VALUE", value_parser = parse_tool_arg)]
        args: Vec<(String, Value)>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List tools, optionally of a single group
    Tools {
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Show how a query would be classified, without running it
    Classify {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Serve the gateway tools as an MCP server on stdin/stdout
    Serve,

    /// Start the interactive shell
    Repl,
}

impl Command {
    /// Words of a multi-word query argument joined back into one string.
    pub fn joined(words: &[String]) -> String {
        words.join(" ")
    }
}

/// Parse a `key=value` tool argument.
///
/// `count=5` becomes a number and `monitor=true` a boolean; anything that is
/// not valid JSON stays a plain string.
pub fn parse_tool_arg(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
