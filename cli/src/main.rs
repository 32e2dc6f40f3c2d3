//! CLI entrypoint for catc-gateway
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, bail};
use catc_application::{RouteQueryUseCase, SessionHandle, SessionTaskSource, TaskMonitor};
use catc_domain::{ToolCall, ToolResult};
use catc_infrastructure::{
    CONNECTED_MESSAGE, CatalystConnector, ConfigIssue, ConfigLoader, FileConfig, GroupRegistry,
};
use catc_presentation::{Cli, Command, ConsoleFormatter, GatewayRepl, OutputFormat, StdioServer};
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        println!();
        println!("{}", config.to_display_toml()?);
        return Ok(());
    }

    let _log_guard = logging::init(cli.verbose, &config.logging);
    info!("Starting catc-gateway");

    report_issues(&config.validate())?;

    // === Dependency Injection ===
    let router = Arc::new(build_router(&config));

    auto_connect(&cli, &config, &router).await;

    match cli.command.unwrap_or(Command::Repl) {
        Command::Route { query } => {
            let outcome = router.route_with_domain(&Command::joined(&query)).await;
            println!(
                "{}",
                ConsoleFormatter::format_answer(
                    outcome.domain.as_str(),
                    &outcome.group,
                    &outcome.answer
                )
            );
        }
        Command::Call { tool, args, output } => {
            let call = args
                .into_iter()
                .fold(ToolCall::new(tool), |call, (k, v)| call.with_arg(k, v));
            let result = router.invoke(&call).await;
            println!("{}", ConsoleFormatter::format_result(&result, output));
            ensure_success(&result)?;
        }
        Command::Tools { group } => {
            let groups = router.list_tools(group.as_deref()).await?;
            print!("{}", ConsoleFormatter::format_tools(&groups));
        }
        Command::Classify { query } => {
            let query = Command::joined(&query);
            let classification = router.classify(&query);
            let group = router.group_map().group_for(classification.domain);
            print!(
                "{}",
                ConsoleFormatter::format_classification(&query, &classification, group)
            );
        }
        Command::Serve => {
            StdioServer::new(router)
                .run()
                .await
                .context("MCP server failed")?;
        }
        Command::Repl => {
            GatewayRepl::new(router)
                .run()
                .await
                .context("Interactive shell failed")?;
        }
    }

    Ok(())
}

/// Print every issue to stderr; any error-level issue aborts startup.
fn report_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        if issue.is_error() {
            eprintln!("{} {}", "config error:".red().bold(), issue);
        } else {
            eprintln!("{} {}", "config warning:".yellow().bold(), issue);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("{} configuration error(s), see above", errors);
    }
    Ok(())
}

/// Failed tool calls surface as an error from `main`.
fn ensure_success(result: &ToolResult) -> Result<()> {
    if !result.is_success() {
        bail!("tool '{}' failed", result.tool_name);
    }
    Ok(())
}

fn build_router(config: &FileConfig) -> RouteQueryUseCase {
    let session = SessionHandle::new();
    let (poll_params, _) = config.task.poll_params();
    let monitor = Arc::new(
        TaskMonitor::new(Arc::new(SessionTaskSource::new(session.clone()))).with_params(poll_params),
    );
    let connector = Arc::new(CatalystConnector::new(config.catalyst.client_options()));

    let registry = GroupRegistry::builtin(session, connector, monitor);
    let (classifier, _) = config.router.classifier();
    let (group_map, _) = config.router.group_map();

    RouteQueryUseCase::new(Arc::new(registry))
        .with_classifier(classifier)
        .with_group_map(group_map)
}

/// Connect at startup when the command line and configuration together
/// name a controller and both credentials.
async fn auto_connect(cli: &Cli, config: &FileConfig, router: &RouteQueryUseCase) {
    let catalyst = &config.catalyst;
    let base_url = cli.base_url.as_ref().or(catalyst.base_url.as_ref());
    let username = cli.username.as_ref().or(catalyst.username.as_ref());
    let password = cli.password.as_ref().or(catalyst.password.as_ref());

    let (Some(base_url), Some(username), Some(password)) = (base_url, username, password) else {
        if base_url.is_some() {
            warn!("Base URL configured without complete credentials, not connecting");
        }
        return;
    };

    let call = ToolCall::new("connect")
        .with_arg("base_url", base_url.as_str())
        .with_arg("username", username.as_str())
        .with_arg("password", password.as_str());
    let result = router.invoke(&call).await;

    match result.output_text() {
        Some(CONNECTED_MESSAGE) => info!(base_url = %base_url, "Connected at startup"),
        _ => eprintln!(
            "{}",
            ConsoleFormatter::format_result(&result, OutputFormat::Text).yellow()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catc_domain::ToolError;

    #[test]
    fn test_failed_call_is_an_error() {
        let result = ToolResult::failure("get_device_list", ToolError::invalid_argument("bad"));
        let err = ensure_success(&result).unwrap_err();
        assert_eq!(err.to_string(), "tool 'get_device_list' failed");
    }

    #[test]
    fn test_successful_call_is_ok() {
        assert!(ensure_success(&ToolResult::text("get_device_list", "ok")).is_ok());
    }
}
