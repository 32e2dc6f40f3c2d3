//! REPL (Read-Eval-Print Loop) over the query router

use super::command::{HELP, ReplCommand};
use crate::cli::commands::OutputFormat;
use crate::output::console::ConsoleFormatter;
use catc_application::RouteQueryUseCase;
use catc_domain::ToolCall;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Interactive shell
pub struct GatewayRepl {
    router: Arc<RouteQueryUseCase>,
    history_path: Option<PathBuf>,
}

impl GatewayRepl {
    pub fn new(router: Arc<RouteQueryUseCase>) -> Self {
        Self {
            router,
            history_path: dirs::data_dir().map(|p| p.join("catc-gateway").join("history.txt")),
        }
    }

    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run until `/quit` or Ctrl-D.
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("catc".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match ReplCommand::parse(&line) {
                        Ok(ReplCommand::Quit) => {
                            println!("Bye!");
                            break;
                        }
                        Ok(command) => self.execute(command).await,
                        Err(message) => println!("{}", message.yellow()),
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => println!("^C"),
            }
        }

        Ok(())
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "History disabled");
                editor
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Catalyst Center Gateway - Shell       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", HELP);
        println!();
    }

    async fn execute(&self, command: ReplCommand) {
        println!();
        match command {
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Quit => {}
            ReplCommand::Status => {
                let result = self.router.invoke(&ToolCall::new("session_status")).await;
                println!("{}", ConsoleFormatter::format_result(&result, OutputFormat::Text));
            }
            ReplCommand::Groups => {
                let cached = self.router.cached_groups();
                if cached.is_empty() {
                    println!("No tool groups loaded yet.");
                } else {
                    println!("Loaded tool groups: {}", cached.join(", "));
                }
            }
            ReplCommand::Tools(group) => match self.router.list_tools(group.as_deref()).await {
                Ok(groups) => print!("{}", ConsoleFormatter::format_tools(&groups)),
                Err(e) => println!("{}", format!("Error: {}", e).red()),
            },
            ReplCommand::Classify(query) => {
                let classification = self.router.classify(&query);
                let group = self.router.group_map().group_for(classification.domain);
                print!(
                    "{}",
                    ConsoleFormatter::format_classification(&query, &classification, group)
                );
            }
            ReplCommand::Call { tool, args } => {
                let call = args
                    .into_iter()
                    .fold(ToolCall::new(tool), |call, (k, v)| call.with_arg(k, v));
                let result = self.router.invoke(&call).await;
                println!("{}", ConsoleFormatter::format_result(&result, OutputFormat::Text));
            }
            ReplCommand::Query(query) => {
                let outcome = self.router.route_with_domain(&query).await;
                println!(
                    "{}",
                    ConsoleFormatter::format_answer(
                        outcome.domain.as_str(),
                        &outcome.group,
                        &outcome.answer
                    )
                );
            }
        }
        println!();
    }
}
