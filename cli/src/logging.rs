//! Tracing subscriber setup
//!
//! Logs always go to stderr; stdout belongs to command output and the
//! stdio server. With `[logging] directory` set, a daily-rolling file
//! receives the same events.

use catc_infrastructure::config::FileLoggingConfig;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)))
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Outcome of preparing the log directory.
enum FileTarget {
    Disabled,
    Unavailable(PathBuf, std::io::Error),
    Ready(PathBuf, NonBlocking, WorkerGuard),
}

fn file_target(config: &FileLoggingConfig) -> FileTarget {
    let Some(dir) = config.directory_path() else {
        return FileTarget::Disabled;
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        return FileTarget::Unavailable(dir, e);
    }
    let (writer, guard) = file_writer(&dir, &config.file_prefix);
    FileTarget::Ready(dir, writer, guard)
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file output is flushed.
pub fn init(verbose: u8, config: &FileLoggingConfig) -> Option<WorkerGuard> {
    match file_target(config) {
        FileTarget::Disabled => {
            init_stack(verbose, None);
            None
        }
        FileTarget::Unavailable(dir, e) => {
            init_stack(verbose, None);
            tracing::warn!(dir = %dir.display(), error = %e, "Log directory unavailable, logging to stderr only");
            None
        }
        FileTarget::Ready(dir, writer, guard) => {
            init_stack(verbose, Some(writer));
            tracing::info!(dir = %dir.display(), "File logging enabled");
            Some(guard)
        }
    }
}

/// One subscriber stack for every case; the file layer is simply absent
/// when there is no writer.
fn init_stack(verbose: u8, file_writer: Option<NonBlocking>) {
    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
    });
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(filter_for(verbose))
        .init();
}

fn file_writer(dir: &Path, prefix: &str) -> (NonBlocking, WorkerGuard) {
    let appender = tracing_appender::rolling::daily(dir, prefix);
    tracing_appender::non_blocking(appender)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(directory: Option<String>) -> FileLoggingConfig {
        FileLoggingConfig {
            directory,
            ..FileLoggingConfig::default()
        }
    }

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }

    #[test]
    fn test_no_directory_disables_file_logging() {
        assert!(matches!(file_target(&config_for(None)), FileTarget::Disabled));
        assert!(matches!(
            file_target(&config_for(Some("  ".to_string()))),
            FileTarget::Disabled
        ));
    }

    #[test]
    fn test_directory_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs").join("nested");
        let config = config_for(Some(dir.display().to_string()));

        match file_target(&config) {
            FileTarget::Ready(path, _writer, _guard) => assert_eq!(path, dir),
            _ => panic!("expected a ready file target"),
        }
        assert!(dir.is_dir());
    }

    #[test]
    fn test_directory_blocked_by_file_is_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let config = config_for(Some(blocker.join("logs").display().to_string()));

        assert!(matches!(file_target(&config), FileTarget::Unavailable(_, _)));
    }
}
