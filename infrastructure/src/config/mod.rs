//! Configuration file loading for catc-gateway
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CATC_` environment variables, `__` separating sections
//! 2. `--config <path>` specified file
//! 3. Project root: `./catc-gateway.toml` or `./.catc-gateway.toml`
//! 4. Global: `~/.config/catc-gateway/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileCatalystConfig, FileConfig, FileLoggingConfig, FileRouterConfig,
    FileTaskConfig, Severity,
};
pub use loader::ConfigLoader;
