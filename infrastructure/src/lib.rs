//! Infrastructure layer for catc-gateway
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Catalyst Center HTTP client, the tool
//! groups, and configuration file loading.

pub mod catalyst;
pub mod config;
pub mod groups;

// Re-export commonly used types
pub use catalyst::{CatalystClient, CatalystConnector, CatalystError, ClientOptions};
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use groups::{CONNECTED_MESSAGE, GroupRegistry};
