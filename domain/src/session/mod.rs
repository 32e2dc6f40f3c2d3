//! Session domain module
//!
//! Credentials for a Catalyst Center instance and the narrow grammar used to
//! pull them out of a free-text "connect" request.

pub mod connect_command;
pub mod credentials;

pub use connect_command::{ConnectParseError, parse_connect_command};
pub use credentials::Credentials;
