//! Catalyst Center adapter
//!
//! reqwest-backed implementation of the transport and connector ports.

pub mod client;
pub mod connector;
pub mod error;

pub use client::{AUTH_PATH, CatalystClient, ClientOptions};
pub use connector::CatalystConnector;
pub use error::CatalystError;
