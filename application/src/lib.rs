//! Application layer for catc-gateway
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PollParams;
pub use ports::{
    group_loader::{GroupLoader, LoadError},
    session::{ConnectorPort, SessionHandle, SessionInfo},
    task_source::{SessionTaskSource, TaskSource},
    tool_group::{GroupCapability, ToolGroup, list_tools, suggest_tools},
    transport::{ApiRequest, HttpMethod, TransportError, TransportPort},
};
pub use use_cases::route_query::{GroupTools, RouteOutcome, RouteQueryUseCase};
pub use use_cases::task_monitor::{DEFAULT_FAILURE_LIMIT, PollOutcome, TaskMonitor};
