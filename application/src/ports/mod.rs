//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod group_loader;
pub mod session;
pub mod task_source;
pub mod tool_group;
pub mod transport;
