//! Application use cases

pub mod route_query;
pub mod task_monitor;
