//! Tool groups
//!
//! Every group shares the session handle and the task monitor. REST-backed
//! groups are described by data ([`endpoint::Endpoint`] lists in
//! [`catalog`]); `authentication` and `task` add hand-written tools on top.

pub mod api_group;
pub mod authentication;
pub mod catalog;
pub mod endpoint;
pub mod registry;
pub mod task;

#[cfg(test)]
mod end_to_end;
#[cfg(test)]
pub(crate) mod testing;

pub use api_group::{ApiToolGroup, QueryForward};
pub use authentication::{AuthenticationGroup, CONNECTED_MESSAGE};
pub use endpoint::{Endpoint, ParamLocation};
pub use registry::GroupRegistry;
pub use task::TaskToolGroup;

use catc_application::TransportError;
use catc_domain::tool::ToolError;

/// Tool error for a failed round-trip.
pub(crate) fn tool_error(error: &TransportError) -> ToolError {
    match error {
        TransportError::NotConnected => ToolError::not_connected(),
        TransportError::Status { status, body } => ToolError::remote(*status, body.clone()),
        TransportError::Timeout => ToolError::timeout("request to Catalyst Center"),
        TransportError::InvalidRequest(message) => ToolError::invalid_argument(message.clone()),
        other => ToolError::execution_failed(other.to_string()),
    }
}
