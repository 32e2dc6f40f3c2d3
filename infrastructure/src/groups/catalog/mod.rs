//! Endpoint catalogues of the REST-backed groups
//!
//! A representative subset of the Catalyst Center API per group. Tool names
//! are unique across the whole gateway.

pub mod appliance;
pub mod connectivity;
pub mod devices;
pub mod ecosystem;
pub mod events;
pub mod sda;
pub mod system;
