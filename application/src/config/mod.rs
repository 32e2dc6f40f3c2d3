//! Application-level configuration.
//!
//! Parameters that control how use cases behave, independent of where they
//! were loaded from.

pub mod poll_params;

pub use poll_params::PollParams;
