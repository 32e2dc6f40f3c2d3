//! Group loader port
//!
//! Resolves a group name to a ready tool group. The router memoizes
//! successful loads; a loader itself is free to build a fresh group on
//! every call.

use super::tool_group::ToolGroup;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Unknown tool group: {0}")]
    UnknownGroup(String),

    #[error("Failed to initialize tool group {group}: {reason}")]
    InitFailed { group: String, reason: String },
}

#[async_trait]
pub trait GroupLoader: Send + Sync {
    /// Names of all groups this loader can build
    fn group_names(&self) -> Vec<String>;

    async fn load(&self, group: &str) -> Result<Arc<dyn ToolGroup>, LoadError>;
}
