//! Session port
//!
//! A [`SessionHandle`] holds zero or one active transport. It is created once
//! at startup and cloned into every tool group and the task source, so a
//! `connect` performed through the authentication group is visible to all.

use super::transport::{TransportError, TransportPort};
use async_trait::async_trait;
use catc_domain::Credentials;
use std::sync::{Arc, PoisonError, RwLock};

/// Builds an authenticated transport from credentials
///
/// Implementations perform the initial token exchange, so a returned
/// transport is known to have authenticated at least once.
#[async_trait]
pub trait ConnectorPort: Send + Sync {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Arc<dyn TransportPort>, TransportError>;
}

/// Snapshot of the active session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub base_url: String,
    pub username: String,
}

struct ActiveSession {
    info: SessionInfo,
    transport: Arc<dyn TransportPort>,
}

/// Shared handle to the current session
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<ActiveSession>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a transport, replacing any previous session.
    pub fn install(&self, username: impl Into<String>, transport: Arc<dyn TransportPort>) {
        let info = SessionInfo {
            base_url: transport.base_url().to_string(),
            username: username.into(),
        };
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(ActiveSession { info, transport });
    }

    /// Drop the active session. Returns whether one was active.
    pub fn disconnect(&self) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.take().is_some()
    }

    /// The active transport, if any
    pub fn current(&self) -> Option<Arc<dyn TransportPort>> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(|s| Arc::clone(&s.transport))
    }

    /// The active transport, or [`TransportError::NotConnected`]
    pub fn require(&self) -> Result<Arc<dyn TransportPort>, TransportError> {
        self.current().ok_or(TransportError::NotConnected)
    }

    pub fn info(&self) -> Option<SessionInfo> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(|s| s.info.clone())
    }

    pub fn is_connected(&self) -> bool {
        self.info().is_some()
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("session", &self.info())
            .finish()
    }
}
