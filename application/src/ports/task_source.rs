//! Task source port
//!
//! Where the task monitor reads task records from. The production source
//! goes through the session's transport; tests substitute scripted fakes.

use super::session::SessionHandle;
use super::transport::{ApiRequest, TransportError};
use async_trait::async_trait;
use catc_domain::{TaskQuery, is_valid_task_id};
use serde_json::Value;

pub const TASK_PATH: &str = "/dna/intent/api/v1/task";
pub const TASKS_PATH: &str = "/dna/intent/api/v1/tasks";
pub const TASK_COUNT_PATH: &str = "/dna/intent/api/v1/tasks/count";

#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Whether a session is available at all
    fn is_connected(&self) -> bool;

    /// Raw envelope of `GET /task/{id}`
    async fn fetch_task(&self, task_id: &str) -> Result<Value, TransportError>;

    /// Raw envelope of `GET /tasks` with the query's filters
    async fn list_tasks(&self, query: &TaskQuery) -> Result<Value, TransportError>;

    /// Raw envelope of `GET /tasks/count` with the query's filters
    async fn count_tasks(&self, query: &TaskQuery) -> Result<Value, TransportError>;
}

/// Task source backed by the shared session
#[derive(Debug, Clone)]
pub struct SessionTaskSource {
    session: SessionHandle,
}

impl SessionTaskSource {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }
}

#[async_trait]
impl TaskSource for SessionTaskSource {
    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }

    async fn fetch_task(&self, task_id: &str) -> Result<Value, TransportError> {
        if !is_valid_task_id(task_id) {
            return Err(TransportError::InvalidRequest(format!(
                "task id is not a valid path segment: {:?}",
                task_id
            )));
        }
        let transport = self.session.require()?;
        transport
            .request(ApiRequest::get(format!("{}/{}", TASK_PATH, task_id)))
            .await
    }

    async fn list_tasks(&self, query: &TaskQuery) -> Result<Value, TransportError> {
        let transport = self.session.require()?;
        transport
            .request(ApiRequest::get(TASKS_PATH).with_query_pairs(query.to_query_pairs()))
            .await
    }

    async fn count_tasks(&self, query: &TaskQuery) -> Result<Value, TransportError> {
        let transport = self.session.require()?;
        transport
            .request(ApiRequest::get(TASK_COUNT_PATH).with_query_pairs(query.to_query_pairs()))
            .await
    }
}
