//! Test doubles shared by the group tests.

use async_trait::async_trait;
use catc_application::{
    ApiRequest, SessionHandle, SessionTaskSource, TaskMonitor, TransportError, TransportPort,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers by request path and records every request it sees.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<HashMap<String, Result<Value, TransportError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, path: &str, response: Result<Value, TransportError>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransportPort for FakeTransport {
    fn base_url(&self) -> &str {
        "https://catc.test"
    }

    async fn request(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .unwrap_or(Err(TransportError::Status {
                status: 404,
                body: format!("no route for {}", path),
            }))
    }
}

pub fn connected_session(transport: FakeTransport) -> SessionHandle {
    let session = SessionHandle::new();
    session.install("admin", Arc::new(transport));
    session
}

pub fn monitor_for(session: &SessionHandle) -> Arc<TaskMonitor> {
    Arc::new(TaskMonitor::new(Arc::new(SessionTaskSource::new(
        session.clone(),
    ))))
}
