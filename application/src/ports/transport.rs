//! Transport port
//!
//! Defines the interface for authenticated calls against the Catalyst Center
//! REST API. The reqwest-backed adapter lives in the infrastructure layer.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during a transport round-trip
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Not connected. Use connect() first.")]
    NotConnected,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    pub fn is_not_connected(&self) -> bool {
        matches!(self, TransportError::NotConnected)
    }

    /// HTTP status code, when the controller answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP method of an API request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request against the controller. `path` is relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_query_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query.extend(pairs);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Port for authenticated API calls
///
/// Implementations re-authenticate at most once when the controller answers
/// 401, and report every other non-2xx answer as [`TransportError::Status`].
/// An empty 2xx body is returned as `Value::Null`.
#[async_trait]
pub trait TransportPort: Send + Sync {
    /// Base URL of the controller this transport talks to
    fn base_url(&self) -> &str;

    /// Perform one request and return the parsed JSON body
    async fn request(&self, request: ApiRequest) -> Result<Value, TransportError>;
}
