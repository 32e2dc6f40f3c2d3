//! Error types for the Catalyst Center client

use catc_application::TransportError;
use thiserror::Error;

/// Result type alias for Catalyst Center operations
pub type Result<T> = std::result::Result<T, CatalystError>;

/// Errors that can occur when talking to Catalyst Center
#[derive(Error, Debug)]
pub enum CatalystError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Authentication rejected (HTTP {status}): {body}")]
    AuthenticationRejected { status: u16, body: String },

    #[error("Authentication response did not contain a token")]
    MissingToken,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<CatalystError> for TransportError {
    fn from(err: CatalystError) -> Self {
        match err {
            CatalystError::Http(e) if e.is_timeout() => TransportError::Timeout,
            CatalystError::Http(e) => TransportError::Connection(e.to_string()),
            CatalystError::InvalidBaseUrl(url) => {
                TransportError::Connection(format!("invalid base URL: {}", url))
            }
            e @ (CatalystError::AuthenticationRejected { .. } | CatalystError::MissingToken) => {
                TransportError::Authentication(e.to_string())
            }
            CatalystError::Status { status, body } => TransportError::Status { status, body },
            CatalystError::Decode(e) => TransportError::Decode(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_transport_status() {
        let err: TransportError = CatalystError::Status {
            status: 404,
            body: "{\"message\":\"no such device\"}".to_string(),
        }
        .into();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_auth_errors_map_to_authentication() {
        let err: TransportError = CatalystError::MissingToken.into();
        assert!(matches!(err, TransportError::Authentication(_)));

        let err: TransportError = CatalystError::AuthenticationRejected {
            status: 401,
            body: "bad credentials".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Authentication failed: Authentication rejected (HTTP 401): bad credentials"
        );
    }
}
