//! Catalyst Center HTTP client
//!
//! Token-based access: `POST /dna/system/api/v1/auth/token` with basic auth
//! returns `{"Token": "..."}`, sent as `X-Auth-Token` on every later call.
//! A 401 on a call triggers exactly one re-authentication and one retry.

use super::error::{CatalystError, Result};
use async_trait::async_trait;
use catc_application::{ApiRequest, HttpMethod, TransportError, TransportPort};
use catc_domain::Credentials;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

pub const AUTH_PATH: &str = "/dna/system/api/v1/auth/token";
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Connection options shared by every client built from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Verify the controller's TLS certificate
    pub verify_tls: bool,
    /// Timeout for API calls
    pub request_timeout: Duration,
    /// Timeout for the token exchange
    pub auth_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            verify_tls: false,
            request_timeout: Duration::from_secs(30),
            auth_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "Token")]
    token: Option<String>,
}

/// Authenticated client for one Catalyst Center instance
pub struct CatalystClient {
    http: reqwest::Client,
    credentials: Credentials,
    options: ClientOptions,
    token: RwLock<Option<String>>,
}

impl CatalystClient {
    pub fn new(credentials: Credentials, options: ClientOptions) -> Result<Self> {
        let base = credentials.base_url.to_lowercase();
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(CatalystError::InvalidBaseUrl(credentials.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!options.verify_tls)
            .timeout(options.request_timeout)
            .build()?;

        Ok(Self {
            http,
            credentials,
            options,
            token: RwLock::new(None),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Exchange the credentials for a fresh token and store it.
    pub async fn authenticate(&self) -> Result<String> {
        let url = format!("{}{}", self.credentials.base_url, AUTH_PATH);
        debug!(url = %url, username = %self.credentials.username, "Requesting auth token");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header("Content-Type", "application/json")
            .timeout(self.options.auth_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Authentication rejected");
            return Err(CatalystError::AuthenticationRejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TokenResponse = response.json().await?;
        let token = parsed
            .token
            .filter(|t| !t.is_empty())
            .ok_or(CatalystError::MissingToken)?;

        *self.token.write().await = Some(token.clone());
        info!(base_url = %self.credentials.base_url, "Authenticated with Catalyst Center");
        Ok(token)
    }

    async fn current_token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.clone() {
            return Ok(token);
        }
        self.authenticate().await
    }

    async fn send(&self, request: &ApiRequest, token: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.credentials.base_url, request.path);
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header(AUTH_TOKEN_HEADER, token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let token = self.current_token().await?;
        let mut response = self.send(&request, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            debug!(path = %request.path, "Token rejected, re-authenticating once");
            let token = self.authenticate().await?;
            response = self.send(&request, &token).await?;
        }

        decode(response).await
    }
}

async fn decode(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(CatalystError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl TransportPort for CatalystClient {
    fn base_url(&self) -> &str {
        &self.credentials.base_url
    }

    async fn request(&self, request: ApiRequest) -> std::result::Result<Value, TransportError> {
        let method = request.method;
        let path = request.path.clone();
        self.execute(request).await.map_err(|e| {
            warn!(%method, path = %path, error = %e, "Catalyst Center request failed");
            TransportError::from(e)
        })
    }
}
