//! The `authentication` group
//!
//! Owns the session lifecycle. `connect` is the only tool that works without
//! a session; free-text queries are searched for connection details before
//! falling back to keyword suggestions.

use super::api_group::ApiToolGroup;
use super::endpoint::Endpoint;
use async_trait::async_trait;
use catc_application::{
    ConnectorPort, GroupCapability, SessionHandle, TaskMonitor, ToolGroup, suggest_tools,
};
use catc_domain::routing::groups;
use catc_domain::tool::{
    ToolAccess, ToolCall, ToolCatalog, ToolDefinition, ToolError, ToolParameter, ToolResult,
};
use catc_domain::{ConnectParseError, Credentials, parse_connect_command};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

pub const CONNECTED_MESSAGE: &str = "Successfully connected to Cisco Catalyst Center";
const CONNECT_FAILED_PREFIX: &str = "Failed to connect to Cisco Catalyst Center";

fn account_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get(
            "get_users",
            "/dna/system/api/v1/user",
            "List local and external users with their roles.",
        )
        .query("invoke_source", "invokeSource", "Set to external to include external users")
        .keywords(&["user", "users", "account", "accounts"]),
        Endpoint::get(
            "get_roles",
            "/dna/system/api/v1/role",
            "List roles and the permissions they grant.",
        )
        .keywords(&["role", "roles", "permission", "permissions", "rbac"]),
    ]
}

pub struct AuthenticationGroup {
    catalog: ToolCatalog,
    session: SessionHandle,
    connector: Arc<dyn ConnectorPort>,
    accounts: ApiToolGroup,
}

impl AuthenticationGroup {
    pub fn new(
        session: SessionHandle,
        connector: Arc<dyn ConnectorPort>,
        monitor: Arc<TaskMonitor>,
    ) -> Self {
        let accounts = ApiToolGroup::new(groups::AUTHENTICATION, account_endpoints(), session.clone(), monitor);

        let mut catalog = ToolCatalog::new()
            .register(
                ToolDefinition::new(
                    "connect",
                    "Connect to a Cisco Catalyst Center instance. Replaces any existing session.",
                    ToolAccess::Write,
                )
                .with_parameter(ToolParameter::new("base_url", "https://<host>", true))
                .with_parameter(ToolParameter::new("username", "Login user", true))
                .with_parameter(ToolParameter::new("password", "Login password", true))
                .with_keywords(["connect", "login", "log in", "sign in", "authenticate"]),
            )
            .register(
                ToolDefinition::new("disconnect", "Drop the current session.", ToolAccess::Write)
                    .with_keywords(["disconnect", "logout", "log out", "sign out"]),
            )
            .register(
                ToolDefinition::new(
                    "session_status",
                    "Report whether a session is active and for which instance.",
                    ToolAccess::Read,
                )
                .with_keywords(["auth status", "authentication status", "login status", "session"]),
            );
        for definition in accounts.catalog().all() {
            catalog = catalog.register(definition.clone());
        }

        Self {
            catalog,
            session,
            connector,
            accounts,
        }
    }

    /// Authenticate and install the new session.
    pub async fn connect(&self, credentials: &Credentials) -> Result<(), String> {
        info!(base_url = %credentials.base_url, username = %credentials.username, "Connecting");
        match self.connector.connect(credentials).await {
            Ok(transport) => {
                self.session.install(&credentials.username, transport);
                info!(base_url = %credentials.base_url, "Connected");
                Ok(())
            }
            Err(e) => {
                warn!(base_url = %credentials.base_url, error = %e, "Connect failed");
                Err(e.to_string())
            }
        }
    }

    async fn connect_message(&self, credentials: &Credentials) -> String {
        match self.connect(credentials).await {
            Ok(()) => CONNECTED_MESSAGE.to_string(),
            Err(reason) => format!("{}: {}", CONNECT_FAILED_PREFIX, reason),
        }
    }

    fn status(&self) -> serde_json::Value {
        match self.session.info() {
            Some(info) => json!({
                "connected": true,
                "base_url": info.base_url,
                "username": info.username,
            }),
            None => json!({"connected": false}),
        }
    }
}

fn credentials_from(call: &ToolCall) -> Result<Credentials, ToolError> {
    let field = |key: &str| {
        call.require_string(key)
            .map(str::to_string)
            .map_err(ToolError::invalid_argument)
    };
    Ok(Credentials::new(field("base_url")?, field("username")?, field("password")?))
}

#[async_trait]
impl ToolGroup for AuthenticationGroup {
    fn id(&self) -> &str {
        groups::AUTHENTICATION
    }

    fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    fn capability(&self) -> GroupCapability {
        GroupCapability::RichText
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let name = call.tool_name.as_str();
        match name {
            "connect" => match credentials_from(call) {
                Ok(credentials) => ToolResult::text(name, self.connect_message(&credentials).await),
                Err(e) => ToolResult::failure(name, e),
            },
            "disconnect" => {
                let message = if self.session.disconnect() {
                    "Disconnected from Cisco Catalyst Center"
                } else {
                    "No active session"
                };
                ToolResult::text(name, message)
            }
            "session_status" => ToolResult::success(name, self.status()),
            _ => self.accounts.execute(call).await,
        }
    }

    /// Connect when the query carries connection details; otherwise suggest
    /// tools.
    async fn run_tools(&self, query: &str) -> String {
        let parse_error = match parse_connect_command(query) {
            Ok(credentials) => return self.connect_message(&credentials).await,
            Err(e) => e,
        };

        if parse_error == ConnectParseError::MissingUrl
            && let Some(answer) = suggest_tools(self.id(), &self.catalog, query)
        {
            return answer;
        }

        format!(
            "Could not read connection details: {}. Use 'connect <url> <username> <password>' \
             or 'connect url=<url> username=<user> password=<password>'.",
            parse_error
        )
    }
}
