//! Router, registry and HTTP client wired together against a mock controller.

use super::authentication::CONNECTED_MESSAGE;
use super::registry::GroupRegistry;
use crate::catalyst::{CatalystConnector, ClientOptions};
use catc_application::{RouteQueryUseCase, SessionHandle, SessionTaskSource, TaskMonitor};
use catc_domain::ToolCall;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUTH_PATH: &str = "/dna/system/api/v1/auth/token";

struct Gateway {
    router: RouteQueryUseCase,
    session: SessionHandle,
}

fn gateway() -> Gateway {
    let session = SessionHandle::new();
    let monitor = Arc::new(TaskMonitor::new(Arc::new(SessionTaskSource::new(
        session.clone(),
    ))));
    let registry = GroupRegistry::builtin(
        session.clone(),
        Arc::new(CatalystConnector::new(ClientOptions::default())),
        monitor,
    );
    Gateway {
        router: RouteQueryUseCase::new(Arc::new(registry)),
        session,
    }
}

async fn mock_controller() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Token": "tok-e2e" })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_connect_in_plain_language() {
    let server = mock_controller().await;
    let gw = gateway();

    let answer = gw
        .router
        .route(&format!("connect to {} admin Secret123", server.uri()))
        .await;

    assert_eq!(answer, CONNECTED_MESSAGE);
    assert!(gw.session.is_connected());
    assert_eq!(gw.session.info().unwrap().username, "admin");
}

#[tokio::test]
async fn test_tools_refuse_before_connect() {
    let gw = gateway();

    let result = gw.router.invoke(&ToolCall::new("get_device_list")).await;
    assert_eq!(
        result.to_json(),
        json!({ "error": "Not connected. Use connect() first." })
    );

    let result = gw
        .router
        .invoke(&ToolCall::new("check_task_status").with_arg("task_id", "t-1"))
        .await;
    assert_eq!(
        result.render(),
        "Error: Not connected. Use connect() first."
    );
}

#[tokio::test]
async fn test_read_passes_controller_json_through() {
    let server = mock_controller().await;
    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/network-device"))
        .and(header("X-Auth-Token", "tok-e2e"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": [{ "hostname": "edge-1" }] })),
        )
        .mount(&server)
        .await;

    let gw = gateway();
    gw.router
        .invoke(
            &ToolCall::new("connect")
                .with_arg("base_url", server.uri())
                .with_arg("username", "admin")
                .with_arg("password", "Secret123"),
        )
        .await;

    let result = gw.router.invoke(&ToolCall::new("get_device_list")).await;
    assert!(result.is_success());
    assert_eq!(result.to_json()["response"][0]["hostname"], "edge-1");
}

#[tokio::test]
async fn test_monitored_write_follows_task() {
    let server = mock_controller().await;
    Mock::given(method("DELETE"))
        .and(path("/dna/intent/api/v1/network-device/d-1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "response": { "taskId": "t-42", "url": "/api/v1/task/t-42" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/task/t-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "id": "t-42",
                "startTime": 1_700_000_000_000_i64,
                "endTime": 1_700_000_004_000_i64,
                "progress": "Device deleted"
            }
        })))
        .mount(&server)
        .await;

    let gw = gateway();
    gw.router
        .route(&format!("connect to {} admin Secret123", server.uri()))
        .await;

    let result = gw
        .router
        .invoke(
            &ToolCall::new("delete_device_by_id")
                .with_arg("id", "d-1")
                .with_arg("monitor", true),
        )
        .await;

    let text = result.render();
    assert!(text.starts_with("delete_device_by_id initiated successfully.\nTask ID: t-42\n"));
    assert!(text.contains("Status: COMPLETED"));
}

#[tokio::test]
async fn test_remote_error_is_reported() {
    let server = mock_controller().await;
    Mock::given(method("GET"))
        .and(path("/dna/intent/api/v1/site"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let gw = gateway();
    gw.router
        .route(&format!("connect to {} admin Secret123", server.uri()))
        .await;

    let result = gw.router.invoke(&ToolCall::new("get_sites")).await;
    assert!(!result.is_success());
    assert_eq!(result.to_json(), json!({ "error": "HTTP 500: internal" }));
}
