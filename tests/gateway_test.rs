mod support;

use std::sync::Arc;

use authgate::adapters::CookieCredentialStore;
use authgate::domain::StatusCode;
use authgate::{GatewayError, Outcome};
use support::{client_with, RecordingNavigator, ScriptedTransport};

fn store_with_token() -> Arc<CookieCredentialStore> {
    Arc::new(CookieCredentialStore::new("theme=dark; access_token=tok-123"))
}

fn empty_store() -> Arc<CookieCredentialStore> {
    Arc::new(CookieCredentialStore::new("theme=dark"))
}

fn rejected(status: StatusCode) -> GatewayError {
    GatewayError::RequestFailed {
        status: Some(status),
        detail: "denied".to_string(),
    }
}

#[tokio::test]
async fn missing_credential_skips_request_and_navigates_once() {
    authgate::init_diagnostics();

    let transport = ScriptedTransport::new(vec![]);
    let navigator = RecordingNavigator::new();
    let client = client_with(empty_store(), transport.clone(), navigator.clone());

    let outcome = client.get("/api/users").await.unwrap();

    assert!(matches!(outcome, Outcome::RedirectToLogin(_)));
    assert_eq!(transport.calls(), 0);
    assert_eq!(navigator.visited(), vec!["/admin/login".to_string()]);
    assert!(outcome.into_result().unwrap().is_none());
}

#[tokio::test]
async fn successful_call_returns_payload_without_navigation() {
    let payload = serde_json::json!({"id": 1, "name": "A"});
    let transport = ScriptedTransport::new(vec![Ok(payload.clone())]);
    let navigator = RecordingNavigator::new();
    let client = client_with(store_with_token(), transport.clone(), navigator.clone());

    let outcome = client
        .post("/api/users", serde_json::json!({"name": "A"}))
        .await
        .unwrap();

    assert_eq!(outcome.payload(), Some(&payload));
    assert!(navigator.visited().is_empty());

    let request = transport.last_request().unwrap();
    assert_eq!(request.url.as_str(), "http://127.0.0.1:8000/api/users");
    assert_eq!(
        request.headers.get("Authorization").map(String::as_str),
        Some("tok-123")
    );
}

#[tokio::test]
async fn auth_rejection_navigates_and_still_fails_the_caller() {
    let transport = ScriptedTransport::new(vec![Err(rejected(StatusCode::FORBIDDEN))]);
    let navigator = RecordingNavigator::new();
    let client = client_with(store_with_token(), transport.clone(), navigator.clone());

    let outcome = client.get("/api/users").await.unwrap();

    assert_eq!(navigator.visited(), vec!["/admin/login".to_string()]);
    let err = outcome.into_result().unwrap_err();
    assert!(err.is_auth_rejection());
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn server_error_propagates_without_navigation() {
    let transport = ScriptedTransport::new(vec![Err(rejected(StatusCode::INTERNAL_SERVER_ERROR))]);
    let navigator = RecordingNavigator::new();
    let client = client_with(store_with_token(), transport.clone(), navigator.clone());

    let outcome = client.delete("/api/users/1").await.unwrap();

    assert!(navigator.visited().is_empty());
    let err = outcome.into_result().unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn repeated_auth_failures_navigate_independently() {
    let transport = ScriptedTransport::new(vec![
        Err(rejected(StatusCode::UNAUTHORIZED)),
        Err(rejected(StatusCode::UNAUTHORIZED)),
    ]);
    let navigator = RecordingNavigator::new();
    let client = client_with(store_with_token(), transport.clone(), navigator.clone());

    client.get("/api/users").await.unwrap();
    client.get("/api/users").await.unwrap();

    assert_eq!(transport.calls(), 2);
    assert_eq!(
        navigator.visited(),
        vec!["/admin/login".to_string(), "/admin/login".to_string()]
    );
}

#[tokio::test]
async fn unknown_verb_is_rejected_before_anything_happens() {
    let transport = ScriptedTransport::new(vec![]);
    let navigator = RecordingNavigator::new();
    let client = client_with(store_with_token(), transport.clone(), navigator.clone());

    let err = client.request("BREW", "/api/users", None, None).await.unwrap_err();

    assert!(matches!(err, GatewayError::UnsupportedMethod(_)));
    assert_eq!(transport.calls(), 0);
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn credential_refresh_is_picked_up_by_the_next_call() {
    let store = empty_store();
    let transport = ScriptedTransport::new(vec![Ok(serde_json::json!({"ok": true}))]);
    let navigator = RecordingNavigator::new();
    let client = client_with(store.clone(), transport.clone(), navigator.clone());

    let first = client.get("/api/users").await.unwrap();
    assert!(matches!(first, Outcome::RedirectToLogin(_)));

    store.replace("access_token=fresh").await;

    let second = client.get("/api/users").await.unwrap();
    assert!(second.payload().is_some());
    assert_eq!(
        transport.last_request().unwrap().headers.get("Authorization").map(String::as_str),
        Some("fresh")
    );
}
