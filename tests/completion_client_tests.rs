// Completion client tests - OpenAIClient against a local stub endpoint
//
// The stub is a small axum app bound to an ephemeral port that records what
// it receives and answers with a canned status and body.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use nutrichat::config::AppConfig;
use nutrichat::model::{ModelError, ModelProvider, ModelRequest, OpenAIClient};
use nutrichat::types::ChatMessage;
use secrecy::SecretString;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    reply: String,
    received: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn completions(State(stub): State<Stub>, headers: HeaderMap, body: String) -> (StatusCode, String) {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let json: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    stub.received.lock().await.push((auth, json));
    (stub.status, stub.reply.clone())
}

async fn spawn_stub(status: StatusCode, reply: Value) -> (SocketAddr, Stub) {
    let stub = Stub {
        status,
        reply: reply.to_string(),
        received: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(stub.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, stub)
}

fn config(endpoint: String, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        api_key: api_key.map(|k| SecretString::from(k.to_string())),
        api_key_env: "OPENAI_API_KEY".to_string(),
        model: "gpt-4o-mini".to_string(),
        endpoint,
        api_path: "/v1/chat/completions".to_string(),
        bind: "127.0.0.1:0".parse().expect("addr"),
        cors_origins: Vec::new(),
    }
}

fn request() -> ModelRequest {
    ModelRequest {
        model: "gpt-4o-mini".to_string(),
        messages: vec![
            ChatMessage::system("Você é um nutricionista profissional."),
            ChatMessage::user("Banana engorda?"),
        ],
    }
}

#[tokio::test]
async fn sends_bearer_and_two_messages() {
    let (addr, stub) = spawn_stub(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": "Não, com moderação." } }] }),
    )
    .await;
    let client =
        OpenAIClient::from_config(&config(format!("http://{addr}"), Some("sk-test"))).expect("client");

    let response = client.chat(request()).await.expect("completion");
    assert_eq!(response.content(), "Não, com moderação.");

    let received = stub.received.lock().await;
    assert_eq!(received.len(), 1);
    let (auth, body) = &received[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["stream"], false);
    let messages = body["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "Banana engorda?");
}

#[tokio::test]
async fn server_error_status_is_network_error() {
    let (addr, _stub) = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "message": "internal" } }),
    )
    .await;
    let client =
        OpenAIClient::from_config(&config(format!("http://{addr}"), Some("sk-test"))).expect("client");

    let err = client.chat(request()).await.expect_err("should fail");
    assert!(matches!(err, ModelError::Network { .. }));
    assert!(err.user_message().contains("500"));
}

#[tokio::test]
async fn rate_limit_has_friendly_message() {
    let (addr, _stub) = spawn_stub(StatusCode::TOO_MANY_REQUESTS, json!({})).await;
    let client =
        OpenAIClient::from_config(&config(format!("http://{addr}"), Some("sk-test"))).expect("client");

    let err = client.chat(request()).await.expect_err("should fail");
    assert!(err.user_message().contains("Limite de requisições"));
}

#[tokio::test]
async fn unauthorized_is_credential_error() {
    let (addr, _stub) = spawn_stub(StatusCode::UNAUTHORIZED, json!({})).await;
    let client =
        OpenAIClient::from_config(&config(format!("http://{addr}"), Some("sk-wrong"))).expect("client");

    let err = client.chat(request()).await.expect_err("should fail");
    assert!(err.is_credential_error());
}

#[tokio::test]
async fn reply_without_content_is_invalid_response() {
    let (addr, _stub) = spawn_stub(StatusCode::OK, json!({ "choices": [] })).await;
    let client =
        OpenAIClient::from_config(&config(format!("http://{addr}"), Some("sk-test"))).expect("client");

    let err = client.chat(request()).await.expect_err("should fail");
    assert!(matches!(err, ModelError::InvalidResponse { .. }));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let (addr, _stub) = spawn_stub(StatusCode::OK, json!("not an object")).await;
    let client =
        OpenAIClient::from_config(&config(format!("http://{addr}"), Some("sk-test"))).expect("client");

    let err = client.chat(request()).await.expect_err("should fail");
    assert!(matches!(err, ModelError::InvalidResponse { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_reports_connection_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client =
        OpenAIClient::from_config(&config(format!("http://{addr}"), Some("sk-test"))).expect("client");
    let err = client.chat(request()).await.expect_err("should fail");
    assert!(matches!(err, ModelError::Network { .. }));
    assert!(err.user_message().contains("Não foi possível conectar"));
}

#[test]
fn missing_key_is_rejected_at_construction() {
    let result = OpenAIClient::from_config(&config("http://127.0.0.1:1".to_string(), None));
    assert!(matches!(result, Err(ModelError::MissingApiKey { .. })));
}
