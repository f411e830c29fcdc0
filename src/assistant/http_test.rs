use super::*;
use crate::assistant::FALLBACK_ERROR_MESSAGE;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub should bind");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}/chat")
}

fn client_for(endpoint: &str) -> HttpAssistant {
    HttpAssistant::new(AssistantConfig::default().with_endpoint(endpoint)).expect("client should build")
}

fn ask(text: &str) -> ChatRequest {
    ChatRequest { message: text.to_owned() }
}

#[tokio::test]
async fn posts_message_and_parses_reply() {
    let router = Router::new().route(
        "/chat",
        post(|Json(req): Json<ChatRequest>| async move {
            assert_eq!(req.message, "What is Pikachu's type?");
            Json(json!({ "response": "Electric", "sources": ["bulbapedia"] }))
        }),
    );
    let endpoint = spawn_stub(router).await;

    let reply = client_for(&endpoint)
        .send(&ask("What is Pikachu's type?"))
        .await
        .unwrap();

    assert_eq!(reply.response, "Electric");
    assert_eq!(reply.sources, Some(vec!["bulbapedia".to_owned()]));
}

#[tokio::test]
async fn sends_json_content_type_and_accept_headers() {
    let router = Router::new().route(
        "/chat",
        post(|headers: HeaderMap, Json(_): Json<Value>| async move {
            let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default();
            let accept = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()).unwrap_or_default();
            Json(json!({ "response": format!("{content_type}|{accept}") }))
        }),
    );
    let endpoint = spawn_stub(router).await;

    let reply = client_for(&endpoint).send(&ask("hi")).await.unwrap();
    assert_eq!(reply.response, "application/json|application/json");
}

#[tokio::test]
async fn server_error_surfaces_detail() {
    let router = Router::new().route(
        "/chat",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "model unavailable" }))) }),
    );
    let endpoint = spawn_stub(router).await;

    let err = client_for(&endpoint).send(&ask("hi")).await.unwrap_err();
    assert_eq!(err, AssistantError::Status { status: 500, detail: Some("model unavailable".to_owned()) });
}

#[tokio::test]
async fn plain_text_error_body_has_no_detail() {
    let router = Router::new().route("/chat", post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }));
    let endpoint = spawn_stub(router).await;

    let err = client_for(&endpoint).send(&ask("hi")).await.unwrap_err();
    assert_eq!(err, AssistantError::Status { status: 502, detail: None });
}

#[tokio::test]
async fn unknown_route_is_status_error() {
    let router = Router::new().route("/other", post(|| async { "nope" }));
    let endpoint = spawn_stub(router).await;

    let err = client_for(&endpoint).send(&ask("hi")).await.unwrap_err();
    assert!(matches!(err, AssistantError::Status { status: 404, .. }));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = client_for(&format!("http://{addr}/chat"))
        .send(&ask("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, AssistantError::Transport(_)));
    assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn endpoint_is_taken_from_config() {
    let client = client_for("http://localhost:9999/chat/");
    assert_eq!(client.endpoint(), "http://localhost:9999/chat");
}
