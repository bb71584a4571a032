//! Integration tests for the chat echo service.
//!
//! Each test binds an ephemeral port on 127.0.0.1, runs the real server and
//! talks to it over HTTP.

use std::net::SocketAddr;

use chat_echo::api::{create_router, AppState};
use chat_echo::server;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Running server plus the handle that stops it.
struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<chat_echo::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let router = create_router(AppState::new());
        let handle = tokio::spawn(server::serve(listener, router, async move {
            rx.await.ok();
        }));

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            tx.send(()).ok();
        }
        self.handle.await.unwrap().unwrap();
    }
}

async fn json_body(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_json_message_is_echoed() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/chat"))
        .json(&json!({"message": "hello"}))
        .send()
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "message": "hello"}));

    server.stop().await;
}

#[tokio::test]
async fn test_empty_json_object_is_rejected() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/chat"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(!body["error"].as_str().unwrap().is_empty());

    server.stop().await;
}

#[tokio::test]
async fn test_empty_json_message_is_rejected() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/chat"))
        .json(&json!({"message": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    server.stop().await;
}

#[tokio::test]
async fn test_form_message_is_echoed() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/chat"))
        .form(&[("message", "world")])
        .send()
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "message": "world"}));

    server.stop().await;
}

#[tokio::test]
async fn test_raw_text_is_trimmed() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/chat"))
        .body("  plain text  ")
        .send()
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "message": "plain text"}));

    server.stop().await;
}

#[tokio::test]
async fn test_form_declared_plain_text_is_echoed() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // What `curl -d "hello there" /chat` sends.
    let response = client
        .post(server.url("/chat"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("hello there")
        .send()
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "message": "hello there"}));

    server.stop().await;
}

#[tokio::test]
async fn test_blank_bodies_are_rejected() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for body in ["", "   \n\t"] {
        let response = client
            .post(server.url("/chat"))
            .body(body)
            .send()
            .await
            .unwrap();

        let (status, json) = json_body(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(json["status"], "error");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_health_is_stateless() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // Interleave chat traffic to make sure nothing leaks into /health.
    client
        .post(server.url("/chat"))
        .body("noise")
        .send()
        .await
        .unwrap();

    for _ in 0..3 {
        let response = client.get(server.url("/health")).send().await.unwrap();
        let (status, body) = json_body(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    server.stop().await;
}

#[tokio::test]
async fn test_chat_get_returns_ready() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/chat?message=ignored&foo=bar"))
        .send()
        .await
        .unwrap();

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert!(body["hint"].is_string());

    server.stop().await;
}

#[tokio::test]
async fn test_repeated_post_is_idempotent() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut responses = Vec::new();
    for _ in 0..3 {
        let response = client
            .post(server.url("/chat"))
            .json(&json!({"message": "again"}))
            .send()
            .await
            .unwrap();
        responses.push(json_body(response).await);
    }

    assert!(responses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(responses[0].0, StatusCode::OK);

    server.stop().await;
}

#[tokio::test]
async fn test_cross_origin_is_allowed() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/chat"))
        .header("Origin", "https://elsewhere.example")
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    server.stop().await;
}
