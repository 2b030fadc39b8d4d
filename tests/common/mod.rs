#![allow(dead_code)]

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// What the stub backend answers with.
#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, serde_json::Value),
    Text(&'static str),
}

#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    received: Arc<Mutex<Vec<Received>>>,
}

pub struct StubBackend {
    pub base_url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl StubBackend {
    pub async fn received(&self) -> Vec<Received> {
        self.received.lock().await.clone()
    }
}

async fn save_productivity(State(state): State<StubState>, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    state.received.lock().await.push(Received { content_type, body });

    match state.reply {
        Reply::Json(status, value) => (status, axum::Json(value)).into_response(),
        Reply::Text(text) => (StatusCode::OK, text).into_response(),
    }
}

/// Starts a stand-in for the productivity backend on an ephemeral port.
pub async fn spawn_backend(reply: Reply) -> StubBackend {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        reply,
        received: Arc::clone(&received),
    };
    let app = Router::new()
        .route("/save_productivity", post(save_productivity))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend");
    });

    StubBackend {
        base_url: format!("http://{addr}"),
        received,
    }
}

/// An address nothing is listening on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
