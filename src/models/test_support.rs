//! In-process stand-in for the LiteLLM proxy, used by tests.

use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use crate::constants::CHAT_COMPLETIONS_PATH;

/// What the mock proxy answers with
#[derive(Debug, Clone)]
pub struct MockReply {
    status: u16,
    body: String,
}

impl MockReply {
    /// A well-formed completion whose first choice carries `text`
    pub fn content(text: &str) -> Self {
        let body = json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "finish_reason": "stop",
                "message": {"role": "assistant", "content": text}
            }],
            "usage": {"prompt_tokens": 2, "completion_tokens": 1, "total_tokens": 3}
        });
        Self::raw(200, &body.to_string())
    }

    /// Any status code with an arbitrary body
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// A request as seen by the mock proxy
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

struct MockState {
    reply: MockReply,
    seen: Mutex<Vec<SeenRequest>>,
}

pub struct MockProxy {
    base_url: String,
    state: Arc<MockState>,
}

impl MockProxy {
    /// Bind to an ephemeral local port and answer every completion with `reply`
    pub async fn start(reply: MockReply) -> Self {
        let state = Arc::new(MockState {
            reply,
            seen: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(CHAT_COMPLETIONS_PATH, post(handle_completion))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// A base URL nothing is listening on
    pub async fn unused_base_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<SeenRequest> {
        self.requests().pop()
    }
}

async fn handle_completion(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);

    state
        .seen
        .lock()
        .unwrap()
        .push(SeenRequest { authorization, body });

    let status = StatusCode::from_u16(state.reply.status).unwrap();
    (
        status,
        [(CONTENT_TYPE, "application/json")],
        state.reply.body.clone(),
    )
}
