#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Identifier the stub rejects with 404 on every POST route.
pub const MISSING_ID: &str = "404";

#[derive(Clone, Default)]
struct StubState {
    hits: Arc<Mutex<Vec<String>>>,
    analytics_fails: bool,
}

pub struct StubBackend {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl StubBackend {
    pub async fn start() -> Self {
        Self::spawn(StubState::default()).await
    }

    pub async fn start_with_broken_analytics() -> Self {
        Self::spawn(StubState {
            analytics_fails: true,
            ..StubState::default()
        })
        .await
    }

    async fn spawn(state: StubState) -> Self {
        let hits = Arc::clone(&state.hits);
        let app = Router::new()
            .route("/flag_message/:id", post(action))
            .route("/admin/:action/:id", post(admin_action))
            .route("/search_user", get(search_user))
            .route("/api/analytics", get(analytics))
            .layer(middleware::from_fn_with_state(state.clone(), record_hit))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub backend");
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            handle,
        }
    }

    /// Every request seen so far, as `METHOD /path?query`.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

async fn record_hit(State(state): State<StubState>, request: Request, next: Next) -> Response {
    let target = request
        .uri()
        .path_and_query()
        .map(|value| value.as_str().to_string())
        .unwrap_or_default();
    state
        .hits
        .lock()
        .unwrap()
        .push(format!("{} {}", request.method(), target));
    next.run(request).await
}

async fn action(Path(id): Path<String>) -> StatusCode {
    status_for(&id)
}

async fn admin_action(Path((_action, id)): Path<(String, String)>) -> StatusCode {
    status_for(&id)
}

fn status_for(id: &str) -> StatusCode {
    if id == MISSING_ID {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn search_user(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("username").map(String::as_str) {
        Some("ada") | Some("Ada Lovelace") => Json(json!({
            "success": true,
            "user": { "full_name": "Ada Lovelace" }
        }))
        .into_response(),
        Some("broken") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "no such user" })),
        )
            .into_response(),
    }
}

async fn analytics(State(state): State<StubState>) -> Response {
    if state.analytics_fails {
        return (StatusCode::INTERNAL_SERVER_ERROR, "analytics unavailable").into_response();
    }
    Json(json!({
        "total_users": 42,
        "total_messages": 1337,
        "total_flagged": 5,
        "messages_per_day": {
            "labels": ["2026-10-13", "2026-10-14", "2026-10-15"],
            "counts": [400, 500, 437]
        },
        "flag_breakdown": { "spam": 3, "harassment": 2 }
    }))
    .into_response()
}
