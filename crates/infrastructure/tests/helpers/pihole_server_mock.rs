#![allow(dead_code)]
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const MOCK_SID: &str = "mock-session-id";

struct MockState {
    /// Password (v6) or API token (legacy); `None` means open instance
    password: Option<String>,
    summary_status: Mutex<StatusCode>,
    summary_body: Mutex<String>,
    summary_delay: Mutex<Option<Duration>>,
    auth_calls: AtomicUsize,
    summary_calls: AtomicUsize,
    last_sid: Mutex<Option<String>>,
    last_query: Mutex<HashMap<String, String>>,
}

/// In-process Pi-hole speaking both the v6 and the legacy API.
pub struct MockPiholeServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockPiholeServer {
    pub async fn start(password: Option<&str>) -> Self {
        let state = Arc::new(MockState {
            password: password.map(str::to_string),
            summary_status: Mutex::new(StatusCode::OK),
            summary_body: Mutex::new(default_summary().to_string()),
            summary_delay: Mutex::new(None),
            auth_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
            last_sid: Mutex::new(None),
            last_query: Mutex::new(HashMap::new()),
        });

        let app = Router::new()
            .route("/api/auth", post(auth_handler))
            .route("/api/stats/summary", get(v6_summary_handler))
            .route("/admin/api.php", get(legacy_api_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// `host:port`, as a user would type it
    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn set_summary(&self, status: StatusCode, body: impl Into<String>) {
        *self.state.summary_status.lock().unwrap() = status;
        *self.state.summary_body.lock().unwrap() = body.into();
    }

    pub fn set_summary_delay(&self, delay: Duration) {
        *self.state.summary_delay.lock().unwrap() = Some(delay);
    }

    pub fn auth_calls(&self) -> usize {
        self.state.auth_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.state.summary_calls.load(Ordering::SeqCst)
    }

    pub fn last_sid(&self) -> Option<String> {
        self.state.last_sid.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> HashMap<String, String> {
        self.state.last_query.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockPiholeServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn default_summary() -> Value {
    json!({
        "domains_being_blocked": 150000,
        "dns_queries_today": 12345,
        "ads_blocked_today": 678,
        "ads_percentage_today": 5.49,
        "status": "enabled"
    })
}

async fn auth_handler(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.auth_calls.fetch_add(1, Ordering::SeqCst);

    let given = body.get("password").and_then(Value::as_str);
    match state.password.as_deref() {
        None => Json(json!({
            "session": { "valid": true, "totp": false, "sid": null, "validity": -1, "message": "no password set" }
        }))
        .into_response(),
        Some(expected) if given == Some(expected) => Json(json!({
            "session": { "valid": true, "totp": false, "sid": MOCK_SID, "csrf": "csrf", "validity": 1800, "message": "password correct" }
        }))
        .into_response(),
        Some(_) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "session": { "valid": false, "totp": false, "sid": null, "validity": -1, "message": "password incorrect" }
            })),
        )
            .into_response(),
    }
}

async fn v6_summary_handler(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.summary_calls.fetch_add(1, Ordering::SeqCst);

    let sid = headers
        .get("x-ftl-sid")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.last_sid.lock().unwrap() = sid.clone();

    if state.password.is_some() && sid.as_deref() != Some(MOCK_SID) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": { "key": "unauthorized", "message": "Unauthorized", "hint": null }
            })),
        )
            .into_response();
    }

    configured_summary(&state).await
}

async fn legacy_api_handler(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.summary_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = params.clone();

    if let Some(token) = state.password.as_deref() {
        if params.get("auth").map(String::as_str) != Some(token) {
            return (StatusCode::OK, "[]").into_response();
        }
    }

    configured_summary(&state).await
}

async fn configured_summary(state: &MockState) -> Response {
    let delay = *state.summary_delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let status = *state.summary_status.lock().unwrap();
    let body = state.summary_body.lock().unwrap().clone();
    (status, [("content-type", "application/json")], body).into_response()
}
