//! In-process stand-in for the remote auth API, bound to an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Json, Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::Value;

/// One multipart part as the backend received it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl RecordedPart {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

#[derive(Clone, Default)]
pub struct Recorder {
    logins: Arc<Mutex<Vec<Value>>>,
    signups: Arc<Mutex<Vec<Vec<RecordedPart>>>>,
}

impl Recorder {
    pub fn logins(&self) -> Vec<Value> {
        self.logins.lock().expect("logins lock").clone()
    }

    pub fn signups(&self) -> Vec<Vec<RecordedPart>> {
        self.signups.lock().expect("signups lock").clone()
    }
}

#[derive(Clone)]
struct MockState {
    recorder: Recorder,
    login_status: StatusCode,
    login_body: Value,
    signup_status: StatusCode,
}

pub struct MockBackend {
    pub base_url: String,
    pub recorder: Recorder,
}

/// Start a backend answering login with `login_status`/`login_body` and
/// signup with `signup_status`.
pub async fn spawn_backend(login_status: StatusCode, login_body: Value, signup_status: StatusCode) -> MockBackend {
    let recorder = Recorder::default();
    let state = MockState { recorder: recorder.clone(), login_status, login_body, signup_status };
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/signup", post(signup))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockBackend { base_url: format!("http://{addr}"), recorder }
}

/// A base URL nothing is listening on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

async fn login(State(state): State<MockState>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    state.recorder.logins.lock().expect("logins lock").push(body);
    (state.login_status, Json(state.login_body.clone()))
}

async fn signup(State(state): State<MockState>, mut multipart: Multipart) -> StatusCode {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(ToOwned::to_owned);
        let content_type = field.content_type().map(ToOwned::to_owned);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(RecordedPart { name, file_name, content_type, bytes });
    }
    state.recorder.signups.lock().expect("signups lock").push(parts);
    state.signup_status
}
