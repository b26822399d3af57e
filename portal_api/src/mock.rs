//! An in-process stand-in for the portal's auth endpoints, for tests.
//!
//! Replies are scripted per endpoint and every request is recorded, so a
//! test can assert both what the client saw and whether it called at all.

use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::routing::post;

use crate::PortalApi;
use crate::PortalConfig;
use crate::http::types::LoginRequest;

const SUCCESS_BODY: &'static str = r#"{"success":true}"#;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn credentials(&self) -> Option<LoginRequest> {
        serde_json::from_str(&self.body).ok()
    }
}

struct Endpoint {
    reply: Mutex<(u16, String)>,
    seen: Mutex<Vec<RecordedRequest>>,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            reply: Mutex::new((200, SUCCESS_BODY.to_string())),
            seen: Mutex::new(vec![]),
        }
    }
}

#[derive(Clone, Default)]
struct MockState {
    login: Arc<Endpoint>,
    logout: Arc<Endpoint>,
}

pub struct MockPortal {
    pub url: String,
    state: MockState,
}

impl MockPortal {
    /// Bind to an ephemeral port and serve on the current tokio runtime.
    pub async fn new() -> Result<Self> {
        let state = MockState::default();
        let config = PortalConfig::default();
        let app = Router::new()
            .route(&config.login_endpoint, post(login))
            .route(&config.logout_endpoint, post(logout))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?.to_string();
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                log::error!("mock portal stopped: {e}");
            }
        });

        Ok(Self {
            url: format!("http://{addr}"),
            state,
        })
    }

    /// A url nothing is listening on.
    pub async fn unreachable_url() -> Result<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);
        Ok(format!("http://{addr}"))
    }

    pub fn api(&self) -> PortalApi {
        PortalApi {
            url: self.url.clone(),
            config: PortalConfig::default(),
        }
    }

    pub fn respond_login(&self, status: u16, body: &str) {
        *self.state.login.reply.lock().unwrap() = (status, body.to_string());
    }

    pub fn respond_logout(&self, status: u16, body: &str) {
        *self.state.logout.reply.lock().unwrap() = (status, body.to_string());
    }

    pub fn login_requests(&self) -> Vec<RecordedRequest> {
        self.state.login.seen.lock().unwrap().clone()
    }

    pub fn logout_requests(&self) -> Vec<RecordedRequest> {
        self.state.logout.seen.lock().unwrap().clone()
    }
}

fn record(endpoint: &Endpoint, headers: HeaderMap, body: String) -> (StatusCode, String) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    endpoint
        .seen
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });
    let (status, body) = endpoint.reply.lock().unwrap().clone();
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        body,
    )
}

async fn login(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    record(&state.login, headers, body)
}

async fn logout(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    record(&state.logout, headers, body)
}
