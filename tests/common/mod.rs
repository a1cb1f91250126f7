//! Local mock of the account API. Every request is captured; responses attach
//! alert headers the same way the real server does.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use versionmonitor::alerts::{headers, AlertHeaders};

pub const APP_NAME: &str = "testApp";

#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<CapturedRequest>>>);

impl Captured {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> CapturedRequest {
        self.requests().pop().expect("at least one request")
    }
}

pub struct MockServer {
    pub base_url: String,
    pub captured: Captured,
}

/// Start the mock on an ephemeral port. `base_path` is prefixed to every route
/// the client is expected to hit, e.g. `/app`.
pub async fn start(base_path: &str) -> MockServer {
    let captured = Captured::default();
    let app = Router::new()
        .fallback(respond)
        .with_state(captured.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        base_url: format!("http://{addr}{base_path}"),
        captured,
    }
}

async fn respond(
    State(captured): State<Captured>,
    method: Method,
    uri: Uri,
    request_headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = String::from_utf8_lossy(&body).to_string();
    captured.0.lock().unwrap().push(CapturedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(ToString::to_string),
        content_type: request_headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string),
        body: body.clone(),
    });

    let names = AlertHeaders::new(APP_NAME);
    let path = uri.path();

    if path.ends_with("/api/register") {
        let login = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value["login"].as_str().map(ToString::to_string))
            .unwrap_or_default();
        if login == "taken" {
            let headers =
                headers::failure_alert(&names, "user-management", "userexists", "Login already in use")
                    .unwrap();
            return (StatusCode::BAD_REQUEST, headers, "login already in use".to_string());
        }
        let headers = headers::create_alert(&names, "register.messages.success", &login).unwrap();
        return (StatusCode::CREATED, headers, String::new());
    }

    if path.ends_with("/api/account/change_password") {
        return (StatusCode::OK, HeaderMap::new(), String::new());
    }

    if path.ends_with("/api/account/reset_password/init") {
        let mut headers = HeaderMap::new();
        headers.insert(
            names.alert().parse::<axum::http::HeaderName>().unwrap(),
            "reset.request.messages.success".parse().unwrap(),
        );
        return (StatusCode::OK, headers, String::new());
    }

    if path.ends_with("/api/account/reset_password/finish") {
        if body.contains("\"expired\"") {
            // The server still attaches an alert; clients must not relay it.
            let headers = headers::create_alert(&names, "reset.finish.messages.expired", "").unwrap();
            return (StatusCode::BAD_REQUEST, headers, "  reset key expired  ".to_string());
        }
        let headers = headers::create_alert(&names, "reset.finish.messages.success", "").unwrap();
        return (StatusCode::OK, headers, String::new());
    }

    (StatusCode::NOT_FOUND, HeaderMap::new(), "not found".to_string())
}
