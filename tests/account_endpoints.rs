#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::Method;
use secrecy::SecretString;
use std::time::Duration;
use versionmonitor::{
    alerts::{AlertHeaders, AlertLog, AlertParams, ResponseNotifier},
    api::{
        account::{AccountApi, KeyAndPassword, ManagedUser},
        ApiClient, ApiError, Endpoint, RequestBody,
    },
};

fn client(base_url: &str, log: &AlertLog) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(5))
        .expect("client")
        .with_interceptor(ResponseNotifier::with_headers(
            AlertHeaders::new(common::APP_NAME),
            log.clone(),
        ))
}

fn user(login: &str) -> ManagedUser {
    ManagedUser {
        login: login.to_string(),
        password: SecretString::from("s3cret"),
        first_name: Some("Alice".to_string()),
        last_name: None,
        email: "alice@example.com".to_string(),
        lang_key: Some("en".to_string()),
    }
}

#[tokio::test]
async fn bindings_hit_their_fixed_paths() {
    let server = common::start("").await;
    let client = ApiClient::new(&server.base_url, Duration::from_secs(5)).expect("client");

    for endpoint in Endpoint::ALL {
        endpoint
            .resource(&client)
            .save(&[], RequestBody::Empty)
            .await
            .ok();
    }

    let seen: Vec<(Method, String)> = server
        .captured
        .requests()
        .into_iter()
        .map(|request| (request.method, request.path))
        .collect();
    assert_eq!(
        seen,
        vec![
            (Method::POST, "/api/register".to_string()),
            (Method::POST, "/api/account/change_password".to_string()),
            (Method::POST, "/api/account/reset_password/init".to_string()),
            (Method::POST, "/api/account/reset_password/finish".to_string()),
        ]
    );
}

#[tokio::test]
async fn default_actions_use_their_verbs() {
    let server = common::start("").await;
    let client = ApiClient::new(&server.base_url, Duration::from_secs(5)).expect("client");
    let resource = Endpoint::ChangePassword.resource(&client);

    resource.get(&[("login", "alice")]).await.expect("get");
    resource.query(&[]).await.expect("query");
    resource.remove(&[]).await.expect("remove");
    resource.delete(&[]).await.expect("delete");

    let requests = server.captured.requests();
    let methods: Vec<Method> = requests.iter().map(|r| r.method.clone()).collect();
    assert_eq!(
        methods,
        vec![Method::GET, Method::GET, Method::DELETE, Method::DELETE]
    );
    assert!(requests
        .iter()
        .all(|r| r.path == "/api/account/change_password"));
    assert_eq!(requests[0].query.as_deref(), Some("login=alice"));
    assert_eq!(requests[1].query, None);
}

#[tokio::test]
async fn bindings_resolve_under_base_path() {
    let server = common::start("/monitor").await;
    let client = ApiClient::new(&server.base_url, Duration::from_secs(5)).expect("client");

    Endpoint::PasswordResetInit
        .resource(&client)
        .save(&[], RequestBody::Text("alice@example.com".to_string()))
        .await
        .ok();

    assert_eq!(
        server.captured.last().path,
        "/monitor/api/account/reset_password/init"
    );
}

#[tokio::test]
async fn register_relays_success_alert() {
    let server = common::start("").await;
    let log = AlertLog::new();
    let api = AccountApi::new(&client(&server.base_url, &log));

    let response = api.register(&user("alice")).await.expect("registered");

    assert_eq!(response.status.as_u16(), 201);
    let request = server.captured.last();
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(body["login"], "alice");
    assert_eq!(body["password"], "s3cret");
    assert_eq!(body["firstName"], "Alice");
    assert_eq!(body["langKey"], "en");

    let alerts = log.entries();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].key, "register.messages.success");
    assert_eq!(alerts[0].params, AlertParams::new(Some("alice".to_string())));
}

#[tokio::test]
async fn rejected_registration_reports_error_without_success_alert() {
    let server = common::start("").await;
    let log = AlertLog::new();
    let api = AccountApi::new(&client(&server.base_url, &log));

    let err = api.register(&user("taken")).await.expect_err("rejected");

    assert!(matches!(
        err,
        ApiError::Http { status: 400, ref message } if message == "login already in use"
    ));
    assert!(log.is_empty());
}

#[tokio::test]
async fn change_password_sends_plain_text() {
    let server = common::start("").await;
    let log = AlertLog::new();
    let api = AccountApi::new(&client(&server.base_url, &log));

    api.change_password(&SecretString::from("n3w-secret"))
        .await
        .expect("changed");

    let request = server.captured.last();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/account/change_password");
    assert_eq!(request.content_type.as_deref(), Some("text/plain"));
    assert_eq!(request.body, "n3w-secret");
    assert!(log.is_empty());
}

#[tokio::test]
async fn reset_init_alert_without_params() {
    let server = common::start("").await;
    let log = AlertLog::new();
    let api = AccountApi::new(&client(&server.base_url, &log));

    api.reset_password_init(" alice@example.com ")
        .await
        .expect("requested");

    assert_eq!(server.captured.last().body, "alice@example.com");
    let alerts = log.entries();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].key, "reset.request.messages.success");
    assert_eq!(alerts[0].params, AlertParams::new(None));
}

#[tokio::test]
async fn reset_finish_sends_key_and_password() {
    let server = common::start("").await;
    let log = AlertLog::new();
    let api = AccountApi::new(&client(&server.base_url, &log));

    api.reset_password_finish(&KeyAndPassword {
        key: "12345".to_string(),
        new_password: SecretString::from("n3w-secret"),
    })
    .await
    .expect("reset");

    let body: serde_json::Value =
        serde_json::from_str(&server.captured.last().body).expect("json body");
    assert_eq!(body, serde_json::json!({ "key": "12345", "newPassword": "n3w-secret" }));
    assert_eq!(log.entries()[0].key, "reset.finish.messages.success");
}

#[tokio::test]
async fn alerts_on_error_responses_are_not_relayed() {
    let server = common::start("").await;
    let log = AlertLog::new();
    let api = AccountApi::new(&client(&server.base_url, &log));

    let err = api
        .reset_password_finish(&KeyAndPassword {
            key: "expired".to_string(),
            new_password: SecretString::from("n3w-secret"),
        })
        .await
        .expect_err("expired key");

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Request failed (400): reset key expired");
    assert!(log.is_empty());
}

#[tokio::test]
async fn every_interceptor_sees_every_response() {
    let server = common::start("").await;
    let first = AlertLog::new();
    let second = AlertLog::new();
    let client = client(&server.base_url, &first).with_interceptor(
        ResponseNotifier::with_headers(AlertHeaders::new(common::APP_NAME), second.clone()),
    );
    let api = AccountApi::new(&client);

    api.register(&user("alice")).await.expect("first");
    api.register(&user("alice")).await.expect("second");

    assert_eq!(first.len(), 2);
    assert_eq!(first.entries(), second.entries());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let log = AlertLog::new();
    // Port 9 (discard) is not expected to accept HTTP connections locally.
    let api = AccountApi::new(&client("http://127.0.0.1:9", &log));

    let err = api
        .reset_password_init("alice@example.com")
        .await
        .expect_err("no server");

    assert!(matches!(err, ApiError::Network(_) | ApiError::Timeout(_)));
    assert!(log.is_empty());
}
