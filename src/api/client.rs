//! HTTP client for the account API with a response interceptor chain.
//!
//! Flow Overview:
//! - Join the endpoint path onto the configured base URL.
//! - Send the request with the shared `reqwest::Client` (timeouts live there).
//! - Hand a 2xx response to every interceptor, in registration order.
//! - Map non-success statuses to `ApiError::Http` with a sanitized body.
//!
//! Error statuses skip the interceptors, like transport failures do.

use super::error::{map_request_error, sanitize_body, ApiError};
use crate::alerts::{AlertService, ResponseNotifier};
use reqwest::{header::CONTENT_TYPE, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{fmt, sync::Arc, time::Duration};
use tracing::{debug, info_span, Instrument};
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Response-stage hook in the client pipeline.
pub trait ResponseInterceptor: Send + Sync {
    /// Observe `response` and return it for the next stage.
    fn response(&self, response: reqwest::Response) -> reqwest::Response;
}

impl<S: AlertService> ResponseInterceptor for ResponseNotifier<S> {
    fn response(&self, response: reqwest::Response) -> reqwest::Response {
        self.on_response(response)
    }
}

/// Request payloads understood by the client.
#[derive(Clone, Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    /// Sent as-is with `text/plain`.
    Text(String),
}

/// Successful response with its body read as text.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub url: String,
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON.
    /// # Errors
    /// Returns `ApiError::Parse` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body)
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Build a client for `base_url` with the given request timeout.
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self::from_parts(client, base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn from_parts(client: reqwest::Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            interceptors: Vec::new(),
        }
    }

    /// Append a response interceptor; interceptors run in the order added.
    #[must_use]
    pub fn with_interceptor<I: ResponseInterceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    /// # Errors
    /// Returns an error if the joined URL is invalid.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim().trim_start_matches('/'))
            .map_err(|err| ApiError::Config(format!("Invalid endpoint path {path:?}: {err}")))
    }

    /// Execute a request against `path` and run the interceptor chain on a 2xx response.
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.endpoint_url(path)?;
        let span = info_span!("api.request", http.method = %method, url = %url);

        async move {
            let mut request = self.client.request(method, url.clone());
            if !query.is_empty() {
                request = request.query(query);
            }
            request = match body {
                RequestBody::Empty => request,
                RequestBody::Json(value) => request.json(&value),
                RequestBody::Text(text) => request.header(CONTENT_TYPE, "text/plain").body(text),
            };

            let response = request.send().await.map_err(|err| map_request_error(&err))?;
            let status = response.status();
            let response = if status.is_success() {
                self.intercept(response)
            } else {
                response
            };

            let headers = response.headers().clone();
            let url = response.url().to_string();
            debug!(http.status = status.as_u16(), "response received");

            let body = response
                .text()
                .await
                .map_err(|err| ApiError::Parse(format!("Failed to read response: {err}")))?;

            if !status.is_success() {
                return Err(ApiError::Http {
                    status: status.as_u16(),
                    message: sanitize_body(&body),
                });
            }

            Ok(ApiResponse {
                url,
                status,
                headers,
                body,
            })
        }
        .instrument(span)
        .await
    }

    fn intercept(&self, response: reqwest::Response) -> reqwest::Response {
        self.interceptors
            .iter()
            .fold(response, |response, interceptor| interceptor.response(response))
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

/// Parse an http(s) base URL and make sure relative paths join beneath it.
/// # Errors
/// Returns `ApiError::Config` if the URL is empty, invalid, or not http(s).
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Config("API base URL is empty".to_string()));
    }

    let mut url = Url::parse(trimmed)
        .map_err(|err| ApiError::Config(format!("Invalid API base URL {trimmed:?}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ApiError::Config(format!(
                "Unsupported API base URL scheme: {scheme}"
            )))
        }
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
