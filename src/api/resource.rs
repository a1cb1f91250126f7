use super::{ApiClient, ApiError, ApiResponse, Endpoint, RequestBody};
use reqwest::Method;

/// Default actions available on every resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Get,
    Query,
    Save,
    Remove,
    Delete,
}

impl Action {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Get | Self::Query => Method::GET,
            Self::Save => Method::POST,
            Self::Remove | Self::Delete => Method::DELETE,
        }
    }
}

/// A REST resource bound to one fixed endpoint path.
///
/// Requests carry only what the caller supplies; the resource adds no headers
/// and does not reshape bodies.
#[derive(Clone, Debug)]
pub struct Resource {
    client: ApiClient,
    endpoint: Endpoint,
}

impl Resource {
    #[must_use]
    pub fn new(client: ApiClient, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn get(&self, params: &[(&str, &str)]) -> Result<ApiResponse, ApiError> {
        self.call(Action::Get, params, RequestBody::Empty).await
    }

    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn query(&self, params: &[(&str, &str)]) -> Result<ApiResponse, ApiError> {
        self.call(Action::Query, params, RequestBody::Empty).await
    }

    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn save(
        &self,
        params: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<ApiResponse, ApiError> {
        self.call(Action::Save, params, body).await
    }

    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn remove(&self, params: &[(&str, &str)]) -> Result<ApiResponse, ApiError> {
        self.call(Action::Remove, params, RequestBody::Empty).await
    }

    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete(&self, params: &[(&str, &str)]) -> Result<ApiResponse, ApiError> {
        self.call(Action::Delete, params, RequestBody::Empty).await
    }

    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn call(
        &self,
        action: Action,
        params: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<ApiResponse, ApiError> {
        self.client
            .execute(action.method(), self.endpoint.path(), params, body)
            .await
    }
}

impl Endpoint {
    /// Bind this endpoint to `client`.
    #[must_use]
    pub fn resource(self, client: &ApiClient) -> Resource {
        Resource::new(client.clone(), self)
    }
}
