//! Account API access: endpoint table, resource bindings, and the HTTP client
//! whose interceptor chain feeds response alerts to the user.

pub mod account;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod resource;

pub use self::client::{parse_base_url, ApiClient, ApiResponse, RequestBody, ResponseInterceptor};
pub use self::endpoint::Endpoint;
pub use self::error::ApiError;
pub use self::resource::{Action, Resource};
