//! Build alert headers on the server side of the contract.
//!
//! Handlers attach the returned map to their response; clients running a
//! [`super::ResponseNotifier`] pick the alert up from there.

use super::AlertHeaders;
use crate::api::ApiError;
use http::{HeaderMap, HeaderName, HeaderValue};

/// Headers announcing `message` with a single substitution parameter.
///
/// # Errors
/// Returns `ApiError::Header` if the app name or any value is not valid header text.
pub fn create_alert(
    names: &AlertHeaders,
    message: &str,
    param: &str,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(header_name(names.alert())?, header_value(message)?);
    headers.insert(header_name(names.params())?, header_value(param)?);
    Ok(headers)
}

/// # Errors
/// Returns `ApiError::Header` if the resulting headers are invalid.
pub fn entity_creation_alert(
    names: &AlertHeaders,
    entity_name: &str,
    param: &str,
) -> Result<HeaderMap, ApiError> {
    create_alert(
        names,
        &format!("A new {entity_name} is created with identifier {param}"),
        param,
    )
}

/// # Errors
/// Returns `ApiError::Header` if the resulting headers are invalid.
pub fn entity_update_alert(
    names: &AlertHeaders,
    entity_name: &str,
    param: &str,
) -> Result<HeaderMap, ApiError> {
    create_alert(
        names,
        &format!("A {entity_name} is updated with identifier {param}"),
        param,
    )
}

/// # Errors
/// Returns `ApiError::Header` if the resulting headers are invalid.
pub fn entity_deletion_alert(
    names: &AlertHeaders,
    entity_name: &str,
    param: &str,
) -> Result<HeaderMap, ApiError> {
    create_alert(
        names,
        &format!("A {entity_name} is deleted with identifier {param}"),
        param,
    )
}

/// Failure headers use `X-<AppName>-error`, which the notifier does not relay.
/// `error_key` is accepted for symmetry with the other producers but not sent.
///
/// # Errors
/// Returns `ApiError::Header` if the resulting headers are invalid.
pub fn failure_alert(
    names: &AlertHeaders,
    entity_name: &str,
    _error_key: &str,
    default_message: &str,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(header_name(names.error())?, header_value(default_message)?);
    headers.insert(header_name(names.params())?, header_value(entity_name)?);
    Ok(headers)
}

fn header_name(name: &str) -> Result<HeaderName, ApiError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|err| ApiError::Header(format!("invalid header name {name:?}: {err}")))
}

fn header_value(value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value)
        .map_err(|err| ApiError::Header(format!("invalid header value {value:?}: {err}")))
}
