//! Server-driven alerts carried in response headers.
//!
//! Flow Overview:
//! 1) The server sets `X-<AppName>-alert` (message key) and optionally
//!    `X-<AppName>-params` on a response (see [`headers`]).
//! 2) The client pipeline hands each response to a [`ResponseNotifier`].
//! 3) The notifier relays the key and parameter to an [`AlertService`] and
//!    returns the response unchanged.
//!
//! The alert value is a message key meant for translation lookup, never text
//! to display as-is.

pub mod headers;
pub mod layer;
pub mod notifier;
pub mod service;

pub use self::layer::{NotificationLayer, NotificationService};
pub use self::notifier::ResponseNotifier;
pub use self::service::{Alert, AlertLog, AlertParams, AlertService, LogAlerts};

use http::{HeaderMap, HeaderValue};

/// Header names for one application, e.g. `X-versionmonitorApp-alert`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertHeaders {
    alert: String,
    params: String,
    error: String,
}

impl AlertHeaders {
    #[must_use]
    pub fn new(app_name: &str) -> Self {
        let app_name = app_name.trim();
        Self {
            alert: format!("X-{app_name}-alert"),
            params: format!("X-{app_name}-params"),
            error: format!("X-{app_name}-error"),
        }
    }

    #[must_use]
    pub fn alert(&self) -> &str {
        &self.alert
    }

    #[must_use]
    pub fn params(&self) -> &str {
        &self.params
    }

    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }
}

impl Default for AlertHeaders {
    fn default() -> Self {
        Self::new(crate::APP_NAME)
    }
}

/// Read-only, case-insensitive header access on anything response-shaped.
pub trait HeaderLookup {
    fn header(&self, name: &str) -> Option<&HeaderValue>;

    /// Header value as text; `None` when missing or not visible ASCII.
    fn header_str(&self, name: &str) -> Option<&str> {
        self.header(name).and_then(|value| value.to_str().ok())
    }
}

impl HeaderLookup for HeaderMap {
    fn header(&self, name: &str) -> Option<&HeaderValue> {
        // `HeaderMap::get` normalizes the name and yields `None` for invalid names.
        self.get(name)
    }
}

impl<B> HeaderLookup for http::Response<B> {
    fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers().get(name)
    }
}

impl HeaderLookup for reqwest::Response {
    fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers().get(name)
    }
}

impl<T: HeaderLookup + ?Sized> HeaderLookup for &T {
    fn header(&self, name: &str) -> Option<&HeaderValue> {
        (**self).header(name)
    }
}
