use serde::Serialize;
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};
use tracing::info;

/// Substitution parameters for an alert message key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AlertParams {
    pub param: Option<String>,
}

impl AlertParams {
    #[must_use]
    pub fn new(param: Option<String>) -> Self {
        Self { param }
    }
}

/// Displays messages to the user. Implementations decide how keys are rendered.
pub trait AlertService: Send + Sync {
    /// Report a success-style alert identified by a message key.
    fn success(&self, key: &str, params: &AlertParams);
}

impl<S: AlertService + ?Sized> AlertService for Arc<S> {
    fn success(&self, key: &str, params: &AlertParams) {
        (**self).success(key, params);
    }
}

impl<S: AlertService + ?Sized> AlertService for &S {
    fn success(&self, key: &str, params: &AlertParams) {
        (**self).success(key, params);
    }
}

/// A relayed alert as recorded by [`AlertLog`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub key: String,
    pub params: AlertParams,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.params.param.as_deref() {
            Some(param) if !param.is_empty() => write!(f, "{} ({param})", self.key),
            _ => f.write_str(&self.key),
        }
    }
}

/// Collects alerts in memory; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct AlertLog {
    entries: Arc<Mutex<Vec<Alert>>>,
}

impl AlertLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every alert recorded so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Alert> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return the recorded alerts.
    pub fn drain(&self) -> Vec<Alert> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlertService for AlertLog {
    fn success(&self, key: &str, params: &AlertParams) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Alert {
                key: key.to_string(),
                params: params.clone(),
            });
    }
}

/// Reports alerts as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAlerts;

impl AlertService for LogAlerts {
    fn success(&self, key: &str, params: &AlertParams) {
        info!(alert.key = key, alert.param = ?params.param, "alert");
    }
}
