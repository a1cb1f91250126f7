use super::{AlertHeaders, AlertParams, AlertService, HeaderLookup};
use tracing::debug;

/// Relays `X-<AppName>-alert` headers to an [`AlertService`].
///
/// The notifier is stateless: it reads two headers per response and never
/// alters the response it is given.
#[derive(Clone, Debug)]
pub struct ResponseNotifier<S> {
    headers: AlertHeaders,
    alerts: S,
}

impl<S: AlertService> ResponseNotifier<S> {
    /// Notifier for the build-time application name.
    pub fn new(alerts: S) -> Self {
        Self::with_headers(AlertHeaders::default(), alerts)
    }

    pub fn with_headers(headers: AlertHeaders, alerts: S) -> Self {
        Self { headers, alerts }
    }

    #[must_use]
    pub fn headers(&self) -> &AlertHeaders {
        &self.headers
    }

    /// Inspect `response`, notify if it carries an alert, and hand it back.
    pub fn on_response<R: HeaderLookup>(&self, response: R) -> R {
        self.inspect(&response);
        response
    }

    /// Notify for `response` without taking it. Returns whether an alert was relayed.
    pub fn inspect<R: HeaderLookup + ?Sized>(&self, response: &R) -> bool {
        let Some(key) = response
            .header_str(self.headers.alert())
            .filter(|key| !key.is_empty())
        else {
            return false;
        };

        let params = AlertParams::new(
            response
                .header(self.headers.params())
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned()),
        );

        debug!(alert.key = key, alert.param = ?params.param, "relaying response alert");
        self.alerts.success(key, &params);

        true
    }
}
