//! # Version Monitor account client
//!
//! `versionmonitor` talks to the account endpoints of a Version Monitor server
//! (registration, password change, password reset) and relays server-driven
//! alerts to the user.
//!
//! ## Alerts
//!
//! The server attaches an alert to any response by setting two headers:
//!
//! - `X-<AppName>-alert`: a message key (not display text).
//! - `X-<AppName>-params`: an optional single substitution parameter.
//!
//! Every response the [`api::ApiClient`] receives passes through its
//! interceptor chain. A [`alerts::ResponseNotifier`] in that chain reads both
//! headers and, when an alert is present, calls
//! [`alerts::AlertService::success`]. The response itself is handed back
//! untouched.
//!
//! ## Endpoints
//!
//! | Binding | Path |
//! |---|---|
//! | `Register` | `api/register` |
//! | `ChangePassword` | `api/account/change_password` |
//! | `PasswordResetInit` | `api/account/reset_password/init` |
//! | `PasswordResetFinish` | `api/account/reset_password/finish` |

pub mod alerts;
pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Application identifier used in alert header names, fixed at build time.
pub const APP_NAME: &str = match option_env!("VERSIONMONITOR_APP_NAME") {
    Some(name) => name,
    None => "versionmonitorApp",
};
