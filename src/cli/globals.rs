use crate::alerts::AlertHeaders;
use crate::cli::commands::{ARG_API_URL, ARG_APP_NAME, ARG_TIMEOUT};
use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub api_url: String,
    pub app_name: String,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            app_name: crate::APP_NAME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// # Errors
    /// Returns an error if `--api-url` is missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let api_url = matches
            .get_one::<String>(ARG_API_URL)
            .cloned()
            .context("missing required argument: --api-url")?;

        let mut globals = Self::new(api_url);

        if let Some(app_name) = matches
            .get_one::<String>(ARG_APP_NAME)
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
        {
            globals.app_name = app_name.to_string();
        }

        if let Some(seconds) = matches.get_one::<u64>(ARG_TIMEOUT) {
            globals.timeout = Duration::from_secs(*seconds);
        }

        Ok(globals)
    }

    #[must_use]
    pub fn alert_headers(&self) -> AlertHeaders {
        AlertHeaders::new(&self.app_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new("https://monitor.tld".to_string());
        assert_eq!(args.api_url, "https://monitor.tld");
        assert_eq!(args.app_name, crate::APP_NAME);
        assert_eq!(args.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_alert_headers_follow_app_name() {
        let mut args = GlobalArgs::new("https://monitor.tld".to_string());
        args.app_name = "otherApp".to_string();
        assert_eq!(args.alert_headers().alert(), "X-otherApp-alert");
    }
}
