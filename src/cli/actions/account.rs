use crate::alerts::{Alert, AlertLog, ResponseNotifier};
use crate::api::{account::AccountApi, ApiClient};
use crate::cli::actions::Action;
use anyhow::{Context, Result};
use tracing::info;

/// Run the action and print relayed alerts.
///
/// # Errors
/// Returns an error if the request fails or the server rejects it.
pub async fn handle(action: Action) -> Result<()> {
    let alerts = run(action, AlertLog::new()).await?;

    if alerts.is_empty() {
        println!("Done.");
    }
    for alert in alerts {
        println!("{alert}");
    }

    Ok(())
}

/// Run the action with `alerts` as the notification sink and return what it collected.
///
/// The log is drained whether or not the action succeeds.
///
/// # Errors
/// Returns an error if the client cannot be built, the request fails, or the server rejects it.
pub async fn run(action: Action, alerts: AlertLog) -> Result<Vec<Alert>> {
    let result = send(&action, &alerts).await;
    let collected = alerts.drain();
    result.map(|()| collected)
}

async fn send(action: &Action, alerts: &AlertLog) -> Result<()> {
    let globals = action.globals();
    let notifier = ResponseNotifier::with_headers(globals.alert_headers(), alerts.clone());
    let client = ApiClient::new(&globals.api_url, globals.timeout)
        .context("failed to configure API client")?
        .with_interceptor(notifier);
    let api = AccountApi::new(&client);

    let response = match action {
        Action::Register { user, .. } => api
            .register(user)
            .await
            .context("registration failed")?,
        Action::ChangePassword { password, .. } => api
            .change_password(password)
            .await
            .context("password change failed")?,
        Action::ResetPasswordInit { email, .. } => api
            .reset_password_init(email)
            .await
            .context("password reset request failed")?,
        Action::ResetPasswordFinish { request, .. } => api
            .reset_password_finish(request)
            .await
            .context("password reset failed")?,
    };

    info!(status = response.status.as_u16(), url = %response.url, "request completed");

    Ok(())
}
