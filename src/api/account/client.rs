//! Typed wrappers for the account endpoints. These helpers validate input,
//! shape request bodies, and never log passwords.

use super::types::{validate_password, valid_email, KeyAndPassword, ManagedUser};
use crate::api::{ApiClient, ApiError, ApiResponse, Endpoint, RequestBody, Resource};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct AccountApi {
    register: Resource,
    password: Resource,
    password_reset_init: Resource,
    password_reset_finish: Resource,
}

impl AccountApi {
    #[must_use]
    pub fn new(client: &ApiClient) -> Self {
        Self {
            register: Endpoint::Register.resource(client),
            password: Endpoint::ChangePassword.resource(client),
            password_reset_init: Endpoint::PasswordResetInit.resource(client),
            password_reset_finish: Endpoint::PasswordResetFinish.resource(client),
        }
    }

    /// Creates an account; the server sends an activation e-mail.
    /// # Errors
    /// Returns an error if validation fails, the request fails, or the server rejects it.
    #[instrument(skip_all, fields(login = %user.login))]
    pub async fn register(&self, user: &ManagedUser) -> Result<ApiResponse, ApiError> {
        user.validate()?;
        let body = serde_json::to_value(user)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;

        debug!("registering account");
        self.register.save(&[], RequestBody::Json(body)).await
    }

    /// Changes the password of the authenticated account.
    /// # Errors
    /// Returns an error if validation fails, the request fails, or the server rejects it.
    #[instrument(skip_all)]
    pub async fn change_password(&self, password: &SecretString) -> Result<ApiResponse, ApiError> {
        validate_password(password)?;

        self.password
            .save(&[], RequestBody::Text(password.expose_secret().to_string()))
            .await
    }

    /// Requests a password reset e-mail for `email`.
    /// # Errors
    /// Returns an error if the address is invalid, the request fails, or the server rejects it.
    #[instrument(skip_all)]
    pub async fn reset_password_init(&self, email: &str) -> Result<ApiResponse, ApiError> {
        let email = email.trim();
        if !valid_email(email) {
            return Err(ApiError::Validation(
                "email must be a valid address".to_string(),
            ));
        }

        self.password_reset_init
            .save(&[], RequestBody::Text(email.to_string()))
            .await
    }

    /// Completes a password reset with the key from the e-mail link.
    /// # Errors
    /// Returns an error if validation fails, the request fails, or the server rejects it.
    #[instrument(skip_all)]
    pub async fn reset_password_finish(
        &self,
        request: &KeyAndPassword,
    ) -> Result<ApiResponse, ApiError> {
        request.validate()?;
        let body = serde_json::to_value(request)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;

        self.password_reset_finish
            .save(&[], RequestBody::Json(body))
            .await
    }
}
