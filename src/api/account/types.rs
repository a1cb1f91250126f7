//! Account request payloads and the constraints the server enforces on them.
//! Validation runs before any request so obviously bad input never leaves the
//! client. Passwords are `SecretString` and are only exposed at serialization.

use crate::api::ApiError;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

const LOGIN_MAX_CHARS: usize = 50;
const NAME_MAX_CHARS: usize = 50;
const EMAIL_MAX_CHARS: usize = 100;
const PASSWORD_MIN_CHARS: usize = 4;
const PASSWORD_MAX_CHARS: usize = 100;

/// New account submitted to `api/register`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub login: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang_key: Option<String>,
}

impl ManagedUser {
    /// # Errors
    /// Returns `ApiError::Validation` describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !valid_login(&self.login) {
            return Err(ApiError::Validation(format!(
                "login must be 1-{LOGIN_MAX_CHARS} lowercase letters or digits"
            )));
        }
        if !valid_email(&self.email) {
            return Err(ApiError::Validation(format!(
                "email must be a valid address of at most {EMAIL_MAX_CHARS} characters"
            )));
        }
        validate_password(&self.password)?;
        for (field, value) in [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
        ] {
            if value
                .as_deref()
                .is_some_and(|value| value.chars().count() > NAME_MAX_CHARS)
            {
                return Err(ApiError::Validation(format!(
                    "{field} must be at most {NAME_MAX_CHARS} characters"
                )));
            }
        }
        Ok(())
    }
}

/// Reset key from the e-mail link plus the new password.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyAndPassword {
    pub key: String,
    #[serde(serialize_with = "expose")]
    pub new_password: SecretString,
}

impl KeyAndPassword {
    /// # Errors
    /// Returns `ApiError::Validation` if the key is empty or the password is out of bounds.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.key.trim().is_empty() {
            return Err(ApiError::Validation("reset key is required".to_string()));
        }
        validate_password(&self.new_password)
    }
}

pub fn valid_login(login: &str) -> bool {
    login.len() <= LOGIN_MAX_CHARS
        && Regex::new(r"^[a-z0-9]+$").map_or(false, |re| re.is_match(login))
}

pub fn valid_email(email: &str) -> bool {
    email.chars().count() <= EMAIL_MAX_CHARS
        && Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

/// # Errors
/// Returns `ApiError::Validation` if the password length is out of bounds.
pub fn validate_password(password: &SecretString) -> Result<(), ApiError> {
    let length = password.expose_secret().chars().count();
    if (PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&length) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "password must be {PASSWORD_MIN_CHARS}-{PASSWORD_MAX_CHARS} characters"
        )))
    }
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
