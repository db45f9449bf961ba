//! Authentication operations: login, register, logout.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::instrument;

use ismartpay_core::Email;

use crate::envelope::extract_token;
use crate::error::ApiError;
use crate::http::ConsoleClient;
use crate::resources::reject_error_body;

const LOGIN_PATH: &str = "/api/publicauth/admin/login";
const REGISTER_PATH: &str = "/api/publicauth/admin/register";

/// Input for registering a new admin account.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct NewAdmin {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: SecretString,
}

impl NewAdmin {
    fn validate(&self) -> Result<Email, ApiError> {
        if self.first_name.trim().is_empty() {
            return Err(ApiError::Validation("first name is required".to_string()));
        }
        if self.last_name.trim().is_empty() {
            return Err(ApiError::Validation("last name is required".to_string()));
        }
        let email = Email::parse(self.email.trim())?;
        if self.phone.trim().is_empty() {
            return Err(ApiError::Validation("phone is required".to_string()));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ApiError::Validation("password is required".to_string()));
        }
        Ok(email)
    }
}

impl std::fmt::Debug for NewAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAdmin")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl ConsoleClient {
    /// Sign in and install the returned bearer token into the session.
    ///
    /// Login responses have carried the token at several JSON paths across
    /// backend versions; all known paths are probed in order.
    ///
    /// # Errors
    ///
    /// `Validation` for malformed input, `Api`/`Rejected` for a refused
    /// login, `Parse` when no token path matches a success response.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let email = Email::parse(email.trim())?;
        if password.is_empty() {
            return Err(ApiError::Validation("password is required".to_string()));
        }

        let body = self
            .post_json(
                LOGIN_PATH,
                &json!({ "email": email.as_str(), "password": password }),
                "login",
            )
            .await?;
        reject_error_body(&body, "login")?;

        let token = extract_token(&body).ok_or_else(|| {
            ApiError::Parse("login response contained no access token".to_string())
        })?;
        self.session().begin(SecretString::from(token));

        tracing::info!("session started");
        Ok(())
    }

    /// Register a new admin account. Does not sign the new account in.
    ///
    /// # Errors
    ///
    /// `Validation` for malformed input, `Api`/`Rejected` for a refused
    /// registration.
    #[instrument(skip(self, new_admin), fields(email = %new_admin.email))]
    pub async fn register(&self, new_admin: &NewAdmin) -> Result<(), ApiError> {
        let email = new_admin.validate()?;

        let body = self
            .post_json(
                REGISTER_PATH,
                &json!({
                    "first_name": new_admin.first_name.trim(),
                    "last_name": new_admin.last_name.trim(),
                    "email": email.as_str(),
                    "phone": new_admin.phone.trim(),
                    "password": new_admin.password.expose_secret(),
                }),
                "register",
            )
            .await?;
        reject_error_body(&body, "register")?;

        Ok(())
    }

    /// End the session: clear the token, wipe the persisted state, and
    /// cancel anything still in flight. No network call is made.
    pub fn logout(&self) {
        self.session().end();
        tracing::info!("session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_new_admin() -> NewAdmin {
        NewAdmin {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "ada@ismartpay.test".to_string(),
            phone: "+2348012345678".to_string(),
            password: SecretString::from("s3cret"),
        }
    }

    #[test]
    fn test_new_admin_validation() {
        assert!(valid_new_admin().validate().is_ok());

        let mut admin = valid_new_admin();
        admin.first_name = " ".to_string();
        assert!(matches!(admin.validate(), Err(ApiError::Validation(_))));

        let mut admin = valid_new_admin();
        admin.email = "not-an-email".to_string();
        assert!(matches!(admin.validate(), Err(ApiError::Validation(_))));

        let mut admin = valid_new_admin();
        admin.password = SecretString::from("");
        assert!(matches!(admin.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_new_admin_debug_redacts_password() {
        let rendered = format!("{:?}", valid_new_admin());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("s3cret"));
    }
}
