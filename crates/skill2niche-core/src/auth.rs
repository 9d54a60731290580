//! Mock auth gate.
//!
//! Any non-empty email and password pair is accepted. This is a placeholder
//! that scopes persisted data by user id; it is not a security boundary.

use crate::{
    error::{EngineError, Result},
    models::User,
    params::{Login, PasswordReset, SignUp},
};

/// Session state of the gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::LoggedIn(user) => Some(user),
            AuthState::LoggedOut => None,
        }
    }
}

/// Confirmation returned by flows that have no side effects.
pub const SIGN_UP_NOTICE: &str = "Account created! You can now log in.";
pub const PASSWORD_RESET_NOTICE: &str = "Password reset link sent to your email.";

/// Accepts the credentials and derives the user record.
///
/// The id is derived from the lowercased email so the same address always
/// maps to the same stored data; the display name is the email's local part.
pub fn authenticate(credentials: &Login) -> Result<User> {
    let email = credentials.email.trim();
    if email.is_empty() {
        return Err(EngineError::invalid_input("email").with_reason("Email is required"));
    }
    if credentials.password.trim().is_empty() {
        return Err(EngineError::invalid_input("password").with_reason("Password is required"));
    }

    let name = email.split('@').next().unwrap_or(email).to_string();
    Ok(User {
        id: format!("user_{}", email.to_lowercase()),
        email: email.to_string(),
        name,
    })
}

/// Pretends to create an account.
pub fn sign_up(_request: &SignUp) -> &'static str {
    SIGN_UP_NOTICE
}

/// Pretends to send a password reset link.
pub fn request_password_reset(_request: &PasswordReset) -> &'static str {
    PASSWORD_RESET_NOTICE
}
