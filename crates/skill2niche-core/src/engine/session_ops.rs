//! Session operations: the mock auth gate wired to the store.

use log::info;

use super::{AppState, Engine};
use crate::{
    auth::{self, AuthState},
    error::Result,
    models::User,
    params::{Login, PasswordReset, SignUp},
};

impl Engine {
    /// Logs in with any non-empty credentials.
    ///
    /// Records the session pointer, then replaces the in-memory state with
    /// the user's stored profile, playbook and working session. Anything not
    /// stored keeps its default.
    pub async fn login(&self, params: &Login) -> Result<User> {
        let user = auth::authenticate(params)?;

        // Pending write-backs land before the stored data is read
        let _write = self.write_lock.lock().await;
        let pointer = user.clone();
        let data = self
            .with_store(move |store| {
                store.set_current_user(&pointer)?;
                store.load_user_data(&pointer.id)
            })
            .await?;

        let mut state = self.state();
        state.reset_user_state();
        state.auth = AuthState::LoggedIn(user.clone());
        state.apply_user_data(data);
        info!("Logged in as {}", user.id);
        Ok(user)
    }

    /// Restores the session recorded by the last login, if any.
    pub async fn restore_session(&self) -> Result<Option<User>> {
        let restored = self
            .with_store(|store| {
                let Some(user) = store.current_user()? else {
                    return Ok(None);
                };
                let data = store.load_user_data(&user.id)?;
                Ok(Some((user, data)))
            })
            .await?;

        let Some((user, data)) = restored else {
            return Ok(None);
        };

        let mut state = self.state();
        state.reset_user_state();
        state.auth = AuthState::LoggedIn(user.clone());
        state.apply_user_data(data);
        Ok(Some(user))
    }

    /// Ends the session. Per-user stored data is kept for the next login.
    ///
    /// Returns the user that was logged in.
    pub async fn logout(&self) -> Result<Option<User>> {
        let _write = self.write_lock.lock().await;
        self.with_store(|store| store.clear_current_user()).await?;

        let mut state = self.state();
        let previous = state.user().cloned();
        state.reset_user_state();
        if let Some(user) = &previous {
            info!("Logged out {}", user.id);
        }
        Ok(previous)
    }

    /// Mock sign-up. Nothing is stored.
    pub fn sign_up(&self, params: &SignUp) -> &'static str {
        auth::sign_up(params)
    }

    /// Mock password reset. Nothing is sent.
    pub fn forgot_password(&self, params: &PasswordReset) -> &'static str {
        auth::request_password_reset(params)
    }

    /// Whether a user is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.state().user().is_some()
    }
}

impl AppState {
    /// Fails with `NotLoggedIn` unless a session is active.
    pub(crate) fn ensure_logged_in(&self) -> Result<()> {
        self.require_user_id().map(|_| ())
    }
}
