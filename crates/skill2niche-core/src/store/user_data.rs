//! Typed access to the per-user blobs.

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use super::StorageKey;
use crate::{
    error::Result,
    models::{PlaybookEntry, Profile, User, WorkingSession},
};

/// Everything stored for one user. `None` means nothing usable was stored.
#[derive(Debug, Default)]
pub struct UserData {
    pub profile: Option<Profile>,
    pub playbook: Option<Vec<PlaybookEntry>>,
    pub session: Option<WorkingSession>,
}

impl super::Store {
    /// Loads and deserializes the value under `key`.
    ///
    /// A value that does not parse is logged and reported as absent.
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey<'_>) -> Result<Option<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring malformed stored value for {key}: {e}");
                Ok(None)
            }
        }
    }

    /// Serializes `value` and overwrites `key` with it.
    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey<'_>, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }

    /// The user whose session should be restored on startup.
    pub fn current_user(&self) -> Result<Option<User>> {
        self.load(StorageKey::CurrentUser)
    }

    pub fn set_current_user(&self, user: &User) -> Result<()> {
        self.save(StorageKey::CurrentUser, user)
    }

    /// Forgets the session pointer. Per-user data stays in place.
    pub fn clear_current_user(&self) -> Result<()> {
        self.remove(StorageKey::CurrentUser)?;
        Ok(())
    }

    /// Loads profile, playbook and working session for `user_id`.
    pub fn load_user_data(&self, user_id: &str) -> Result<UserData> {
        Ok(UserData {
            profile: self.load(StorageKey::Profile(user_id))?,
            playbook: self.load(StorageKey::Playbook(user_id))?,
            session: self.load(StorageKey::Session(user_id))?,
        })
    }
}
