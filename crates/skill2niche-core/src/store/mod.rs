//! Persistence adapter: a local key-value store scoped by user id.
//!
//! Values are opaque serialized blobs under these keys:
//!
//! | Key                  | Value                    |
//! |----------------------|--------------------------|
//! | `currentUser`        | [`User`]                 |
//! | `profile_<userId>`   | [`Profile`]              |
//! | `playbook_<userId>`  | list of [`PlaybookEntry`] |
//! | `session_<userId>`   | [`WorkingSession`]       |
//!
//! Every write replaces the whole value. There is no schema version tag, so
//! values that no longer parse are reported as absent.
//!
//! [`User`]: crate::models::User
//! [`Profile`]: crate::models::Profile
//! [`PlaybookEntry`]: crate::models::PlaybookEntry
//! [`WorkingSession`]: crate::models::WorkingSession

use std::{fmt, path::Path};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv_queries;
pub mod migrations;
pub mod user_data;

/// Storage key for one persisted blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey<'a> {
    CurrentUser,
    Profile(&'a str),
    Playbook(&'a str),
    Session(&'a str),
}

impl fmt::Display for StorageKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKey::CurrentUser => write!(f, "currentUser"),
            StorageKey::Profile(user_id) => write!(f, "profile_{user_id}"),
            StorageKey::Playbook(user_id) => write!(f, "playbook_{user_id}"),
            StorageKey::Session(user_id) => write!(f, "session_{user_id}"),
        }
    }
}

/// Store connection and operations handler.
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Opens the store file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open store")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Opens a private in-memory store.
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().db_context("Failed to open store")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }
}
