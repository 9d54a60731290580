//! Client-side user identity.

use serde::{Deserialize, Serialize};

/// A locally known user. There is no backing credential store; `id` is an
/// opaque key that scopes persisted data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Display name
    pub name: String,
}
