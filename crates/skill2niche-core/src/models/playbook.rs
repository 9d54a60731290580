//! Playbook entries: ideas the user committed to tracking.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{token::new_token, Idea, PlaybookStatus};

/// A tracked idea on the kanban board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookEntry {
    pub id: String,

    /// Copy of the idea taken when it was saved
    pub idea: Idea,

    #[serde(default)]
    pub status: PlaybookStatus,

    #[serde(default)]
    pub notes: String,

    /// Timestamp when the entry was created (UTC)
    pub created_at: Timestamp,
}

impl PlaybookEntry {
    /// Creates a new entry in the `Idea` column with empty notes.
    pub fn new(idea: Idea) -> Self {
        Self {
            id: new_token(),
            idea,
            status: PlaybookStatus::Idea,
            notes: String::new(),
            created_at: Timestamp::now(),
        }
    }
}
