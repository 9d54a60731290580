//! Error types for the engine library.

use std::path::PathBuf;

use thiserror::Error;

use crate::generation::ApiError;

/// Everything an engine operation can fail with.
#[derive(Error, Debug)]
pub enum EngineError {
    /// SQLite failure while opening, migrating or querying the store
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Creating the database directory failed
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No usable XDG data directory
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Rejected before any state changed
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The operation needs an active session
    #[error("Not logged in. Run `s2n login` first")]
    NotLoggedIn,
    /// Idea generation is already running
    #[error("The engine is already generating ideas")]
    Busy,
    /// The same artifact is already being generated for this idea
    #[error("Generation already in progress for idea {idea_id}")]
    GenerationInProgress { idea_id: String },
    /// Idea not found in the working set or the playbook
    #[error("Idea with ID {id} not found")]
    IdeaNotFound { id: String },
    /// Playbook entry not found for the given ID
    #[error("Playbook entry with ID {id} not found")]
    EntryNotFound { id: String },
    /// The idea is already tracked in the playbook
    #[error("Idea {idea_id} is already in the playbook")]
    AlreadyInPlaybook { idea_id: String },
    /// Upstream generative-AI failures
    #[error("Generation failed: {0}")]
    Generation(#[from] ApiError),
    /// A value could not be encoded for storage
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Client setup or background task failure
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Pending [`EngineError::InvalidInput`] that still needs a reason.
#[must_use]
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn with_reason(self, reason: impl Into<String>) -> EngineError {
        EngineError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl EngineError {
    /// Starts an input validation error for `field`.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder {
            field: field.into(),
        }
    }

    /// Whether the error is a user input problem rather than a system fault.
    ///
    /// Front ends show these as plain messages; nothing was mutated.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::NotLoggedIn
                | Self::Busy
                | Self::GenerationInProgress { .. }
                | Self::IdeaNotFound { .. }
                | Self::EntryNotFound { .. }
                | Self::AlreadyInPlaybook { .. }
        )
    }
}

/// Attaches a message to SQLite failures.
pub trait DatabaseResultExt<T> {
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| EngineError::Database {
            message: message.to_string(),
            source,
        })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = EngineError::invalid_input("niches").with_reason("Select at least one niche!");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'niches': Select at least one niche!"
        );
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_generation_errors_are_not_user_facing() {
        let err = EngineError::from(ApiError::EmptyResponse);
        assert!(!err.is_user_facing());
        assert!(err.to_string().starts_with("Generation failed"));
    }

    #[test]
    fn test_db_context_keeps_message_and_source() {
        let failed: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let err = failed.db_context("Failed to read stored value").unwrap_err();
        assert!(matches!(err, EngineError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to read stored value");
        assert!(std::error::Error::source(&err).is_some());
    }
}
