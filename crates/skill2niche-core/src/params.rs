//! Parameter structures for engine operations
//!
//! Shared by every front end (CLI, MCP) without framework-specific derives.
//! Interface layers wrap these in their own types (clap `Args`, a transparent
//! serde wrapper for MCP) and convert with `From`, so core types stay free of
//! UI concerns. JSON schema generation is only compiled with the `schema`
//! feature.
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct ToggleNicheArgs {
//!     pub niche_id: String,
//! }
//!
//! impl From<ToggleNicheArgs> for ToggleNiche {
//!     fn from(val: ToggleNicheArgs) -> Self {
//!         ToggleNiche { niche_id: val.niche_id }
//!     }
//! }
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{ExperienceLevel, PlaybookStatus};

/// Credentials for the mock login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Login {
    pub email: String,
    pub password: String,
}

/// Mock sign-up request. Nothing is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Mock password reset request. Nothing is sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PasswordReset {
    pub email: String,
}

/// Replaces the profile's skills.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetSkills {
    /// Comma-separated skills, e.g. "n8n, Python, API Integration"
    pub skills: String,
}

/// Adds or removes a catalog tool on the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleTool {
    /// Tool name from the tool catalog
    pub tool: String,
}

/// Sets the profile's experience level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetExperience {
    pub level: ExperienceLevel,
}

/// Adds or removes a preferred client type on the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleClient {
    /// Client type from the client-type catalog
    pub client: String,
}

/// Selects or deselects a niche.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleNiche {
    /// Niche id from the niche catalog
    pub niche_id: String,
}

/// Identifies a generated idea.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct IdeaRef {
    pub idea_id: String,
}

/// Identifies a playbook entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EntryRef {
    pub id: String,
}

/// Moves a playbook entry to another column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateStatus {
    /// Playbook entry id
    pub id: String,
    pub status: PlaybookStatus,
}

/// Replaces the free-text notes of a playbook entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateNotes {
    /// Playbook entry id
    pub id: String,
    pub notes: String,
}

/// Removes a playbook entry.
///
/// Deletion only proceeds when `confirmed` is true.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteEntry {
    /// Playbook entry id
    pub id: String,
    /// Explicit confirmation of the deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Identifies a catalog template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TemplateRef {
    /// Template id, e.g. "t1"
    pub id: String,
}
