//! Data models for profiles, ideas, blueprints and the playbook.
//!
//! Display implementations for these models live in
//! [`crate::display::models`]. Every persisted model serializes with camelCase
//! field names, which is also the shape the generative-AI service is asked to
//! return, so the same types parse responses and stored blobs.
//!
//! # Examples
//!
//! ```rust
//! use skill2niche_core::models::{Idea, IdeaDraft};
//!
//! let draft: IdeaDraft = serde_json::from_str(r#"{
//!     "title": "Lead Intake Autopilot",
//!     "problemStatement": "Leads sit in inboxes for days",
//!     "outcome": "Replies within 5 minutes",
//!     "monetizationModel": "Retainer",
//!     "targetClient": "Solo business coaches",
//!     "icpDescriptions": ["Coaches with 50+ leads a month"],
//!     "outreachAngles": ["How many leads went cold last week?"]
//! }"#)?;
//!
//! let idea = Idea::from_draft(draft, "1");
//! assert_eq!(idea.id.len(), 9);
//! assert!(idea.blueprint.is_none());
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod blueprint;
pub mod idea;
pub mod niche;
pub mod playbook;
pub mod profile;
pub mod session;
pub mod status;
pub mod template;
pub mod token;
pub mod user;


pub use blueprint::{Blueprint, NodeBlueprint, NodeCategory};
pub use idea::{Idea, IdeaDraft};
pub use niche::Niche;
pub use playbook::PlaybookEntry;
pub use profile::Profile;
pub use session::WorkingSession;
pub use status::{ExperienceLevel, PlaybookStatus};
pub use template::Template;
pub use token::new_token;
pub use user::User;
