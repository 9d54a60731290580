//! Core library for the Skill2Niche business-idea generator.
//!
//! This crate turns a skill profile and a handful of market niches into
//! monetizable automation offers, lazily expands each offer into a workflow
//! blueprint, and tracks chosen offers on a four-column playbook board. State
//! is scoped per user and persisted in a local key-value store.
//!
//! # Layers
//!
//! - **Engine** ([`engine`]): State orchestrator; every user action is a
//!   named transition on an explicit state struct
//! - **Generation** ([`generation`]): Prompts, response schemas, and the HTTP
//!   client for the hosted text-generation model
//! - **Store** ([`store`]): Per-user blobs in SQLite
//! - **Display** ([`display`]): Markdown formatting for every front end
//! - **Catalogs** ([`catalog`]): Niches, tools, client types and templates
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skill2niche_core::{
//!     params::{Login, SetSkills, ToggleNiche},
//!     EngineBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = EngineBuilder::new()
//!     .with_database_path(Some("skill2niche.db"))
//!     .with_api_key("my-key")
//!     .build()
//!     .await?;
//!
//! engine
//!     .login(&Login {
//!         email: "ada@example.com".to_string(),
//!         password: "anything".to_string(),
//!     })
//!     .await?;
//! engine
//!     .set_skills(&SetSkills {
//!         skills: "n8n, Python".to_string(),
//!     })
//!     .await?;
//! engine.toggle_niche(&ToggleNiche { niche_id: "3".to_string() }).await?;
//!
//! for idea in engine.start_engine().await? {
//!     println!("{}", idea.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod catalog;
pub mod display;
pub mod engine;
pub mod error;
pub mod generation;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{
    BlueprintView, Ideas, NicheCatalog, OperationStatus, PlaybookBoard, ShareText, StepsText,
    Templates,
};
pub use engine::{ActiveView, AppState, Engine, EngineBuilder, GenerationKind, NicheToggle};
pub use error::{EngineError, Result};
pub use generation::ApiError;
pub use models::{
    Blueprint, ExperienceLevel, Idea, Niche, PlaybookEntry, PlaybookStatus, Profile, Template,
    User,
};
