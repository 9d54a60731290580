//! Markdown formatting for terminal and MCP output.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and composite views get wrapper types so each output context renders the
//! same structure.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │  (Idea, Entry)  │───▶│ & Views         │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Ideas, niche catalog, playbook board, templates
//! - [`blueprint`]: Blueprint detail view plus shareable plain-text recipes
//! - [`status`]: Confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use skill2niche_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Saved to playbook");
//! assert_eq!(status.to_string(), "Success: Saved to playbook\n");
//! ```

pub mod blueprint;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use blueprint::{BlueprintView, ShareText, StepsText};
pub use collections::{Ideas, NicheCatalog, PlaybookBoard, Templates};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
