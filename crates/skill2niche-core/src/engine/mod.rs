//! High-level engine API: the state orchestrator.
//!
//! The [`Engine`] owns the in-memory working set (session, profile, niche
//! selection, generated ideas, playbook) as an explicit [`AppState`] and
//! exposes one method per user-triggered transition. Every transition that
//! changes persisted data writes it back explicitly before returning.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front ends    │    │     Engine      │    │  Store (SQLite) │
//! │  (CLI, MCP)     │───▶│  transitions    │───▶│  per-user blobs │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │   Generator     │
//!                        │ (generative AI) │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Engine`] instances with configuration
//! - [`session_ops`]: Mock login, logout, session restore
//! - [`profile_ops`]: Skills, tools, experience, client types, niche selection
//! - [`idea_ops`]: Idea, blueprint and workflow generation
//! - [`playbook_ops`]: Saving ideas and moving them through the pipeline
//! - [`persistence`]: Writing state back to the store
//!
//! ## Generation markers
//!
//! Idea generation sets a single busy flag; blueprint and workflow generation
//! are tracked per idea id. Both are cleared by drop guards, so an error or a
//! dropped future never leaves a marker behind.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use skill2niche_core::{
//!     params::{IdeaRef, Login, ToggleNiche},
//!     EngineBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = EngineBuilder::new()
//!     .with_api_key(std::env::var("GEMINI_API_KEY")?)
//!     .build()
//!     .await?;
//!
//! engine
//!     .login(&Login {
//!         email: "ada@example.com".to_string(),
//!         password: "secret".to_string(),
//!     })
//!     .await?;
//! engine.toggle_niche(&ToggleNiche { niche_id: "1".to_string() }).await?;
//!
//! let ideas = engine.start_engine().await?;
//! let idea = engine
//!     .view_blueprint(&IdeaRef { idea_id: ideas[0].id.clone() })
//!     .await?;
//! println!("{}", idea.title);
//! # Ok(())
//! # }
//! ```

use std::{
    collections::HashSet,
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{
    auth::AuthState,
    error::{EngineError, Result},
    generation::Generator,
    models::{Idea, Niche, PlaybookEntry, Profile, User},
    store::user_data::UserData,
};

pub mod builder;
pub mod idea_ops;
pub mod persistence;
pub mod playbook_ops;
pub mod profile_ops;
pub mod session_ops;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;

/// Screen the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Home,
    Engine,
    Templates,
    Playbook,
}

/// Artifact generated lazily for a single idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationKind {
    Blueprint,
    Workflow,
}

impl GenerationKind {
    /// Whether `idea` already carries this artifact.
    pub fn is_cached(&self, idea: &Idea) -> bool {
        match self {
            GenerationKind::Blueprint => idea.blueprint.is_some(),
            GenerationKind::Workflow => idea.workflow_json.is_some(),
        }
    }
}

/// Outcome of toggling a niche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NicheToggle {
    Selected(Niche),
    Deselected(Niche),
    /// Selection is full; nothing changed
    LimitReached,
}

/// The complete in-memory working set.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub profile: Profile,
    pub selected_niches: Vec<Niche>,
    pub ideas: Vec<Idea>,
    pub playbook: Vec<PlaybookEntry>,
    /// Idea generation in flight
    pub busy: bool,
    /// Per-idea artifact generation in flight
    pub in_flight: HashSet<(GenerationKind, String)>,
    pub view: ActiveView,
    /// Idea whose blueprint is open
    pub viewing: Option<String>,
}

impl AppState {
    pub fn user(&self) -> Option<&User> {
        self.auth.user()
    }

    pub(crate) fn require_user_id(&self) -> Result<String> {
        self.user()
            .map(|u| u.id.clone())
            .ok_or(EngineError::NotLoggedIn)
    }

    fn is_user(&self, user_id: &str) -> bool {
        self.user().is_some_and(|u| u.id == user_id)
    }

    /// Looks an idea up in the working set, then in the playbook.
    pub fn find_idea(&self, idea_id: &str) -> Option<&Idea> {
        self.ideas.iter().find(|i| i.id == idea_id).or_else(|| {
            self.playbook
                .iter()
                .map(|entry| &entry.idea)
                .find(|i| i.id == idea_id)
        })
    }

    /// Applies `attach` to every copy of the idea. Returns whether a playbook
    /// entry was touched.
    fn attach_artifact(&mut self, idea_id: &str, attach: &impl Fn(&mut Idea)) -> bool {
        self.ideas
            .iter_mut()
            .filter(|i| i.id == idea_id)
            .for_each(attach);

        let mut touched = false;
        for entry in self.playbook.iter_mut().filter(|e| e.idea.id == idea_id) {
            attach(&mut entry.idea);
            touched = true;
        }
        touched
    }

    /// Drops everything tied to the logged-in user. Generation markers are
    /// owned by their guards and left alone.
    fn reset_user_state(&mut self) {
        self.auth = AuthState::LoggedOut;
        self.profile = Profile::default();
        self.selected_niches.clear();
        self.ideas.clear();
        self.playbook.clear();
        self.view = ActiveView::Home;
        self.viewing = None;
    }

    /// Overlays stored data; absent values keep the defaults.
    fn apply_user_data(&mut self, data: UserData) {
        if let Some(profile) = data.profile {
            self.profile = profile;
        }
        if let Some(playbook) = data.playbook {
            self.playbook = playbook;
        }
        if let Some(session) = data.session {
            self.selected_niches = session.selected_niches;
            self.ideas = session.ideas;
        }
    }
}

/// Main engine interface.
pub struct Engine {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: Generator,
    state: Mutex<AppState>,
    /// Orders write-backs: held from snapshot until the write lands
    pub(crate) write_lock: tokio::sync::Mutex<()>,
}

impl Engine {
    /// Creates a new engine with the specified store path.
    pub(crate) fn new(db_path: PathBuf, generator: Generator) -> Self {
        Self {
            db_path,
            generator,
            state: Mutex::new(AppState::default()),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Locks the state. Never held across an await.
    pub(crate) fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the complete working set.
    pub fn snapshot(&self) -> AppState {
        self.state().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state().user().cloned()
    }

    pub fn profile(&self) -> Profile {
        self.state().profile.clone()
    }

    pub fn selected_niches(&self) -> Vec<Niche> {
        self.state().selected_niches.clone()
    }

    pub fn ideas(&self) -> Vec<Idea> {
        self.state().ideas.clone()
    }

    pub fn view(&self) -> ActiveView {
        self.state().view
    }

    pub fn set_view(&self, view: ActiveView) {
        self.state().view = view;
    }

    /// Whether idea generation is in flight.
    pub fn is_busy(&self) -> bool {
        self.state().busy
    }

    /// Whether `kind` is being generated for `idea_id`.
    pub fn is_generating(&self, kind: GenerationKind, idea_id: &str) -> bool {
        self.state()
            .in_flight
            .contains(&(kind, idea_id.to_string()))
    }
}

/// Clears the busy flag when dropped.
pub(crate) struct BusyGuard<'a> {
    engine: &'a Engine,
}

impl<'a> BusyGuard<'a> {
    /// Sets the busy flag, failing if it is already set.
    pub(crate) fn acquire(engine: &'a Engine, state: &mut AppState) -> Result<Self> {
        if state.busy {
            return Err(EngineError::Busy);
        }
        state.busy = true;
        Ok(Self { engine })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.engine.state().busy = false;
    }
}

/// Removes a per-idea generation marker when dropped.
pub(crate) struct InFlightGuard<'a> {
    engine: &'a Engine,
    key: (GenerationKind, String),
}

impl<'a> InFlightGuard<'a> {
    /// Marks `kind` in flight for `idea_id`, failing if it already is.
    pub(crate) fn acquire(
        engine: &'a Engine,
        state: &mut AppState,
        kind: GenerationKind,
        idea_id: &str,
    ) -> Result<Self> {
        let key = (kind, idea_id.to_string());
        if !state.in_flight.insert(key.clone()) {
            return Err(EngineError::GenerationInProgress {
                idea_id: idea_id.to_string(),
            });
        }
        Ok(Self { engine, key })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.engine.state().in_flight.remove(&self.key);
    }
}
