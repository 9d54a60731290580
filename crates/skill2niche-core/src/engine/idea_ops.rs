//! Generation operations: ideas, blueprints and workflow documents.
//!
//! Generated results are only applied if the same user is still logged in
//! when the request completes; otherwise they are dropped.

use log::{info, warn};

use super::{ActiveView, BusyGuard, Engine, GenerationKind, InFlightGuard};
use crate::{
    error::{EngineError, Result},
    models::{Idea, Profile},
    params::IdeaRef,
};

/// Outcome of the bookkeeping done before an artifact request.
enum Begin<'a> {
    /// The idea already carries the artifact
    Cached(Idea),
    /// A request must be made; the guard clears the in-flight marker
    Request {
        idea: Idea,
        profile: Profile,
        user_id: String,
        _guard: InFlightGuard<'a>,
    },
}

impl Engine {
    /// Generates ideas for the selected niches, replacing the previous set.
    ///
    /// On failure the previous ideas stay in place.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if no niche is selected
    /// Returns `EngineError::Busy` if idea generation is already running
    /// Returns `EngineError::Generation` if the request or parsing fails
    pub async fn start_engine(&self) -> Result<Vec<Idea>> {
        let (user_id, profile, niches, _busy) = {
            let mut state = self.state();
            let user_id = state.require_user_id()?;
            if state.selected_niches.is_empty() {
                return Err(EngineError::invalid_input("niches")
                    .with_reason("Select at least one niche!"));
            }
            let guard = BusyGuard::acquire(self, &mut state)?;
            (
                user_id,
                state.profile.clone(),
                state.selected_niches.clone(),
                guard,
            )
        };

        info!("Generating ideas for {} niches", niches.len());
        let ideas = self.generator.generate_ideas(&profile, &niches).await?;

        {
            let mut state = self.state();
            if !state.is_user(&user_id) {
                warn!("Session changed during idea generation; discarding results");
                return Ok(ideas);
            }
            state.ideas = ideas.clone();
            state.view = ActiveView::Engine;
            state.viewing = None;
        }

        self.persist_session().await?;
        Ok(ideas)
    }

    /// Returns the idea with its blueprint, generating it on first view.
    ///
    /// A cached blueprint is returned without a request and is never
    /// regenerated.
    pub async fn view_blueprint(&self, params: &IdeaRef) -> Result<Idea> {
        let (idea, profile, user_id, _guard) =
            match self.begin_generation(GenerationKind::Blueprint, &params.idea_id)? {
                Begin::Cached(idea) => {
                    self.state().viewing = Some(idea.id.clone());
                    return Ok(idea);
                }
                Begin::Request {
                    idea,
                    profile,
                    user_id,
                    _guard,
                } => (idea, profile, user_id, _guard),
            };

        info!("Generating blueprint for idea {}", idea.id);
        let blueprint = self.generator.generate_blueprint(&idea, &profile).await?;

        self.finish_generation(&user_id, idea, move |target| {
            if target.blueprint.is_none() {
                target.blueprint = Some(blueprint.clone());
            }
        })
        .await
    }

    /// Returns the idea with its workflow document, generating it on first
    /// request. A cached document is never regenerated.
    pub async fn generate_workflow(&self, params: &IdeaRef) -> Result<Idea> {
        let (idea, user_id, _guard) =
            match self.begin_generation(GenerationKind::Workflow, &params.idea_id)? {
                Begin::Cached(idea) => return Ok(idea),
                Begin::Request {
                    idea,
                    user_id,
                    _guard,
                    ..
                } => (idea, user_id, _guard),
            };

        info!("Generating workflow document for idea {}", idea.id);
        let workflow = self.generator.generate_workflow_json(&idea).await?;

        self.finish_generation(&user_id, idea, move |target| {
            if target.workflow_json.is_none() {
                target.workflow_json = Some(workflow.clone());
            }
        })
        .await
    }

    /// Looks an idea up in the working set or the playbook.
    pub fn idea(&self, params: &IdeaRef) -> Result<Idea> {
        self.state()
            .find_idea(&params.idea_id)
            .cloned()
            .ok_or_else(|| EngineError::IdeaNotFound {
                id: params.idea_id.clone(),
            })
    }

    fn begin_generation(&self, kind: GenerationKind, idea_id: &str) -> Result<Begin<'_>> {
        let mut state = self.state();
        let user_id = state.require_user_id()?;
        let idea = state
            .find_idea(idea_id)
            .cloned()
            .ok_or_else(|| EngineError::IdeaNotFound {
                id: idea_id.to_string(),
            })?;

        if kind.is_cached(&idea) {
            return Ok(Begin::Cached(idea));
        }

        let guard = InFlightGuard::acquire(self, &mut state, kind, idea_id)?;
        Ok(Begin::Request {
            idea,
            profile: state.profile.clone(),
            user_id,
            _guard: guard,
        })
    }

    /// Attaches a generated artifact to every copy of the idea and persists
    /// whatever changed.
    ///
    /// `idea` is the copy the request was made for; it is returned with the
    /// artifact when the working set no longer holds the idea.
    async fn finish_generation<F>(&self, user_id: &str, mut idea: Idea, attach: F) -> Result<Idea>
    where
        F: Fn(&mut Idea),
    {
        let playbook_touched = {
            let mut state = self.state();
            if !state.is_user(user_id) {
                warn!("Session changed during generation; result not applied");
                attach(&mut idea);
                return Ok(idea);
            }

            let touched = state.attach_artifact(&idea.id, &attach);
            match state.find_idea(&idea.id) {
                Some(current) => idea = current.clone(),
                None => attach(&mut idea),
            }
            state.viewing = Some(idea.id.clone());
            touched
        };

        self.persist_session().await?;
        if playbook_touched {
            self.persist_playbook().await?;
        }
        Ok(idea)
    }
}
