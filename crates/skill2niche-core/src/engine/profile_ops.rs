//! Profile and niche selection operations.

use log::debug;

use super::{Engine, NicheToggle};
use crate::{
    catalog::{self, MAX_SELECTED_NICHES},
    error::{EngineError, Result},
    models::Profile,
    params::{SetExperience, SetSkills, ToggleClient, ToggleNiche, ToggleTool},
};

impl Engine {
    /// Replaces the skills with the comma-separated list in `params`.
    pub async fn set_skills(&self, params: &SetSkills) -> Result<Profile> {
        self.update_profile(|profile| {
            profile.set_skills_from_text(&params.skills);
            Ok(())
        })
        .await
    }

    /// Adds the tool if absent, removes it if present.
    pub async fn toggle_tool(&self, params: &ToggleTool) -> Result<Profile> {
        let tool = catalog::canonical_tool(&params.tool).ok_or_else(|| {
            EngineError::invalid_input("tool")
                .with_reason(format!("Unknown tool '{}'", params.tool))
        })?;

        self.update_profile(|profile| {
            profile.toggle_tool(tool);
            Ok(())
        })
        .await
    }

    pub async fn set_experience(&self, params: &SetExperience) -> Result<Profile> {
        self.update_profile(|profile| {
            profile.experience = params.level;
            Ok(())
        })
        .await
    }

    /// Adds the client type if absent, removes it if present.
    pub async fn toggle_preferred_client(&self, params: &ToggleClient) -> Result<Profile> {
        let client = catalog::canonical_client_type(&params.client).ok_or_else(|| {
            EngineError::invalid_input("client")
                .with_reason(format!("Unknown client type '{}'", params.client))
        })?;

        self.update_profile(|profile| {
            profile.toggle_preferred_client(client);
            Ok(())
        })
        .await
    }

    /// Selects or deselects a niche.
    ///
    /// Selecting beyond [`MAX_SELECTED_NICHES`] leaves the selection unchanged
    /// and reports [`NicheToggle::LimitReached`].
    pub async fn toggle_niche(&self, params: &ToggleNiche) -> Result<NicheToggle> {
        let niche = catalog::find_niche(params.niche_id.trim()).ok_or_else(|| {
            EngineError::invalid_input("niche_id")
                .with_reason(format!("Unknown niche '{}'", params.niche_id))
        })?;

        let outcome = {
            let mut state = self.state();
            state.ensure_logged_in()?;

            if let Some(pos) = state.selected_niches.iter().position(|n| n.id == niche.id) {
                state.selected_niches.remove(pos);
                NicheToggle::Deselected(niche)
            } else if state.selected_niches.len() >= MAX_SELECTED_NICHES {
                NicheToggle::LimitReached
            } else {
                state.selected_niches.push(niche.clone());
                NicheToggle::Selected(niche)
            }
        };

        if outcome != NicheToggle::LimitReached {
            self.persist_session().await?;
        }
        Ok(outcome)
    }

    /// Empties the niche selection.
    pub async fn clear_niches(&self) -> Result<()> {
        {
            let mut state = self.state();
            state.ensure_logged_in()?;
            state.selected_niches.clear();
        }
        self.persist_session().await
    }

    async fn update_profile<F>(&self, apply: F) -> Result<Profile>
    where
        F: FnOnce(&mut Profile) -> Result<()>,
    {
        let profile = {
            let mut state = self.state();
            state.ensure_logged_in()?;
            apply(&mut state.profile)?;
            state.profile.clone()
        };

        debug!(
            "Profile now has {} skills, {} tools",
            profile.skills.len(),
            profile.tools.len()
        );
        self.persist_profile().await?;
        Ok(profile)
    }
}
