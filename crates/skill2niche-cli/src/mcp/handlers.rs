//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use skill2niche_core::{
    catalog,
    display::{BlueprintView, Ideas, NicheCatalog, OperationStatus, ShareText, Templates},
    params as core, ActiveView, Engine, EngineError, NicheToggle,
};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types carry no MCP knowledge. This transparent wrapper adds
// the Deserialize and JsonSchema pass-through the tool router needs while the
// JSON shape stays exactly that of the wrapped type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Login = McpParams<core::Login>;
pub type SignUp = McpParams<core::SignUp>;
pub type PasswordReset = McpParams<core::PasswordReset>;
pub type SetSkills = McpParams<core::SetSkills>;
pub type ToggleTool = McpParams<core::ToggleTool>;
pub type SetExperience = McpParams<core::SetExperience>;
pub type ToggleClient = McpParams<core::ToggleClient>;
pub type ToggleNiche = McpParams<core::ToggleNiche>;
pub type IdeaRef = McpParams<core::IdeaRef>;
pub type EntryRef = McpParams<core::EntryRef>;
pub type UpdateStatus = McpParams<core::UpdateStatus>;
pub type UpdateNotes = McpParams<core::UpdateNotes>;
pub type DeleteEntry = McpParams<core::DeleteEntry>;
pub type TemplateRef = McpParams<core::TemplateRef>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(result: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        result.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    engine: Arc<Engine>,
}

impl McpHandlers {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    fn require_login(&self, message: &str) -> Result<(), ErrorData> {
        if self.engine.is_logged_in() {
            Ok(())
        } else {
            Err(to_mcp_error(message, &EngineError::NotLoggedIn))
        }
    }

    // ------------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------------

    pub async fn login(&self, Parameters(params): Parameters<Login>) -> McpResult {
        debug!("login: {}", params.as_ref().email);

        let user = self
            .engine
            .login(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to log in", &e))?;
        text(user)
    }

    pub async fn logout(&self) -> McpResult {
        let previous = self
            .engine
            .logout()
            .await
            .map_err(|e| to_mcp_error("Failed to log out", &e))?;

        let result = match previous {
            Some(user) => OperationStatus::success(format!(
                "Logged out {}. Saved data is kept for the next login.",
                user.email
            )),
            None => OperationStatus::success("Nobody was logged in"),
        };
        text(result)
    }

    pub fn whoami(&self) -> McpResult {
        let user = self
            .engine
            .current_user()
            .ok_or_else(|| to_mcp_error("No session", &EngineError::NotLoggedIn))?;
        text(user)
    }

    pub fn sign_up(&self, Parameters(params): Parameters<SignUp>) -> McpResult {
        text(OperationStatus::success(self.engine.sign_up(params.as_ref())))
    }

    pub fn forgot_password(&self, Parameters(params): Parameters<PasswordReset>) -> McpResult {
        text(OperationStatus::success(
            self.engine.forgot_password(params.as_ref()),
        ))
    }

    // ------------------------------------------------------------------------
    // Profile and niches
    // ------------------------------------------------------------------------

    pub fn get_profile(&self) -> McpResult {
        self.require_login("Failed to get profile")?;
        text(self.engine.profile())
    }

    pub async fn set_skills(&self, Parameters(params): Parameters<SetSkills>) -> McpResult {
        debug!("set_skills: {:?}", params);

        let profile = self
            .engine
            .set_skills(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set skills", &e))?;
        text(profile)
    }

    pub async fn toggle_tool(&self, Parameters(params): Parameters<ToggleTool>) -> McpResult {
        debug!("toggle_tool: {:?}", params);

        let profile = self
            .engine
            .toggle_tool(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to toggle tool", &e))?;
        text(profile)
    }

    pub async fn set_experience(
        &self,
        Parameters(params): Parameters<SetExperience>,
    ) -> McpResult {
        debug!("set_experience: {:?}", params);

        let profile = self
            .engine
            .set_experience(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set experience", &e))?;
        text(profile)
    }

    pub async fn toggle_client(&self, Parameters(params): Parameters<ToggleClient>) -> McpResult {
        debug!("toggle_client: {:?}", params);

        let profile = self
            .engine
            .toggle_preferred_client(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to toggle client type", &e))?;
        text(profile)
    }

    pub fn list_niches(&self) -> McpResult {
        let catalog = NicheCatalog::new(catalog::niches(), self.engine.selected_niches());
        text(catalog)
    }

    pub async fn toggle_niche(&self, Parameters(params): Parameters<ToggleNiche>) -> McpResult {
        debug!("toggle_niche: {:?}", params);

        let toggle = self
            .engine
            .toggle_niche(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to toggle niche", &e))?;

        let result = match toggle {
            NicheToggle::Selected(niche) => {
                OperationStatus::success(format!("Selected {} ({})", niche.name, niche.id))
            }
            NicheToggle::Deselected(niche) => {
                OperationStatus::success(format!("Deselected {} ({})", niche.name, niche.id))
            }
            NicheToggle::LimitReached => OperationStatus::failure(format!(
                "At most {} niches can be selected. Deselect one first.",
                catalog::MAX_SELECTED_NICHES
            )),
        };
        text(result)
    }

    pub async fn clear_niches(&self) -> McpResult {
        self.engine
            .clear_niches()
            .await
            .map_err(|e| to_mcp_error("Failed to clear niches", &e))?;
        text(OperationStatus::success("Niche selection cleared"))
    }

    // ------------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------------

    pub async fn start_engine(&self) -> McpResult {
        let ideas = self
            .engine
            .start_engine()
            .await
            .map_err(|e| to_mcp_error("Failed to generate ideas", &e))?;
        text(Ideas(ideas))
    }

    pub fn list_ideas(&self) -> McpResult {
        self.require_login("Failed to list ideas")?;
        text(Ideas(self.engine.ideas()))
    }

    pub async fn view_blueprint(&self, Parameters(params): Parameters<IdeaRef>) -> McpResult {
        debug!("view_blueprint: {:?}", params);

        let idea = self
            .engine
            .view_blueprint(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Error generating blueprint", &e))?;
        let view = BlueprintView::of(&idea).ok_or_else(|| {
            ErrorData::internal_error(format!("Idea {} has no blueprint", idea.id), None)
        })?;
        text(view)
    }

    pub async fn generate_workflow(&self, Parameters(params): Parameters<IdeaRef>) -> McpResult {
        debug!("generate_workflow: {:?}", params);

        let idea = self
            .engine
            .generate_workflow(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate JSON", &e))?;
        text(idea.workflow_json.unwrap_or_default())
    }

    pub async fn share_recipe(&self, Parameters(params): Parameters<IdeaRef>) -> McpResult {
        debug!("share_recipe: {:?}", params);

        let idea = self
            .engine
            .view_blueprint(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Error generating blueprint", &e))?;
        let share = ShareText::of(&idea).ok_or_else(|| {
            ErrorData::internal_error(format!("Idea {} has no blueprint", idea.id), None)
        })?;
        text(share)
    }

    // ------------------------------------------------------------------------
    // Playbook
    // ------------------------------------------------------------------------

    pub async fn save_to_playbook(&self, Parameters(params): Parameters<IdeaRef>) -> McpResult {
        debug!("save_to_playbook: {:?}", params);

        let entry = self
            .engine
            .save_to_playbook(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save idea", &e))?;
        text(OperationStatus::success(format!(
            "Saved \"{}\" to the playbook (ID: {})",
            entry.idea.title, entry.id
        )))
    }

    pub fn list_playbook(&self) -> McpResult {
        self.require_login("Failed to list playbook")?;
        text(self.engine.playbook_board())
    }

    pub fn show_entry(&self, Parameters(params): Parameters<EntryRef>) -> McpResult {
        debug!("show_entry: {:?}", params);

        let entry = self
            .engine
            .get_entry(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to get entry", &e))?;

        let mut result = entry.to_string();
        match BlueprintView::of(&entry.idea) {
            Some(view) => result.push_str(&view.to_string()),
            None => result.push_str(&entry.idea.to_string()),
        }
        text(result)
    }

    pub async fn update_status(&self, Parameters(params): Parameters<UpdateStatus>) -> McpResult {
        debug!("update_status: {:?}", params);

        let entry = self
            .engine
            .update_status(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update status", &e))?;
        text(OperationStatus::success(format!(
            "\"{}\" moved to {}",
            entry.idea.title, entry.status
        )))
    }

    pub async fn update_notes(&self, Parameters(params): Parameters<UpdateNotes>) -> McpResult {
        debug!("update_notes: {:?}", params);

        let entry = self
            .engine
            .update_notes(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update notes", &e))?;
        text(entry)
    }

    pub async fn delete_entry(&self, Parameters(params): Parameters<DeleteEntry>) -> McpResult {
        debug!("delete_entry: {:?}", params);

        let inner_params = params.as_ref();
        let deleted = self
            .engine
            .delete_entry(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete entry", &e))?
            .ok_or_else(|| {
                to_mcp_error(
                    "Failed to delete entry",
                    &EngineError::EntryNotFound {
                        id: inner_params.id.clone(),
                    },
                )
            })?;

        text(OperationStatus::success(format!(
            "Permanently deleted \"{}\" (ID: {}). This action cannot be undone.",
            deleted.idea.title, inner_params.id
        )))
    }

    // ------------------------------------------------------------------------
    // Templates
    // ------------------------------------------------------------------------

    pub fn list_templates(&self) -> McpResult {
        self.engine.set_view(ActiveView::Templates);
        text(Templates(catalog::TEMPLATES.iter().collect()))
    }

    pub fn show_template(&self, Parameters(params): Parameters<TemplateRef>) -> McpResult {
        debug!("show_template: {:?}", params);

        let id = &params.as_ref().id;
        let template = catalog::find_template(id).ok_or_else(|| {
            ErrorData::invalid_params(format!("Template with ID {id} not found"), None)
        })?;
        self.engine.set_view(ActiveView::Templates);
        text(format!(
            "{template}\n```json\n{}\n```\n",
            template.workflow_json
        ))
    }
}
