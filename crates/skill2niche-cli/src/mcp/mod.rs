//! MCP server implementation for Skill2Niche
//!
//! Exposes the engine operations as Model Context Protocol tools so an AI
//! assistant can log in, shape a profile, pick niches, generate ideas and
//! manage the playbook on the user's behalf.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use skill2niche_core::Engine;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    DeleteEntry, EntryRef, IdeaRef, Login, McpResult, PasswordReset, SetExperience, SetSkills,
    SignUp, TemplateRef, ToggleClient, ToggleNiche, ToggleTool, UpdateNotes, UpdateStatus,
};

/// MCP server for Skill2Niche
#[derive(Clone)]
pub struct Skill2NicheMcpServer {
    engine: Arc<Engine>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl Skill2NicheMcpServer {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.engine.clone())
    }

    #[tool(
        name = "login",
        description = "Log in with an email and password. Any non-empty pair is accepted. The same email always restores the same saved profile, ideas and playbook."
    )]
    async fn login(&self, params: Parameters<Login>) -> McpResult {
        self.handlers().login(params).await
    }

    #[tool(
        name = "logout",
        description = "End the current session. Saved data is kept and comes back on the next login with the same email."
    )]
    async fn logout(&self) -> McpResult {
        self.handlers().logout().await
    }

    #[tool(name = "whoami", description = "Show the logged-in user.")]
    async fn whoami(&self) -> McpResult {
        self.handlers().whoami()
    }

    #[tool(
        name = "sign_up",
        description = "Mock account creation. Nothing is stored; use login afterwards."
    )]
    async fn sign_up(&self, params: Parameters<SignUp>) -> McpResult {
        self.handlers().sign_up(params)
    }

    #[tool(
        name = "forgot_password",
        description = "Mock password reset. No email is sent."
    )]
    async fn forgot_password(&self, params: Parameters<PasswordReset>) -> McpResult {
        self.handlers().forgot_password(params)
    }

    #[tool(
        name = "get_profile",
        description = "Show the skill profile: skills, tools, experience level and preferred client types."
    )]
    async fn get_profile(&self) -> McpResult {
        self.handlers().get_profile()
    }

    #[tool(
        name = "set_skills",
        description = "Replace the profile's skills with a comma-separated list, e.g. \"n8n, Python, API Integration\"."
    )]
    async fn set_skills(&self, params: Parameters<SetSkills>) -> McpResult {
        self.handlers().set_skills(params).await
    }

    #[tool(
        name = "toggle_tool",
        description = "Add a tool to the profile, or remove it if already present. Valid tools: n8n, Zapier, Make, Airtable, Notion, WordPress, Shopify, HubSpot, Slack, OpenAI."
    )]
    async fn toggle_tool(&self, params: Parameters<ToggleTool>) -> McpResult {
        self.handlers().toggle_tool(params).await
    }

    #[tool(
        name = "set_experience",
        description = "Set the experience level: 'Beginner', 'Intermediate' or 'Expert'."
    )]
    async fn set_experience(&self, params: Parameters<SetExperience>) -> McpResult {
        self.handlers().set_experience(params).await
    }

    #[tool(
        name = "toggle_client",
        description = "Add a preferred client type, or remove it if already present. Valid types: SMB, Enterprise, Agencies, SaaS, Solo-creators."
    )]
    async fn toggle_client(&self, params: Parameters<ToggleClient>) -> McpResult {
        self.handlers().toggle_client(params).await
    }

    #[tool(
        name = "list_niches",
        description = "List every market niche with its id and mark the ones currently selected."
    )]
    async fn list_niches(&self) -> McpResult {
        self.handlers().list_niches()
    }

    #[tool(
        name = "toggle_niche",
        description = "Select or deselect a niche by id. At most 5 niches can be selected at once; selecting a sixth is refused."
    )]
    async fn toggle_niche(&self, params: Parameters<ToggleNiche>) -> McpResult {
        self.handlers().toggle_niche(params).await
    }

    #[tool(name = "clear_niches", description = "Deselect every niche.")]
    async fn clear_niches(&self) -> McpResult {
        self.handlers().clear_niches().await
    }

    #[tool(
        name = "start_engine",
        description = "Generate 3-5 business ideas per selected niche from the skill profile. Replaces the previous ideas only on success. Requires at least one selected niche."
    )]
    async fn start_engine(&self) -> McpResult {
        self.handlers().start_engine().await
    }

    #[tool(
        name = "list_ideas",
        description = "List the most recently generated ideas with their ids."
    )]
    async fn list_ideas(&self) -> McpResult {
        self.handlers().list_ideas()
    }

    #[tool(
        name = "view_blueprint",
        description = "Show the technical blueprint of an idea: solution strategy, automation steps and error handling. Generated on first view and cached afterwards."
    )]
    async fn view_blueprint(&self, params: Parameters<IdeaRef>) -> McpResult {
        self.handlers().view_blueprint(params).await
    }

    #[tool(
        name = "generate_workflow",
        description = "Return an importable n8n workflow JSON document for an idea. Generated once and cached."
    )]
    async fn generate_workflow(&self, params: Parameters<IdeaRef>) -> McpResult {
        self.handlers().generate_workflow(params).await
    }

    #[tool(
        name = "share_recipe",
        description = "Return a plain-text recipe of an idea and its blueprint, ready to paste into a message."
    )]
    async fn share_recipe(&self, params: Parameters<IdeaRef>) -> McpResult {
        self.handlers().share_recipe(params).await
    }

    #[tool(
        name = "save_to_playbook",
        description = "Save a generated idea to the playbook in the 'Idea' column. Each idea can be saved once."
    )]
    async fn save_to_playbook(&self, params: Parameters<IdeaRef>) -> McpResult {
        self.handlers().save_to_playbook(params).await
    }

    #[tool(
        name = "list_playbook",
        description = "Show the playbook board grouped into Idea, Designing, Pitching and Live columns."
    )]
    async fn list_playbook(&self) -> McpResult {
        self.handlers().list_playbook()
    }

    #[tool(
        name = "show_entry",
        description = "Show one playbook entry with its notes and blueprint."
    )]
    async fn show_entry(&self, params: Parameters<EntryRef>) -> McpResult {
        self.handlers().show_entry(params)
    }

    #[tool(
        name = "update_status",
        description = "Move a playbook entry to another column: 'Idea', 'Designing', 'Pitching' or 'Live'."
    )]
    async fn update_status(&self, params: Parameters<UpdateStatus>) -> McpResult {
        self.handlers().update_status(params).await
    }

    #[tool(
        name = "update_notes",
        description = "Replace the notes of a playbook entry. An empty string clears them."
    )]
    async fn update_notes(&self, params: Parameters<UpdateNotes>) -> McpResult {
        self.handlers().update_notes(params).await
    }

    #[tool(
        name = "delete_entry",
        description = "Permanently delete a playbook entry. Requires confirmed=true; this cannot be undone."
    )]
    async fn delete_entry(&self, params: Parameters<DeleteEntry>) -> McpResult {
        self.handlers().delete_entry(params).await
    }

    #[tool(
        name = "list_templates",
        description = "List the ready-made workflow templates."
    )]
    async fn list_templates(&self) -> McpResult {
        self.handlers().list_templates()
    }

    #[tool(
        name = "show_template",
        description = "Show a template with its importable workflow JSON."
    )]
    async fn show_template(&self, params: Parameters<TemplateRef>) -> McpResult {
        self.handlers().show_template(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for Skill2NicheMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "skill2niche".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Skill2Niche turns a technical skill profile into monetizable automation business ideas.

## Core Concepts
- **Profile**: skills, tools, experience level and preferred client types
- **Niches**: market segments; up to 5 can be selected at once
- **Ideas**: generated offers, 3-5 per selected niche
- **Blueprint**: the technical plan behind an idea, generated on demand
- **Playbook**: saved ideas tracked across Idea, Designing, Pitching and Live

## Typical Flow
1. `login` with any email and password
2. Shape the profile with `set_skills`, `toggle_tool`, `set_experience`, `toggle_client`
3. Pick niches with `list_niches` and `toggle_niche`
4. `start_engine` to generate ideas, then `view_blueprint` for the ones worth a closer look
5. `save_to_playbook` and move entries along with `update_status`

Generation calls can take a while. Only one idea batch runs at a time."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: Skill2NicheMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Skill2Niche MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
