//! Command handlers: run one engine operation and render its result.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use skill2niche_core::{
    catalog::{self, CLIENT_TYPES, MAX_SELECTED_NICHES, TOOLS},
    display::{BlueprintView, Ideas, NicheCatalog, OperationStatus, ShareText, StepsText, Templates},
    params::{DeleteEntry, EntryRef, IdeaRef, TemplateRef},
    ActiveView, Engine, EngineError, NicheToggle,
};

use crate::{
    args::Commands,
    cli::{
        DeleteEntryArgs, EngineCommands, LoginArgs, NicheCommands, PasswordResetArgs,
        PlaybookCommands, ProfileCommands, ShareArgs, SignUpArgs, TemplateCommands,
    },
    renderer::TerminalRenderer,
};

/// Adds a hint to system faults; input problems already read well on their own.
fn with_hint<T>(result: skill2niche_core::Result<T>, hint: &'static str) -> Result<T> {
    result.map_err(|e| {
        if e.is_user_facing() {
            anyhow!(e)
        } else {
            anyhow!(e).context(hint)
        }
    })
}

/// CLI command handler
pub struct Cli {
    engine: Engine,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(engine: Engine, renderer: TerminalRenderer) -> Self {
        Self { engine, renderer }
    }

    /// Dispatches a one-shot command. `serve` never reaches here.
    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Login(args) => self.login(args).await,
            Commands::Signup(args) => {
                self.sign_up(args);
                Ok(())
            }
            Commands::ForgotPassword(args) => {
                self.forgot_password(args);
                Ok(())
            }
            Commands::Logout => self.logout().await,
            Commands::Whoami => self.whoami(),
            Commands::Profile { command } => self.handle_profile_command(command).await,
            Commands::Niche { command } => self.handle_niche_command(command).await,
            Commands::Tools => {
                self.list_tools();
                Ok(())
            }
            Commands::Engine { command } => self.handle_engine_command(command).await,
            Commands::Playbook { command } => self.handle_playbook_command(command).await,
            Commands::Template { command } => self.handle_template_command(command),
            Commands::Serve => bail!("The MCP server is not a one-shot command"),
        }
    }

    /// Overview shown when no command is given.
    pub fn home(&self) {
        let state = self.engine.snapshot();
        let Some(user) = state.user() else {
            self.renderer
                .render("Not logged in. Run `s2n login <email> --password <password>` to start.\n");
            return;
        };

        let mut output = user.to_string();
        output.push('\n');
        output.push_str(&state.profile.to_string());
        output.push_str(&format!(
            "\n- **Selected niches**: {}/{MAX_SELECTED_NICHES}\n- **Generated ideas**: {}\n- **Playbook entries**: {}\n",
            state.selected_niches.len(),
            state.ideas.len(),
            state.playbook.len()
        ));
        self.renderer.render(&output);
    }

    // ------------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------------

    pub async fn login(&self, args: LoginArgs) -> Result<()> {
        let user = with_hint(self.engine.login(&args.into()).await, "Failed to log in")?;
        self.renderer.render(&user.to_string());
        Ok(())
    }

    pub fn sign_up(&self, args: SignUpArgs) {
        let notice = self.engine.sign_up(&args.into());
        self.renderer.render(&OperationStatus::success(notice).to_string());
    }

    pub fn forgot_password(&self, args: PasswordResetArgs) {
        let notice = self.engine.forgot_password(&args.into());
        self.renderer.render(&OperationStatus::success(notice).to_string());
    }

    pub async fn logout(&self) -> Result<()> {
        let previous = with_hint(self.engine.logout().await, "Failed to log out")?;
        let message = match previous {
            Some(user) => format!("Logged out {}. Your data is kept for next time.", user.email),
            None => "Nobody was logged in.".to_string(),
        };
        self.renderer.render(&OperationStatus::success(message).to_string());
        Ok(())
    }

    pub fn whoami(&self) -> Result<()> {
        let user = self.engine.current_user().ok_or(EngineError::NotLoggedIn)?;
        self.renderer.render(&user.to_string());
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Profile, niches, catalogs
    // ------------------------------------------------------------------------

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        let profile = match command {
            ProfileCommands::Show => {
                self.require_login()?;
                self.engine.profile()
            }
            ProfileCommands::Skills(args) => self.engine.set_skills(&args.into()).await?,
            ProfileCommands::Tool(args) => self.engine.toggle_tool(&args.into()).await?,
            ProfileCommands::Experience(args) => self.engine.set_experience(&args.into()).await?,
            ProfileCommands::Client(args) => {
                self.engine.toggle_preferred_client(&args.into()).await?
            }
        };
        self.renderer.render(&profile.to_string());
        Ok(())
    }

    pub async fn handle_niche_command(&self, command: NicheCommands) -> Result<()> {
        match command {
            NicheCommands::List => {
                let catalog = NicheCatalog::new(catalog::niches(), self.engine.selected_niches());
                self.renderer.render(&catalog.to_string());
            }
            NicheCommands::Toggle(args) => {
                let message = match self.engine.toggle_niche(&args.into()).await? {
                    NicheToggle::Selected(niche) => format!("Selected {}", niche.name),
                    NicheToggle::Deselected(niche) => format!("Deselected {}", niche.name),
                    NicheToggle::LimitReached => {
                        bail!("You can select at most {MAX_SELECTED_NICHES} niches. Deselect one first.")
                    }
                };
                self.renderer.render(&OperationStatus::success(message).to_string());
            }
            NicheCommands::Clear => {
                self.engine.clear_niches().await?;
                self.renderer
                    .render(&OperationStatus::success("Niche selection cleared").to_string());
            }
        }
        Ok(())
    }

    pub fn list_tools(&self) {
        let mut output = String::from("# Tools\n\n");
        for tool in TOOLS {
            output.push_str(&format!("- {tool}\n"));
        }
        output.push_str("\n# Client Types\n\n");
        for client in CLIENT_TYPES {
            output.push_str(&format!("- {client}\n"));
        }
        self.renderer.render(&output);
    }

    pub fn handle_template_command(&self, command: TemplateCommands) -> Result<()> {
        self.engine.set_view(ActiveView::Templates);
        match command {
            TemplateCommands::List => {
                let templates = Templates(catalog::TEMPLATES.iter().collect());
                self.renderer.render(&templates.to_string());
            }
            TemplateCommands::Show(args) => {
                let params: TemplateRef = args.into();
                let template = catalog::find_template(&params.id)
                    .ok_or_else(|| anyhow!("Template with ID {} not found", params.id))?;
                self.renderer.render(&template.to_string());
                self.renderer.raw(template.workflow_json);
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Engine
    // ------------------------------------------------------------------------

    pub async fn handle_engine_command(&self, command: EngineCommands) -> Result<()> {
        match command {
            EngineCommands::Start => {
                let ideas = with_hint(
                    self.engine.start_engine().await,
                    "Failed to generate ideas. Please check your API key.",
                )?;
                debug!("Rendering {} ideas", ideas.len());
                self.renderer.render(&Ideas(ideas).to_string());
            }
            EngineCommands::Ideas => {
                self.require_login()?;
                self.renderer.render(&Ideas(self.engine.ideas()).to_string());
            }
            EngineCommands::Show(args) => {
                let idea = self.engine.idea(&args.into())?;
                self.renderer.render(&idea.to_string());
            }
            EngineCommands::Blueprint(args) => {
                let idea = with_hint(
                    self.engine.view_blueprint(&args.into()).await,
                    "Error generating blueprint.",
                )?;
                let view = BlueprintView::of(&idea)
                    .ok_or_else(|| anyhow!("Idea {} has no blueprint", idea.id))?;
                self.renderer.render(&view.to_string());
            }
            EngineCommands::Workflow(args) => {
                let idea = with_hint(
                    self.engine.generate_workflow(&args.into()).await,
                    "Failed to generate JSON",
                )?;
                let json = idea.workflow_json.unwrap_or_default();
                self.renderer.raw(&json);
            }
            EngineCommands::Share(args) => self.share(args).await?,
        }
        Ok(())
    }

    async fn share(&self, args: ShareArgs) -> Result<()> {
        let params = IdeaRef {
            idea_id: args.idea_id,
        };
        let idea = with_hint(
            self.engine.view_blueprint(&params).await,
            "Error generating blueprint.",
        )?;
        let share = ShareText::of(&idea)
            .ok_or_else(|| anyhow!("Idea {} has no blueprint", idea.id))?;

        if args.steps {
            self.renderer.raw(&StepsText(&share.blueprint.steps).to_string());
        } else {
            self.renderer.raw(&share.to_string());
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Playbook
    // ------------------------------------------------------------------------

    pub async fn handle_playbook_command(&self, command: PlaybookCommands) -> Result<()> {
        match command {
            PlaybookCommands::List => {
                self.require_login()?;
                self.renderer
                    .render(&self.engine.playbook_board().to_string());
            }
            PlaybookCommands::Show(args) => {
                let entry = self.engine.get_entry(&args.into())?;
                let mut output = entry.to_string();
                if let Some(view) = BlueprintView::of(&entry.idea) {
                    output.push_str(&view.to_string());
                } else {
                    output.push_str(&entry.idea.to_string());
                }
                self.renderer.render(&output);
            }
            PlaybookCommands::Save(args) => {
                let entry = self.engine.save_to_playbook(&args.into()).await?;
                let message = format!("Saved \"{}\" to your playbook (ID: {})", entry.idea.title, entry.id);
                self.renderer.render(&OperationStatus::success(message).to_string());
            }
            PlaybookCommands::Status(args) => {
                let entry = self.engine.update_status(&args.into()).await?;
                let message = format!("\"{}\" moved to {}", entry.idea.title, entry.status);
                self.renderer.render(&OperationStatus::success(message).to_string());
            }
            PlaybookCommands::Notes(args) => {
                let entry = self.engine.update_notes(&args.into()).await?;
                self.renderer.render(&entry.to_string());
            }
            PlaybookCommands::Delete(args) => self.delete_entry(args).await?,
        }
        Ok(())
    }

    async fn delete_entry(&self, args: DeleteEntryArgs) -> Result<()> {
        let entry = self.engine.get_entry(&EntryRef {
            id: args.id.clone(),
        })?;

        let confirmed = args.yes
            || confirm(&format!(
                "Delete \"{}\" from your playbook? [y/N] ",
                entry.idea.title
            ))?;
        if !confirmed {
            self.renderer
                .render(&OperationStatus::failure("Deletion cancelled").to_string());
            return Ok(());
        }

        let removed = self
            .engine
            .delete_entry(&DeleteEntry {
                id: args.id,
                confirmed,
            })
            .await?;
        let message = match removed {
            Some(entry) => format!("Deleted \"{}\"", entry.idea.title),
            None => "Entry was already gone".to_string(),
        };
        self.renderer.render(&OperationStatus::success(message).to_string());
        Ok(())
    }

    fn require_login(&self) -> Result<()> {
        if self.engine.is_logged_in() {
            Ok(())
        } else {
            Err(EngineError::NotLoggedIn.into())
        }
    }
}

/// Asks a yes/no question on stdin. Anything but "y" or "yes" is a no.
fn confirm(question: &str) -> Result<bool> {
    print!("{question}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
