//! Command-line argument wrappers using clap
//!
//! Each command's arguments live in a clap `Args` struct that converts into
//! the matching core parameter type with `From`, so core types stay free of
//! clap attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Engine
//! ```

use clap::{Args, Subcommand, ValueEnum};
use skill2niche_core::{
    models::{ExperienceLevel, PlaybookStatus},
    params::*,
};

// ============================================================================
// Session
// ============================================================================

/// Log in with any non-empty email and password
#[derive(Args)]
pub struct LoginArgs {
    #[arg(help = "Email address; the same address always restores the same data")]
    pub email: String,
    #[arg(short, long, help = "Password (any non-empty value is accepted)")]
    pub password: String,
}

impl From<LoginArgs> for Login {
    fn from(val: LoginArgs) -> Self {
        Login {
            email: val.email,
            password: val.password,
        }
    }
}

#[derive(Args)]
pub struct SignUpArgs {
    #[arg(short, long, help = "Display name")]
    pub name: String,
    pub email: String,
    #[arg(short, long)]
    pub password: String,
}

impl From<SignUpArgs> for SignUp {
    fn from(val: SignUpArgs) -> Self {
        SignUp {
            name: val.name,
            email: val.email,
            password: val.password,
        }
    }
}

#[derive(Args)]
pub struct PasswordResetArgs {
    pub email: String,
}

impl From<PasswordResetArgs> for PasswordReset {
    fn from(val: PasswordResetArgs) -> Self {
        PasswordReset { email: val.email }
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the skill profile
    #[command(alias = "s")]
    Show,
    /// Replace your skills
    Skills(SetSkillsArgs),
    /// Add or remove a tool
    Tool(ToggleToolArgs),
    /// Set your experience level
    Experience(SetExperienceArgs),
    /// Add or remove a preferred client type
    Client(ToggleClientArgs),
}

#[derive(Args)]
pub struct SetSkillsArgs {
    #[arg(help = "Comma-separated skills, e.g. \"n8n, Python, API Integration\"")]
    pub skills: String,
}

impl From<SetSkillsArgs> for SetSkills {
    fn from(val: SetSkillsArgs) -> Self {
        SetSkills { skills: val.skills }
    }
}

#[derive(Args)]
pub struct ToggleToolArgs {
    #[arg(help = "Tool name (see `s2n tools`)")]
    pub tool: String,
}

impl From<ToggleToolArgs> for ToggleTool {
    fn from(val: ToggleToolArgs) -> Self {
        ToggleTool { tool: val.tool }
    }
}

#[derive(Args)]
pub struct SetExperienceArgs {
    #[arg(value_enum)]
    pub level: ExperienceArg,
}

impl From<SetExperienceArgs> for SetExperience {
    fn from(val: SetExperienceArgs) -> Self {
        SetExperience {
            level: val.level.into(),
        }
    }
}

#[derive(Args)]
pub struct ToggleClientArgs {
    #[arg(help = "Client type (see `s2n tools`)")]
    pub client: String,
}

impl From<ToggleClientArgs> for ToggleClient {
    fn from(val: ToggleClientArgs) -> Self {
        ToggleClient { client: val.client }
    }
}

// ============================================================================
// Niches
// ============================================================================

#[derive(Subcommand)]
pub enum NicheCommands {
    /// List niches with the current selection marked
    #[command(alias = "ls")]
    List,
    /// Select or deselect a niche (up to 5 at once)
    Toggle(ToggleNicheArgs),
    /// Deselect every niche
    Clear,
}

#[derive(Args)]
pub struct ToggleNicheArgs {
    #[arg(help = "Niche id from `s2n niche list`")]
    pub niche_id: String,
}

impl From<ToggleNicheArgs> for ToggleNiche {
    fn from(val: ToggleNicheArgs) -> Self {
        ToggleNiche {
            niche_id: val.niche_id,
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

#[derive(Subcommand)]
pub enum EngineCommands {
    /// Generate ideas for the selected niches
    Start,
    /// List the generated ideas
    #[command(alias = "ls")]
    Ideas,
    /// Show an idea without generating anything
    Show(IdeaArgs),
    /// Show an idea's blueprint, generating it on first view
    #[command(alias = "bp")]
    Blueprint(IdeaArgs),
    /// Print an importable n8n workflow document for an idea
    Workflow(IdeaArgs),
    /// Print a shareable plain-text recipe for an idea
    Share(ShareArgs),
}

#[derive(Args)]
pub struct IdeaArgs {
    #[arg(help = "Idea id from `s2n engine ideas`")]
    pub idea_id: String,
}

impl From<IdeaArgs> for IdeaRef {
    fn from(val: IdeaArgs) -> Self {
        IdeaRef {
            idea_id: val.idea_id,
        }
    }
}

#[derive(Args)]
pub struct ShareArgs {
    #[arg(help = "Idea id from `s2n engine ideas`")]
    pub idea_id: String,
    /// Print only the numbered workflow steps
    #[arg(long)]
    pub steps: bool,
}

// ============================================================================
// Playbook
// ============================================================================

#[derive(Subcommand)]
pub enum PlaybookCommands {
    /// Show the playbook board
    #[command(alias = "ls")]
    List,
    /// Show a single entry
    Show(EntryArgs),
    /// Save a generated idea to the playbook
    Save(IdeaArgs),
    /// Move an entry to another column
    Status(UpdateStatusArgs),
    /// Replace an entry's notes
    Notes(UpdateNotesArgs),
    /// Delete an entry
    #[command(alias = "rm")]
    Delete(DeleteEntryArgs),
}

#[derive(Args)]
pub struct EntryArgs {
    #[arg(help = "Playbook entry id")]
    pub id: String,
}

impl From<EntryArgs> for EntryRef {
    fn from(val: EntryArgs) -> Self {
        EntryRef { id: val.id }
    }
}

#[derive(Args)]
pub struct UpdateStatusArgs {
    #[arg(help = "Playbook entry id")]
    pub id: String,
    #[arg(value_enum)]
    pub status: StatusArg,
}

impl From<UpdateStatusArgs> for UpdateStatus {
    fn from(val: UpdateStatusArgs) -> Self {
        UpdateStatus {
            id: val.id,
            status: val.status.into(),
        }
    }
}

#[derive(Args)]
pub struct UpdateNotesArgs {
    #[arg(help = "Playbook entry id")]
    pub id: String,
    #[arg(help = "New notes; an empty string clears them")]
    pub notes: String,
}

impl From<UpdateNotesArgs> for UpdateNotes {
    fn from(val: UpdateNotesArgs) -> Self {
        UpdateNotes {
            id: val.id,
            notes: val.notes,
        }
    }
}

#[derive(Args)]
pub struct DeleteEntryArgs {
    #[arg(help = "Playbook entry id")]
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

// ============================================================================
// Templates
// ============================================================================

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List templates
    #[command(alias = "ls")]
    List,
    /// Show a template with its workflow document
    Show(TemplateArgs),
}

#[derive(Args)]
pub struct TemplateArgs {
    #[arg(help = "Template id, e.g. t1")]
    pub id: String,
}

impl From<TemplateArgs> for TemplateRef {
    fn from(val: TemplateArgs) -> Self {
        TemplateRef { id: val.id }
    }
}

// ============================================================================
// Value enums
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExperienceArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<ExperienceArg> for ExperienceLevel {
    fn from(val: ExperienceArg) -> Self {
        match val {
            ExperienceArg::Beginner => ExperienceLevel::Beginner,
            ExperienceArg::Intermediate => ExperienceLevel::Intermediate,
            ExperienceArg::Expert => ExperienceLevel::Expert,
        }
    }
}

/// Board column of a playbook entry
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Idea,
    Designing,
    Pitching,
    Live,
}

impl From<StatusArg> for PlaybookStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Idea => PlaybookStatus::Idea,
            StatusArg::Designing => PlaybookStatus::Designing,
            StatusArg::Pitching => PlaybookStatus::Pitching,
            StatusArg::Live => PlaybookStatus::Live,
        }
    }
}
