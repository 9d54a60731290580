use std::path::PathBuf;

use clap::{Parser, Subcommand};
use skill2niche_core::generation::{DEFAULT_API_BASE, DEFAULT_MODEL};

use crate::cli::{
    EngineCommands, LoginArgs, NicheCommands, PasswordResetArgs, PlaybookCommands,
    ProfileCommands, SignUpArgs, TemplateCommands,
};

/// Turn technical skills into monetizable automation offers
///
/// Skill2Niche asks a hosted text-generation model for business ideas that
/// match your skill profile and chosen market niches, expands each idea into
/// an automation blueprint on demand, and tracks the ideas you commit to on a
/// four-column playbook board. It can also run as an MCP server for AI
/// assistants.
#[derive(Parser)]
#[command(version, about, name = "s2n")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/skill2niche/skill2niche.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key for the generative-AI service
    #[arg(
        long,
        global = true,
        env = "GEMINI_API_KEY",
        hide_env_values = true,
        default_value = ""
    )]
    pub api_key: String,

    /// Model used for every generation call
    #[arg(long, global = true, env = "S2N_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generative-AI API (up to and excluding `/models`)
    #[arg(long, global = true, env = "S2N_API_BASE_URL", default_value = DEFAULT_API_BASE)]
    pub api_base_url: String,

    /// Abort generation requests that take longer than this many seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Skill2Niche CLI
///
/// - session: `login`, `signup`, `forgot-password`, `logout`, `whoami`
/// - inputs: `profile`, `niche`, `tools`
/// - generation: `engine`
/// - tracking: `playbook`
/// - reference: `template`
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Log in with any email and password
    Login(LoginArgs),
    /// Create an account
    Signup(SignUpArgs),
    /// Request a password reset link
    ForgotPassword(PasswordResetArgs),
    /// Log out, keeping your saved data
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show or edit your skill profile
    #[command(alias = "p")]
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Browse and select market niches
    #[command(alias = "n")]
    Niche {
        #[command(subcommand)]
        command: NicheCommands,
    },
    /// List the tools and client types a profile can pick from
    Tools,
    /// Generate ideas, blueprints and workflow documents
    #[command(alias = "e")]
    Engine {
        #[command(subcommand)]
        command: EngineCommands,
    },
    /// Track saved ideas through Idea, Designing, Pitching and Live
    #[command(alias = "pb")]
    Playbook {
        #[command(subcommand)]
        command: PlaybookCommands,
    },
    /// Browse ready-made workflow templates
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Start the MCP server
    Serve,
}
