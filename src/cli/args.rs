//! Top-level argument structure

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::class::ClassCommands;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::data::DataCommands;
use crate::cli::commands::ledger::LedgerCommands;
use crate::cli::commands::login::LoginArgs;
use crate::cli::commands::student::StudentCommands;
use crate::cli::commands::teacher::TeacherCommands;
use crate::core::Config;

/// Terminal admin client for the school-management back office
#[derive(Parser, Debug)]
#[command(name = "schoolctl", version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login(LoginArgs),

    /// Forget the stored session token
    Logout,

    /// Student records
    #[command(subcommand)]
    Student(StudentCommands),

    /// Teacher records
    #[command(subcommand)]
    Teacher(TeacherCommands),

    /// Class roster
    #[command(subcommand)]
    Class(ClassCommands),

    /// Ledger accounts
    #[command(subcommand)]
    Ledger(LedgerCommands),

    /// Bulk spreadsheet import/export
    #[command(subcommand)]
    Data(DataCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command
#[derive(clap::Args, Debug)]
pub struct GlobalOpts {
    /// Output format (auto = table for lists, yaml for single records)
    #[arg(long, global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// API root, overriding config file and environment
    #[arg(long, global = true, env = "SCHOOLCTL_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Print requests as they run
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Resolve configuration with the CLI flag taking precedence.
    pub fn config(&self) -> Config {
        let mut config = Config::load();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        config
    }
}

/// Requested output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Auto,
    Table,
    Json,
    Yaml,
}
