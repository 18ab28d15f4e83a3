pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::storage::CredentialStore;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Study Planner admin CLI - manage accounts, groups, classes and rosters")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Account management")]
    Account {
        #[command(subcommand)]
        cmd: commands::account::AccountCommands,
    },

    #[command(about = "Group management and capability grants")]
    Group {
        #[command(subcommand)]
        cmd: commands::group::GroupCommands,
    },

    #[command(about = "Class management")]
    Class {
        #[command(subcommand)]
        cmd: commands::class::ClassCommands,
    },

    #[command(about = "Class rosters (students and teachers)")]
    Roster {
        #[command(subcommand)]
        cmd: commands::roster::RosterCommands,
    },

    #[command(about = "Show the admin dashboard summary")]
    Dashboard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Shared API client for command handlers: credential store in the config
/// directory, base URL and timeout from the config singleton.
pub(crate) fn api_client() -> anyhow::Result<ApiClient> {
    let store = CredentialStore::open_default()?;
    Ok(ApiClient::from_config(store)?)
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Account { cmd } => commands::account::handle(cmd, output_format).await,
        Commands::Group { cmd } => commands::group::handle(cmd, output_format).await,
        Commands::Class { cmd } => commands::class::handle(cmd, output_format).await,
        Commands::Roster { cmd } => commands::roster::handle(cmd, output_format).await,
        Commands::Dashboard => commands::dashboard::handle(output_format).await,
    }
}
