use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{anyhow, Context};
use chrono::{TimeZone, Utc};
use clap::Subcommand;
use serde_json::json;

use crate::auth::Session;
use crate::cli::{utils, OutputFormat};
use crate::repositories::{HttpAccountRepository, HttpLoginRepository};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login and persist the session token")]
    Login {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Logout and remove the persisted session")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,

    #[command(about = "Show current user information")]
    Whoami,
}

fn build_session() -> anyhow::Result<Session> {
    let api = crate::cli::api_client()?;
    let store = api.store().clone();
    Ok(Session::new(
        Arc::new(HttpLoginRepository::new(api.clone())),
        Arc::new(HttpAccountRepository::new(api)),
        store,
    ))
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush().ok();
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password()?,
            };

            let mut session = build_session()?;
            session.login(&username, &password).await;

            if let Some(message) = session.error_message {
                return Err(anyhow!(message));
            }

            utils::output_success(
                &output_format,
                &format!("logged in as {}", username),
                Some(json!({
                    "username": session.username,
                    "full_name": session.full_name,
                    "role": session.role,
                    "expires_at": session.expires_at,
                })),
            )
        }
        AuthCommands::Logout => {
            let mut session = build_session()?;
            session.logout()?;
            utils::output_success(&output_format, "logged out", None)
        }
        AuthCommands::Status => {
            let mut session = build_session()?;
            session.load_from_storage();

            let expires = if session.expires_at > 0 {
                Utc.timestamp_opt(session.expires_at, 0)
                    .single()
                    .map(|t| t.to_rfc3339())
            } else {
                None
            };

            utils::output_success(
                &output_format,
                if session.is_authenticated() {
                    "authenticated"
                } else {
                    "not authenticated"
                },
                Some(json!({
                    "authenticated": session.is_authenticated(),
                    "username": session.username,
                    "full_name": session.full_name,
                    "role": session.role,
                    "token_expires": expires,
                    "permissions": session.permissions,
                })),
            )
        }
        AuthCommands::Whoami => {
            let mut session = build_session()?;
            session.load_from_storage();

            if !session.is_authenticated() {
                return Err(anyhow!("not logged in"));
            }

            session.fetch_user_info().await;
            match session.user_info {
                Some(account) => utils::output_record(&output_format, &account),
                None => Err(anyhow!("could not fetch user information")),
            }
        }
    }
}
