use std::sync::Arc;

use anyhow::anyhow;
use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::config;
use crate::models::AccountRequest;
use crate::repositories::HttpAccountRepository;
use crate::stores::AccountStore;

#[derive(Subcommand)]
pub enum AccountCommands {
    #[command(about = "List accounts (paged)")]
    List {
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
        #[arg(long, help = "Restrict to members of a group")]
        group_id: Option<String>,
    },

    #[command(about = "Search accounts by text")]
    Search {
        #[arg(help = "Text to search for")]
        text: String,
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Show one account")]
    Get {
        #[arg(help = "Username")]
        username: String,
    },

    #[command(about = "Create an account")]
    Add {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Initial password")]
        password: String,
        #[arg(long, help = "Full display name")]
        full_name: String,
        #[arg(long, help = "Email address")]
        email: String,
        #[arg(long, default_value = "", help = "Parent/guardian email address")]
        parent_email: String,
        #[arg(long, help = "Group to place the account in")]
        group_id: String,
    },

    #[command(about = "Update an account")]
    Update {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Full display name")]
        full_name: String,
        #[arg(long, help = "Email address")]
        email: String,
        #[arg(long, default_value = "", help = "Parent/guardian email address")]
        parent_email: String,
        #[arg(long, help = "Group to place the account in")]
        group_id: String,
    },

    #[command(about = "Delete an account")]
    Delete {
        #[arg(help = "Username")]
        username: String,
    },

    #[command(about = "Show the total account count")]
    Total,
}

fn build_store() -> anyhow::Result<AccountStore> {
    let api = crate::cli::api_client()?;
    Ok(AccountStore::new(Arc::new(HttpAccountRepository::new(api))))
}

fn paging(page: Option<u32>, page_size: Option<u32>) -> (u32, u32) {
    let cfg = &config::config().paging;
    (
        page.unwrap_or(cfg.default_page),
        page_size.unwrap_or(cfg.default_page_size),
    )
}

fn check(store: &AccountStore) -> anyhow::Result<()> {
    match &store.error_message {
        Some(message) => Err(anyhow!(message.clone())),
        None => Ok(()),
    }
}

pub async fn handle(cmd: AccountCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut store = build_store()?;

    match cmd {
        AccountCommands::List { page, page_size, group_id } => {
            let (page, page_size) = paging(page, page_size);
            match group_id {
                Some(group_id) => store.fetch_accounts_by_group(&group_id, page, page_size).await,
                None => store.fetch_accounts(page, page_size).await,
            }
            check(&store)?;
            utils::output_list(
                &output_format,
                "accounts",
                &store.accounts,
                store.total_accounts,
                |a| format!("{}  {}  {}  [{}]", a.user_name, a.full_name, a.email, a.group_name),
            )
        }
        AccountCommands::Search { text, page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.search_accounts(&text, page, page_size).await;
            check(&store)?;
            utils::output_list(
                &output_format,
                "accounts",
                &store.accounts,
                store.total_accounts,
                |a| format!("{}  {}  {}  [{}]", a.user_name, a.full_name, a.email, a.group_name),
            )
        }
        AccountCommands::Get { username } => {
            store.fetch_user_information(&username).await;
            check(&store)?;
            match &store.selected_account {
                Some(account) => utils::output_record(&output_format, account),
                None => Err(anyhow!("account not found")),
            }
        }
        AccountCommands::Add { username, password, full_name, email, parent_email, group_id } => {
            let request = AccountRequest {
                user_name: username.clone(),
                password: Some(password),
                full_name,
                email,
                parent_email,
                group_id,
            };
            store.add_account(&request).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("account {} created", username), None)
        }
        AccountCommands::Update { username, full_name, email, parent_email, group_id } => {
            let request = AccountRequest {
                user_name: username.clone(),
                password: None,
                full_name,
                email,
                parent_email,
                group_id,
            };
            store.update_account(&request).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("account {} updated", username), None)
        }
        AccountCommands::Delete { username } => {
            store.delete_account(&username).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("account {} deleted", username), None)
        }
        AccountCommands::Total => {
            store.fetch_total_accounts().await;
            check(&store)?;
            utils::output_success(
                &output_format,
                &format!("{} accounts", store.total_accounts),
                Some(serde_json::json!({ "total_accounts": store.total_accounts })),
            )
        }
    }
}
