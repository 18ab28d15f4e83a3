use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::config;
use crate::models::{GroupFunction, GroupRequest};
use crate::repositories::HttpGroupRepository;
use crate::stores::GroupStore;

#[derive(Subcommand)]
pub enum GroupCommands {
    #[command(about = "List groups (paged)")]
    List {
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Search groups by text")]
    Search {
        #[arg(help = "Text to search for")]
        text: String,
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Show one group")]
    Get {
        #[arg(help = "Group id")]
        group_id: String,
    },

    #[command(about = "Create a group")]
    Add {
        #[arg(help = "Group id")]
        group_id: String,
        #[arg(long, help = "Group name")]
        name: String,
        #[arg(long, default_value = "", help = "Group description")]
        description: String,
        #[arg(long, help = "Capability grants as a JSON array of group functions")]
        functions: Option<String>,
    },

    #[command(about = "Update a group")]
    Update {
        #[arg(help = "Group id")]
        group_id: String,
        #[arg(long, help = "Group name")]
        name: String,
        #[arg(long, default_value = "", help = "Group description")]
        description: String,
        #[arg(long, help = "Capability grants as a JSON array of group functions")]
        functions: Option<String>,
    },

    #[command(about = "Delete a group")]
    Delete {
        #[arg(help = "Group id")]
        group_id: String,
    },

    #[command(about = "Show the total group count")]
    Total,

    #[command(about = "Show the total user count across all groups")]
    TotalUsers,

    #[command(about = "List every function the backend knows about")]
    Functions,

    #[command(about = "List the functions granted to a group")]
    GroupFunctions {
        #[arg(help = "Group id")]
        group_id: String,
    },
}

fn build_store() -> anyhow::Result<GroupStore> {
    let api = crate::cli::api_client()?;
    Ok(GroupStore::new(Arc::new(HttpGroupRepository::new(api))))
}

fn paging(page: Option<u32>, page_size: Option<u32>) -> (u32, u32) {
    let cfg = &config::config().paging;
    (
        page.unwrap_or(cfg.default_page),
        page_size.unwrap_or(cfg.default_page_size),
    )
}

fn check(store: &GroupStore) -> anyhow::Result<()> {
    match &store.error_message {
        Some(message) => Err(anyhow!(message.clone())),
        None => Ok(()),
    }
}

fn parse_functions(raw: Option<String>) -> anyhow::Result<Vec<GroupFunction>> {
    match raw {
        Some(json) => serde_json::from_str(&json).context("invalid --functions JSON"),
        None => Ok(Vec::new()),
    }
}

pub async fn handle(cmd: GroupCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut store = build_store()?;

    match cmd {
        GroupCommands::List { page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.fetch_groups(page, page_size).await;
            check(&store)?;
            utils::output_list(
                &output_format,
                "groups",
                &store.groups,
                store.total_groups,
                |g| format!("{}  {}  {}", g.group_id, g.group_name, g.group_description),
            )
        }
        GroupCommands::Search { text, page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.search_groups(&text, page, page_size).await;
            check(&store)?;
            utils::output_list(
                &output_format,
                "groups",
                &store.groups,
                store.total_groups,
                |g| format!("{}  {}  {}", g.group_id, g.group_name, g.group_description),
            )
        }
        GroupCommands::Get { group_id } => {
            store.fetch_group(&group_id).await;
            check(&store)?;
            match &store.selected_group {
                Some(group) => utils::output_record(&output_format, group),
                None => Err(anyhow!("group not found")),
            }
        }
        GroupCommands::Add { group_id, name, description, functions } => {
            let request = GroupRequest {
                group_id: group_id.clone(),
                group_name: name,
                group_description: description,
                group_functions: parse_functions(functions)?,
            };
            store.add_group(&request).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("group {} created", group_id), None)
        }
        GroupCommands::Update { group_id, name, description, functions } => {
            let request = GroupRequest {
                group_id: group_id.clone(),
                group_name: name,
                group_description: description,
                group_functions: parse_functions(functions)?,
            };
            store.update_group(&request).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("group {} updated", group_id), None)
        }
        GroupCommands::Delete { group_id } => {
            store.delete_group(&group_id).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("group {} deleted", group_id), None)
        }
        GroupCommands::Total => {
            store.fetch_total_groups().await;
            check(&store)?;
            utils::output_success(
                &output_format,
                &format!("{} groups", store.total_groups),
                Some(serde_json::json!({ "total_groups": store.total_groups })),
            )
        }
        GroupCommands::TotalUsers => {
            store.fetch_total_users().await;
            check(&store)?;
            utils::output_success(
                &output_format,
                &format!("{} users across all groups", store.total_users),
                Some(serde_json::json!({ "total_users": store.total_users })),
            )
        }
        GroupCommands::Functions => {
            store.fetch_functions().await;
            check(&store)?;
            let total = store.functions.len() as u64;
            utils::output_list(&output_format, "functions", &store.functions, total, |f| {
                format!(
                    "{}  {}  enabled={}  read_only={}",
                    f.function_id, f.function_name, f.is_enable, f.is_read_only
                )
            })
        }
        GroupCommands::GroupFunctions { group_id } => {
            store.fetch_group_functions(&group_id).await;
            check(&store)?;
            let total = store.group_functions.len() as u64;
            utils::output_list(
                &output_format,
                "group_functions",
                &store.group_functions,
                total,
                |f| {
                    format!(
                        "{}  {}  enabled={}  read_only={}",
                        f.function_id, f.function_name, f.is_enable, f.is_read_only
                    )
                },
            )
        }
    }
}
