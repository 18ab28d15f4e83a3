use std::sync::Arc;

use anyhow::anyhow;
use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::config;
use crate::models::ClassRequest;
use crate::repositories::HttpClassRepository;
use crate::stores::ClassStore;

#[derive(Subcommand)]
pub enum ClassCommands {
    #[command(about = "List classes (paged)")]
    List {
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Search classes by text")]
    Search {
        #[arg(help = "Text to search for")]
        text: String,
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Show one class")]
    Get {
        #[arg(help = "Class id")]
        class_id: String,
    },

    #[command(about = "Create a class")]
    Add {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(long, help = "Class name")]
        name: String,
        #[arg(long, default_value = "", help = "Class description")]
        description: String,
    },

    #[command(about = "Update a class")]
    Update {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(long, help = "Class name")]
        name: String,
        #[arg(long, default_value = "", help = "Class description")]
        description: String,
    },

    #[command(about = "Delete a class")]
    Delete {
        #[arg(help = "Class id")]
        class_id: String,
    },
}

fn build_store() -> anyhow::Result<ClassStore> {
    let api = crate::cli::api_client()?;
    Ok(ClassStore::new(Arc::new(HttpClassRepository::new(api))))
}

fn paging(page: Option<u32>, page_size: Option<u32>) -> (u32, u32) {
    let cfg = &config::config().paging;
    (
        page.unwrap_or(cfg.default_page),
        page_size.unwrap_or(cfg.default_page_size),
    )
}

fn check(store: &ClassStore) -> anyhow::Result<()> {
    match &store.error_message {
        Some(message) => Err(anyhow!(message.clone())),
        None => Ok(()),
    }
}

pub async fn handle(cmd: ClassCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut store = build_store()?;

    match cmd {
        ClassCommands::List { page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.fetch_classes(page, page_size).await;
            check(&store)?;
            utils::output_list(
                &output_format,
                "classes",
                &store.classes,
                store.total_classes,
                |c| format!("{}  {}  {}", c.class_id, c.class_name, c.class_description),
            )
        }
        ClassCommands::Search { text, page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.search_classes(&text, page, page_size).await;
            check(&store)?;
            utils::output_list(
                &output_format,
                "classes",
                &store.classes,
                store.total_classes,
                |c| format!("{}  {}  {}", c.class_id, c.class_name, c.class_description),
            )
        }
        ClassCommands::Get { class_id } => {
            store.fetch_class(&class_id).await;
            check(&store)?;
            match &store.selected_class {
                Some(class) => utils::output_record(&output_format, class),
                None => Err(anyhow!("class not found")),
            }
        }
        ClassCommands::Add { class_id, name, description } => {
            let request = ClassRequest {
                class_id: class_id.clone(),
                class_name: name,
                class_description: description,
            };
            store.add_class(&request).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("class {} created", class_id), None)
        }
        ClassCommands::Update { class_id, name, description } => {
            let request = ClassRequest {
                class_id: class_id.clone(),
                class_name: name,
                class_description: description,
            };
            store.update_class(&request).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("class {} updated", class_id), None)
        }
        ClassCommands::Delete { class_id } => {
            store.delete_class(&class_id).await;
            check(&store)?;
            utils::output_success(&output_format, &format!("class {} deleted", class_id), None)
        }
    }
}
