use std::sync::Arc;

use anyhow::anyhow;

use crate::cli::{utils, OutputFormat};
use crate::repositories::HttpDashboardRepository;
use crate::stores::DashboardStore;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let api = crate::cli::api_client()?;
    let mut store = DashboardStore::new(Arc::new(HttpDashboardRepository::new(api)));

    store.fetch_summary().await;
    if let Some(message) = &store.error_message {
        return Err(anyhow!(message.clone()));
    }

    let summary = store
        .summary
        .as_ref()
        .ok_or_else(|| anyhow!("the dashboard returned no data"))?;

    match output_format {
        OutputFormat::Json => utils::output_record(&output_format, summary),
        OutputFormat::Text => {
            println!("Accounts:            {}", summary.total_accounts);
            println!("Groups:              {}", summary.total_groups);
            println!("Classes:             {}", summary.total_classes);
            println!(
                "New this month:      {} ({:+.1}%)",
                summary.total_new_account_in_month,
                summary.percent_up_down_new_register_account
            );
            if !summary.class_with_student_counts.is_empty() {
                println!("Students per class:");
                for class in &summary.class_with_student_counts {
                    println!("  {}  {}  {}", class.class_id, class.class_name, class.total_student);
                }
            }
            if !summary.groups_with_user_counts.is_empty() {
                println!("Users per group:");
                for group in &summary.groups_with_user_counts {
                    println!("  {}  {}  {}", group.group_id, group.group_name, group.total_user);
                }
            }
            Ok(())
        }
    }
}
