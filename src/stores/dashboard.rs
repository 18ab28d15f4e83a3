use std::sync::Arc;

use super::message_or;
use crate::models::DashboardSummary;
use crate::repositories::DashboardRepository;

pub struct DashboardStore {
    repo: Arc<dyn DashboardRepository>,
    pub summary: Option<DashboardSummary>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl DashboardStore {
    pub fn new(repo: Arc<dyn DashboardRepository>) -> Self {
        Self {
            repo,
            summary: None,
            is_loading: false,
            error_message: None,
        }
    }

    /// A failed fetch leaves any previously loaded summary in place.
    pub async fn fetch_summary(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_dashboard_data().await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(summary)) => self.summary = Some(summary),
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not load the dashboard"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }
}
