use async_trait::async_trait;

use super::unwrap_envelope;
use crate::api::envelope::Envelope;
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::DashboardSummary;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn get_dashboard_data(&self) -> Result<Envelope<DashboardSummary>, ClientError>;
}

pub struct HttpDashboardRepository {
    api: ApiClient,
}

impl HttpDashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DashboardRepository for HttpDashboardRepository {
    async fn get_dashboard_data(&self) -> Result<Envelope<DashboardSummary>, ClientError> {
        unwrap_envelope(self.api.get("/Dashboard/GetDashboardDataAsync", &[]).await)
    }
}
