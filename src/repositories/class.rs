use async_trait::async_trait;

use super::unwrap_envelope;
use crate::api::envelope::{Envelope, Page};
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{ClassInfo, ClassRequest};

/// Class management operations against `/Class/*`.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn add(&self, class: &ClassRequest) -> Result<Envelope<bool>, ClientError>;

    async fn get_all(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<ClassInfo>>, ClientError>;

    async fn delete(&self, class_id: &str) -> Result<Envelope<bool>, ClientError>;

    async fn update(&self, class: &ClassRequest) -> Result<Envelope<bool>, ClientError>;

    async fn search(
        &self,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<ClassInfo>>, ClientError>;

    async fn get_by_id(&self, class_id: &str) -> Result<Envelope<ClassInfo>, ClientError>;
}

pub struct HttpClassRepository {
    api: ApiClient,
}

impl HttpClassRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ClassRepository for HttpClassRepository {
    async fn add(&self, class: &ClassRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(self.api.post("/Class/AddClass", class).await)
    }

    async fn get_all(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<ClassInfo>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/Class/GetClassListAsync",
                    &[("page", page.to_string()), ("pageSize", page_size.to_string())],
                )
                .await,
        )
    }

    async fn delete(&self, class_id: &str) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .delete("/Class/DeleteClass", &[("classId", class_id.to_string())])
                .await,
        )
    }

    async fn update(&self, class: &ClassRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(self.api.put("/Class/UpdateClass", class).await)
    }

    async fn search(
        &self,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<ClassInfo>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/Class/SearchClassListAsync",
                    &[
                        ("textToSearch", text_to_search.to_string()),
                        ("page", page.to_string()),
                        ("pageSize", page_size.to_string()),
                    ],
                )
                .await,
        )
    }

    async fn get_by_id(&self, class_id: &str) -> Result<Envelope<ClassInfo>, ClientError> {
        unwrap_envelope(
            self.api
                .get("/Class/GetClassById", &[("classId", class_id.to_string())])
                .await,
        )
    }
}
