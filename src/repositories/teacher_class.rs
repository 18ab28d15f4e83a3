use async_trait::async_trait;

use super::unwrap_envelope;
use crate::api::envelope::{Envelope, Page};
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{TeacherClass, TeacherClassRequest};

/// Teacher-roster operations, nested under the owning class:
/// `/Class/{classId}/TeacherClass/*`.
#[async_trait]
pub trait TeacherClassRepository: Send + Sync {
    async fn add(&self, entry: &TeacherClassRequest) -> Result<Envelope<bool>, ClientError>;

    async fn get_all(
        &self,
        class_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<TeacherClass>>, ClientError>;

    async fn delete(
        &self,
        class_id: &str,
        teacher_id: &str,
    ) -> Result<Envelope<bool>, ClientError>;

    async fn update(&self, entry: &TeacherClassRequest) -> Result<Envelope<bool>, ClientError>;

    async fn search(
        &self,
        class_id: &str,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<TeacherClass>>, ClientError>;

    async fn get_by_ids(
        &self,
        class_id: &str,
        teacher_id: &str,
    ) -> Result<Envelope<TeacherClass>, ClientError>;
}

pub struct HttpTeacherClassRepository {
    api: ApiClient,
}

impl HttpTeacherClassRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TeacherClassRepository for HttpTeacherClassRepository {
    async fn add(&self, entry: &TeacherClassRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .post(
                    &format!("/Class/{}/TeacherClass/AddTeacherClass", entry.class_id),
                    entry,
                )
                .await,
        )
    }

    async fn get_all(
        &self,
        class_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<TeacherClass>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    &format!("/Class/{}/TeacherClass/GetTeacherClassListAsync", class_id),
                    &[("page", page.to_string()), ("pageSize", page_size.to_string())],
                )
                .await,
        )
    }

    async fn delete(
        &self,
        class_id: &str,
        teacher_id: &str,
    ) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .delete(
                    &format!("/Class/{}/TeacherClass/DeleteTeacherClass", class_id),
                    &[
                        ("classId", class_id.to_string()),
                        ("teacherId", teacher_id.to_string()),
                    ],
                )
                .await,
        )
    }

    async fn update(&self, entry: &TeacherClassRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .put(
                    &format!("/Class/{}/TeacherClass/UpdateTeacherClass", entry.class_id),
                    entry,
                )
                .await,
        )
    }

    async fn search(
        &self,
        class_id: &str,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<TeacherClass>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    &format!("/Class/{}/TeacherClass/SearchTeacherClassListAsync", class_id),
                    &[
                        ("textToSearch", text_to_search.to_string()),
                        ("page", page.to_string()),
                        ("pageSize", page_size.to_string()),
                    ],
                )
                .await,
        )
    }

    async fn get_by_ids(
        &self,
        class_id: &str,
        teacher_id: &str,
    ) -> Result<Envelope<TeacherClass>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    &format!("/Class/{}/TeacherClass/GetTeacherClassByID", class_id),
                    &[
                        ("classId", class_id.to_string()),
                        ("teacherId", teacher_id.to_string()),
                    ],
                )
                .await,
        )
    }
}
