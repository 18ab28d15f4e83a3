use async_trait::async_trait;

use super::unwrap_envelope;
use crate::api::envelope::{Envelope, Page};
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{StudentClass, StudentClassRequest};

/// Student-roster operations, nested under the owning class:
/// `/Class/{classId}/StudentClass/*`.
#[async_trait]
pub trait StudentClassRepository: Send + Sync {
    async fn add(&self, entry: &StudentClassRequest) -> Result<Envelope<bool>, ClientError>;

    async fn get_all(
        &self,
        class_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<StudentClass>>, ClientError>;

    async fn delete(
        &self,
        class_id: &str,
        student_id: &str,
    ) -> Result<Envelope<bool>, ClientError>;

    async fn update(&self, entry: &StudentClassRequest) -> Result<Envelope<bool>, ClientError>;

    async fn search(
        &self,
        class_id: &str,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<StudentClass>>, ClientError>;

    async fn get_by_ids(
        &self,
        class_id: &str,
        student_id: &str,
    ) -> Result<Envelope<StudentClass>, ClientError>;
}

pub struct HttpStudentClassRepository {
    api: ApiClient,
}

impl HttpStudentClassRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StudentClassRepository for HttpStudentClassRepository {
    async fn add(&self, entry: &StudentClassRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .post(
                    &format!("/Class/{}/StudentClass/AddStudentClass", entry.class_id),
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
    ) -> Result<Envelope<Page<StudentClass>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    &format!("/Class/{}/StudentClass/GetStudentClassListAsync", class_id),
                    &[("page", page.to_string()), ("pageSize", page_size.to_string())],
                )
                .await,
        )
    }

    async fn delete(
        &self,
        class_id: &str,
        student_id: &str,
    ) -> Result<Envelope<bool>, ClientError> {
        // The backend expects classId in both the path and the query string
        unwrap_envelope(
            self.api
                .delete(
                    &format!("/Class/{}/StudentClass/DeleteStudentClass", class_id),
                    &[
                        ("classId", class_id.to_string()),
                        ("studentId", student_id.to_string()),
                    ],
                )
                .await,
        )
    }

    async fn update(&self, entry: &StudentClassRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .put(
                    &format!("/Class/{}/StudentClass/UpdateStudentClass", entry.class_id),
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
    ) -> Result<Envelope<Page<StudentClass>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    &format!("/Class/{}/StudentClass/SearchStudentClassListAsync", class_id),
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
        student_id: &str,
    ) -> Result<Envelope<StudentClass>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    &format!("/Class/{}/StudentClass/GetStudentClassById", class_id),
                    &[
                        ("classId", class_id.to_string()),
                        ("studentId", student_id.to_string()),
                    ],
                )
                .await,
        )
    }
}
