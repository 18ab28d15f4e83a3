use async_trait::async_trait;

use super::unwrap_envelope;
use crate::api::envelope::{Envelope, Page};
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{Function, Group, GroupFunction, GroupRequest};

/// Group management operations against `/GroupManagement/*`.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn add(&self, group: &GroupRequest) -> Result<Envelope<bool>, ClientError>;

    async fn get_all(&self, page: u32, page_size: u32)
        -> Result<Envelope<Page<Group>>, ClientError>;

    async fn get_all_functions(&self) -> Result<Envelope<Vec<Function>>, ClientError>;

    async fn get_group_functions(
        &self,
        group_id: &str,
    ) -> Result<Envelope<Vec<GroupFunction>>, ClientError>;

    async fn delete(&self, group_id: &str) -> Result<Envelope<bool>, ClientError>;

    async fn update(&self, group: &GroupRequest) -> Result<Envelope<bool>, ClientError>;

    async fn search(
        &self,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Group>>, ClientError>;

    async fn get_by_id(&self, group_id: &str) -> Result<Envelope<Group>, ClientError>;

    async fn get_total_users(&self) -> Result<Envelope<u64>, ClientError>;

    async fn get_total_group_count(&self) -> Result<Envelope<u64>, ClientError>;
}

pub struct HttpGroupRepository {
    api: ApiClient,
}

impl HttpGroupRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl GroupRepository for HttpGroupRepository {
    async fn add(&self, group: &GroupRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .post("/GroupManagement/AddGroupManagement", group)
                .await,
        )
    }

    async fn get_all(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Group>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/GroupManagement/GetAllGroupManagement",
                    &[("page", page.to_string()), ("pageSize", page_size.to_string())],
                )
                .await,
        )
    }

    async fn get_all_functions(&self) -> Result<Envelope<Vec<Function>>, ClientError> {
        unwrap_envelope(self.api.get("/GroupManagement/GetAllFunctions", &[]).await)
    }

    async fn get_group_functions(
        &self,
        group_id: &str,
    ) -> Result<Envelope<Vec<GroupFunction>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/GroupManagement/GetGroupFunctionWithGroupID",
                    &[("groupId", group_id.to_string())],
                )
                .await,
        )
    }

    async fn delete(&self, group_id: &str) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .delete(
                    "/GroupManagement/DeleteGroupManagement",
                    &[("groupId", group_id.to_string())],
                )
                .await,
        )
    }

    async fn update(&self, group: &GroupRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .put("/GroupManagement/UpdateGroupManagement", group)
                .await,
        )
    }

    async fn search(
        &self,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Group>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/GroupManagement/SearchGroupInList",
                    &[
                        ("textToSearch", text_to_search.to_string()),
                        ("page", page.to_string()),
                        ("pageSize", page_size.to_string()),
                    ],
                )
                .await,
        )
    }

    async fn get_by_id(&self, group_id: &str) -> Result<Envelope<Group>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/GroupManagement/GetGroupManagemetWithGroupId",
                    &[("groupId", group_id.to_string())],
                )
                .await,
        )
    }

    async fn get_total_users(&self) -> Result<Envelope<u64>, ClientError> {
        unwrap_envelope(self.api.get("/GroupManagement/GetTotalUserInGroup", &[]).await)
    }

    async fn get_total_group_count(&self) -> Result<Envelope<u64>, ClientError> {
        unwrap_envelope(self.api.get("/GroupManagement/GetTotalGroupCount", &[]).await)
    }
}
