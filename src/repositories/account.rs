use async_trait::async_trait;

use super::unwrap_envelope;
use crate::api::envelope::{Envelope, Page};
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{Account, AccountRequest};

/// Account management operations against `/AccountManagement/*`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn get_all(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError>;

    async fn get_total(&self) -> Result<Envelope<u64>, ClientError>;

    async fn get_user_information(
        &self,
        username: &str,
    ) -> Result<Envelope<Account>, ClientError>;

    async fn add(&self, account: &AccountRequest) -> Result<Envelope<bool>, ClientError>;

    async fn update(&self, account: &AccountRequest) -> Result<Envelope<bool>, ClientError>;

    async fn delete(&self, username: &str) -> Result<Envelope<bool>, ClientError>;

    async fn get_all_by_group(
        &self,
        group_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError>;

    async fn search(
        &self,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError>;
}

pub struct HttpAccountRepository {
    api: ApiClient,
}

impl HttpAccountRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AccountRepository for HttpAccountRepository {
    async fn get_all(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/AccountManagement/GetAllAccount",
                    &[("page", page.to_string()), ("pageSize", page_size.to_string())],
                )
                .await,
        )
    }

    async fn get_total(&self) -> Result<Envelope<u64>, ClientError> {
        unwrap_envelope(self.api.get("/AccountManagement/GetTotalAccount", &[]).await)
    }

    async fn get_user_information(
        &self,
        username: &str,
    ) -> Result<Envelope<Account>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/AccountManagement/GetUserInformation",
                    &[("username", username.to_string())],
                )
                .await,
        )
    }

    async fn add(&self, account: &AccountRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .post("/AccountManagement/AddAccountManagement", account)
                .await,
        )
    }

    async fn update(&self, account: &AccountRequest) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .put("/AccountManagement/UpdateAccountManagement", account)
                .await,
        )
    }

    async fn delete(&self, username: &str) -> Result<Envelope<bool>, ClientError> {
        unwrap_envelope(
            self.api
                .delete(
                    "/AccountManagement/DeleteAccountManagement",
                    &[("username", username.to_string())],
                )
                .await,
        )
    }

    async fn get_all_by_group(
        &self,
        group_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/AccountManagement/GetAllAccountByGroupId",
                    &[
                        ("groupId", group_id.to_string()),
                        ("page", page.to_string()),
                        ("pageSize", page_size.to_string()),
                    ],
                )
                .await,
        )
    }

    async fn search(
        &self,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        unwrap_envelope(
            self.api
                .get(
                    "/AccountManagement/SearchAccountByText",
                    &[
                        ("textToSearch", text_to_search.to_string()),
                        ("page", page.to_string()),
                        ("pageSize", page_size.to_string()),
                    ],
                )
                .await,
        )
    }
}
