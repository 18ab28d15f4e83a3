use std::sync::Arc;

use super::{message_or, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{Account, AccountRequest};
use crate::repositories::AccountRepository;

/// Paged-list state for account management.
///
/// Every operation funnels through the same pattern: raise the loading
/// flag, clear the previous error, run the repository call, and either
/// apply the new state or stash the failure message. Mutations re-fetch
/// the list with default paging on success instead of patching it locally.
pub struct AccountStore {
    repo: Arc<dyn AccountRepository>,
    pub accounts: Vec<Account>,
    pub total_accounts: u64,
    pub selected_account: Option<Account>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl AccountStore {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self {
            repo,
            accounts: Vec::new(),
            total_accounts: 0,
            selected_account: None,
            is_loading: false,
            error_message: None,
        }
    }

    pub async fn fetch_accounts(&mut self, page: u32, page_size: u32) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_all(page, page_size).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.accounts = page.items;
                    self.total_accounts = page.total_items;
                }
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not load the account list"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    /// Same contract as `fetch_accounts`, restricted to one group's members.
    pub async fn fetch_accounts_by_group(&mut self, group_id: &str, page: u32, page_size: u32) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_all_by_group(group_id, page, page_size).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.accounts = page.items;
                    self.total_accounts = page.total_items;
                }
                _ => {
                    self.error_message = Some(message_or(
                        &response.message,
                        "could not load the group's accounts",
                    ))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn fetch_total_accounts(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_total().await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(total)) => self.total_accounts = total,
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not get the account total"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn fetch_user_information(&mut self, username: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_user_information(username).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(account)) => self.selected_account = Some(account),
                (_, _) => {
                    self.error_message =
                        Some(message_or(&response.message, "could not get user information"));
                    self.selected_account = None;
                }
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.selected_account = None;
            }
        }

        self.is_loading = false;
    }

    pub async fn add_account(&mut self, account: &AccountRequest) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.add(account).await {
            Ok(response) if response.is_success() => {
                self.fetch_accounts(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message = Some(message_or(&response.message, "adding the account failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn update_account(&mut self, account: &AccountRequest) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.update(account).await {
            Ok(response) if response.is_success() => {
                self.fetch_accounts(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message =
                    Some(message_or(&response.message, "updating the account failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn delete_account(&mut self, username: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.delete(username).await {
            Ok(response) if response.is_success() => {
                self.fetch_accounts(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message =
                    Some(message_or(&response.message, "deleting the account failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    /// Unlike a plain fetch, a failed or empty search clears the list.
    pub async fn search_accounts(&mut self, text_to_search: &str, page: u32, page_size: u32) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.search(text_to_search, page, page_size).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.accounts = page.items;
                    self.total_accounts = page.total_items;
                }
                _ => {
                    self.error_message = Some(message_or(&response.message, "no accounts found"));
                    self.accounts.clear();
                }
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.accounts.clear();
            }
        }

        self.is_loading = false;
    }
}
