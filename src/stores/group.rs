use std::sync::Arc;

use super::{message_or, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{Function, Group, GroupFunction, GroupRequest};
use crate::repositories::GroupRepository;

/// Paged-list state for group management, plus the function catalog used
/// when editing a group's capability grants.
pub struct GroupStore {
    repo: Arc<dyn GroupRepository>,
    pub groups: Vec<Group>,
    pub total_groups: u64,
    pub total_users: u64,
    pub selected_group: Option<Group>,
    pub functions: Vec<Function>,
    pub group_functions: Vec<GroupFunction>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl GroupStore {
    pub fn new(repo: Arc<dyn GroupRepository>) -> Self {
        Self {
            repo,
            groups: Vec::new(),
            total_groups: 0,
            total_users: 0,
            selected_group: None,
            functions: Vec::new(),
            group_functions: Vec::new(),
            is_loading: false,
            error_message: None,
        }
    }

    pub async fn fetch_groups(&mut self, page: u32, page_size: u32) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_all(page, page_size).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.groups = page.items;
                    self.total_groups = page.total_items;
                }
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not load the group list"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn fetch_group(&mut self, group_id: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_by_id(group_id).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(group)) => self.selected_group = Some(group),
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not get the group"));
                    self.selected_group = None;
                }
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.selected_group = None;
            }
        }

        self.is_loading = false;
    }

    /// Grand total of groups, independent of whatever page is loaded.
    pub async fn fetch_total_groups(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_total_group_count().await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(total)) => self.total_groups = total,
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not get the group count"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn fetch_total_users(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_total_users().await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(total)) => self.total_users = total,
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not get the user count"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    /// The catalog of all known functions, for grant editing.
    pub async fn fetch_functions(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_all_functions().await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(functions)) => self.functions = functions,
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not load the function list"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn fetch_group_functions(&mut self, group_id: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_group_functions(group_id).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(grants)) => self.group_functions = grants,
                _ => {
                    self.error_message = Some(message_or(
                        &response.message,
                        "could not load the group's functions",
                    ))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn add_group(&mut self, group: &GroupRequest) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.add(group).await {
            Ok(response) if response.is_success() => {
                self.fetch_groups(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message = Some(message_or(&response.message, "adding the group failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn update_group(&mut self, group: &GroupRequest) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.update(group).await {
            Ok(response) if response.is_success() => {
                self.fetch_groups(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message = Some(message_or(&response.message, "updating the group failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn delete_group(&mut self, group_id: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.delete(group_id).await {
            Ok(response) if response.is_success() => {
                self.fetch_groups(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message = Some(message_or(&response.message, "deleting the group failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn search_groups(&mut self, text_to_search: &str, page: u32, page_size: u32) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.search(text_to_search, page, page_size).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.groups = page.items;
                    self.total_groups = page.total_items;
                }
                _ => {
                    self.error_message = Some(message_or(&response.message, "no groups found"));
                    self.groups.clear();
                }
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.groups.clear();
            }
        }

        self.is_loading = false;
    }
}
