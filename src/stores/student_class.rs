use std::sync::Arc;

use super::{message_or, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{StudentClass, StudentClassRequest};
use crate::repositories::StudentClassRepository;

/// Paged-list state for one class's student roster. The store itself is
/// not bound to a class; every operation names the class it acts on, and a
/// mutation re-fetches the roster of the class it just changed.
pub struct StudentClassStore {
    repo: Arc<dyn StudentClassRepository>,
    pub entries: Vec<StudentClass>,
    pub total_entries: u64,
    pub selected_entry: Option<StudentClass>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl StudentClassStore {
    pub fn new(repo: Arc<dyn StudentClassRepository>) -> Self {
        Self {
            repo,
            entries: Vec::new(),
            total_entries: 0,
            selected_entry: None,
            is_loading: false,
            error_message: None,
        }
    }

    pub async fn fetch_entries(&mut self, class_id: &str, page: u32, page_size: u32) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_all(class_id, page, page_size).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.entries = page.items;
                    self.total_entries = page.total_items;
                }
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not load the student roster"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn fetch_entry(&mut self, class_id: &str, student_id: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_by_ids(class_id, student_id).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(entry)) => self.selected_entry = Some(entry),
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not get the roster entry"));
                    self.selected_entry = None;
                }
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.selected_entry = None;
            }
        }

        self.is_loading = false;
    }

    pub async fn add_entry(&mut self, entry: &StudentClassRequest) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.add(entry).await {
            Ok(response) if response.is_success() => {
                self.fetch_entries(&entry.class_id, DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
                    .await;
            }
            Ok(response) => {
                self.error_message =
                    Some(message_or(&response.message, "adding the student failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn update_entry(&mut self, entry: &StudentClassRequest) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.update(entry).await {
            Ok(response) if response.is_success() => {
                self.fetch_entries(&entry.class_id, DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
                    .await;
            }
            Ok(response) => {
                self.error_message =
                    Some(message_or(&response.message, "updating the student failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn delete_entry(&mut self, class_id: &str, student_id: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.delete(class_id, student_id).await {
            Ok(response) if response.is_success() => {
                self.fetch_entries(class_id, DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message =
                    Some(message_or(&response.message, "removing the student failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn search_entries(
        &mut self,
        class_id: &str,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) {
        self.is_loading = true;
        self.error_message = None;

        match self
            .repo
            .search(class_id, text_to_search, page, page_size)
            .await
        {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.entries = page.items;
                    self.total_entries = page.total_items;
                }
                _ => {
                    self.error_message = Some(message_or(&response.message, "no students found"));
                    self.entries.clear();
                }
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.entries.clear();
            }
        }

        self.is_loading = false;
    }
}
