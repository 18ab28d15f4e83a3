use std::sync::Arc;

use super::{message_or, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::{ClassInfo, ClassRequest};
use crate::repositories::ClassRepository;

/// Paged-list state for class management.
pub struct ClassStore {
    repo: Arc<dyn ClassRepository>,
    pub classes: Vec<ClassInfo>,
    pub total_classes: u64,
    pub selected_class: Option<ClassInfo>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl ClassStore {
    pub fn new(repo: Arc<dyn ClassRepository>) -> Self {
        Self {
            repo,
            classes: Vec::new(),
            total_classes: 0,
            selected_class: None,
            is_loading: false,
            error_message: None,
        }
    }

    pub async fn fetch_classes(&mut self, page: u32, page_size: u32) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_all(page, page_size).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.classes = page.items;
                    self.total_classes = page.total_items;
                }
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not load the class list"))
                }
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn fetch_class(&mut self, class_id: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.get_by_id(class_id).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(class)) => self.selected_class = Some(class),
                _ => {
                    self.error_message =
                        Some(message_or(&response.message, "could not get the class"));
                    self.selected_class = None;
                }
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.selected_class = None;
            }
        }

        self.is_loading = false;
    }

    pub async fn add_class(&mut self, class: &ClassRequest) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.add(class).await {
            Ok(response) if response.is_success() => {
                self.fetch_classes(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message = Some(message_or(&response.message, "adding the class failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn update_class(&mut self, class: &ClassRequest) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.update(class).await {
            Ok(response) if response.is_success() => {
                self.fetch_classes(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message = Some(message_or(&response.message, "updating the class failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn delete_class(&mut self, class_id: &str) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.delete(class_id).await {
            Ok(response) if response.is_success() => {
                self.fetch_classes(DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await;
            }
            Ok(response) => {
                self.error_message = Some(message_or(&response.message, "deleting the class failed"))
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }

        self.is_loading = false;
    }

    pub async fn search_classes(&mut self, text_to_search: &str, page: u32, page_size: u32) {
        self.is_loading = true;
        self.error_message = None;

        match self.repo.search(text_to_search, page, page_size).await {
            Ok(response) => match (response.is_success(), response.data) {
                (true, Some(page)) => {
                    self.classes = page.items;
                    self.total_classes = page.total_items;
                }
                _ => {
                    self.error_message = Some(message_or(&response.message, "no classes found"));
                    self.classes.clear();
                }
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.classes.clear();
            }
        }

        self.is_loading = false;
    }
}
