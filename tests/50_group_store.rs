use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use study_planner_admin::api::envelope::{Envelope, Page};
use study_planner_admin::error::ClientError;
use study_planner_admin::models::{Function, Group, GroupFunction, GroupRequest};
use study_planner_admin::repositories::GroupRepository;
use study_planner_admin::stores::GroupStore;

struct ScriptedGroupRepository {
    group_count: Mutex<Option<Envelope<u64>>>,
    user_count: Mutex<Option<Envelope<u64>>>,
}

impl ScriptedGroupRepository {
    fn new() -> Self {
        Self {
            group_count: Mutex::new(None),
            user_count: Mutex::new(None),
        }
    }

    fn set_group_count(&self, response: Envelope<u64>) {
        *self.group_count.lock().unwrap() = Some(response);
    }

    fn set_user_count(&self, response: Envelope<u64>) {
        *self.user_count.lock().unwrap() = Some(response);
    }
}

fn ok_count(total: u64) -> Envelope<u64> {
    Envelope {
        success: true,
        message: String::new(),
        data: Some(total),
    }
}

#[async_trait]
impl GroupRepository for ScriptedGroupRepository {
    async fn add(&self, _group: &GroupRequest) -> Result<Envelope<bool>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_all(
        &self,
        _page: u32,
        _page_size: u32,
    ) -> Result<Envelope<Page<Group>>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_all_functions(&self) -> Result<Envelope<Vec<Function>>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_group_functions(
        &self,
        _group_id: &str,
    ) -> Result<Envelope<Vec<GroupFunction>>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn delete(&self, _group_id: &str) -> Result<Envelope<bool>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn update(&self, _group: &GroupRequest) -> Result<Envelope<bool>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn search(
        &self,
        _text_to_search: &str,
        _page: u32,
        _page_size: u32,
    ) -> Result<Envelope<Page<Group>>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_by_id(&self, _group_id: &str) -> Result<Envelope<Group>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_total_users(&self) -> Result<Envelope<u64>, ClientError> {
        Ok(self
            .user_count
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Envelope::failure("not scripted")))
    }

    async fn get_total_group_count(&self) -> Result<Envelope<u64>, ClientError> {
        Ok(self
            .group_count
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Envelope::failure("not scripted")))
    }
}

#[tokio::test]
async fn total_groups_comes_from_its_own_endpoint() {
    let repo = Arc::new(ScriptedGroupRepository::new());
    repo.set_group_count(ok_count(37));
    let mut store = GroupStore::new(repo);

    store.fetch_total_groups().await;

    assert!(store.error_message.is_none());
    assert_eq!(store.total_groups, 37);
    assert!(!store.is_loading);
}

#[tokio::test]
async fn failed_group_count_keeps_the_previous_total() {
    let repo = Arc::new(ScriptedGroupRepository::new());
    repo.set_group_count(ok_count(37));
    let mut store = GroupStore::new(repo.clone());

    store.fetch_total_groups().await;
    assert_eq!(store.total_groups, 37);

    repo.set_group_count(Envelope::failure("count unavailable"));
    store.fetch_total_groups().await;

    assert_eq!(store.error_message.as_deref(), Some("count unavailable"));
    assert_eq!(store.total_groups, 37);
}

#[tokio::test]
async fn user_and_group_totals_are_independent() {
    let repo = Arc::new(ScriptedGroupRepository::new());
    repo.set_group_count(ok_count(4));
    repo.set_user_count(ok_count(120));
    let mut store = GroupStore::new(repo);

    store.fetch_total_groups().await;
    store.fetch_total_users().await;

    assert_eq!(store.total_groups, 4);
    assert_eq!(store.total_users, 120);
}
