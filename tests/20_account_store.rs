use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use study_planner_admin::api::envelope::{Envelope, Page};
use study_planner_admin::error::ClientError;
use study_planner_admin::models::{Account, AccountRequest};
use study_planner_admin::repositories::AccountRepository;
use study_planner_admin::stores::AccountStore;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    GetAll { page: u32, page_size: u32 },
    Delete { username: String },
    Search { text: String, page: u32, page_size: u32 },
    GetUserInformation { username: String },
    Add { username: String },
}

/// Scripted account backend: list responses are consumed in order, so a
/// test can script "the fetch after the delete" separately from the first.
#[derive(Default)]
struct ScriptedAccountRepository {
    calls: Mutex<Vec<Call>>,
    list_responses: Mutex<VecDeque<Envelope<Page<Account>>>>,
    mutation_response: Mutex<Option<Envelope<bool>>>,
    profile_response: Mutex<Option<Envelope<Account>>>,
}

impl ScriptedAccountRepository {
    fn push_list(&self, response: Envelope<Page<Account>>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    fn set_mutation(&self, response: Envelope<bool>) {
        *self.mutation_response.lock().unwrap() = Some(response);
    }

    fn set_profile(&self, response: Envelope<Account>) {
        *self.profile_response.lock().unwrap() = Some(response);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_list(&self) -> Envelope<Page<Account>> {
        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Envelope::failure("no scripted list response"))
    }
}

fn account(username: &str) -> Account {
    Account {
        user_name: username.to_string(),
        full_name: format!("{} Example", username),
        email: format!("{}@example.test", username),
        parent_email: String::new(),
        group_id: "g1".to_string(),
        group_name: "Students".to_string(),
        created_at: String::new(),
    }
}

fn page_of(usernames: &[&str], total_items: u64) -> Envelope<Page<Account>> {
    let items: Vec<Account> = usernames.iter().map(|u| account(u)).collect();
    let page: Page<Account> = serde_json::from_value(serde_json::json!({
        "data": items,
        "totalItems": total_items,
    }))
    .expect("scripted page must decode");
    Envelope {
        success: true,
        message: String::new(),
        data: Some(page),
    }
}

fn ok(value: bool) -> Envelope<bool> {
    Envelope {
        success: true,
        message: String::new(),
        data: Some(value),
    }
}

#[async_trait]
impl AccountRepository for ScriptedAccountRepository {
    async fn get_all(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        self.record(Call::GetAll { page, page_size });
        Ok(self.next_list())
    }

    async fn get_total(&self) -> Result<Envelope<u64>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_user_information(
        &self,
        username: &str,
    ) -> Result<Envelope<Account>, ClientError> {
        self.record(Call::GetUserInformation {
            username: username.to_string(),
        });
        Ok(self
            .profile_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Envelope::failure("not scripted")))
    }

    async fn add(&self, account: &AccountRequest) -> Result<Envelope<bool>, ClientError> {
        self.record(Call::Add {
            username: account.user_name.clone(),
        });
        Ok(self
            .mutation_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Envelope::failure("not scripted")))
    }

    async fn update(&self, _account: &AccountRequest) -> Result<Envelope<bool>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn delete(&self, username: &str) -> Result<Envelope<bool>, ClientError> {
        self.record(Call::Delete {
            username: username.to_string(),
        });
        Ok(self
            .mutation_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Envelope::failure("not scripted")))
    }

    async fn get_all_by_group(
        &self,
        _group_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        self.record(Call::GetAll { page, page_size });
        Ok(self.next_list())
    }

    async fn search(
        &self,
        text_to_search: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        self.record(Call::Search {
            text: text_to_search.to_string(),
            page,
            page_size,
        });
        Ok(self.next_list())
    }
}

fn store_with(repo: Arc<ScriptedAccountRepository>) -> AccountStore {
    AccountStore::new(repo)
}

#[tokio::test]
async fn fetch_replaces_the_page_and_keeps_the_grand_total() {
    let repo = Arc::new(ScriptedAccountRepository::default());
    repo.push_list(page_of(&["alice", "bob"], 12));
    let mut store = store_with(repo.clone());

    store.fetch_accounts(2, 5).await;

    assert!(store.error_message.is_none());
    assert!(!store.is_loading);
    assert_eq!(store.accounts.len(), 2);
    // the total reflects the whole collection, not the page
    assert_eq!(store.total_accounts, 12);
    assert_eq!(repo.calls(), vec![Call::GetAll { page: 2, page_size: 5 }]);
}

#[tokio::test]
async fn failed_fetch_sets_the_message_and_keeps_the_old_page() {
    let repo = Arc::new(ScriptedAccountRepository::default());
    repo.push_list(page_of(&["alice"], 1));
    repo.push_list(Envelope::failure("backend fell over"));
    let mut store = store_with(repo);

    store.fetch_accounts(1, 10).await;
    assert_eq!(store.accounts.len(), 1);

    store.fetch_accounts(1, 10).await;

    assert_eq!(store.error_message.as_deref(), Some("backend fell over"));
    // the previously loaded page survives the failure
    assert_eq!(store.accounts.len(), 1);
    assert!(!store.is_loading);
}

#[tokio::test]
async fn failed_fetch_without_a_message_gets_a_fallback() {
    let repo = Arc::new(ScriptedAccountRepository::default());
    repo.push_list(Envelope::failure(""));
    let mut store = store_with(repo);

    store.fetch_accounts(1, 10).await;

    assert!(store.error_message.is_some());
    assert_ne!(store.error_message.as_deref(), Some(""));
}

#[tokio::test]
async fn successful_delete_refetches_the_first_default_page() {
    let repo = Arc::new(ScriptedAccountRepository::default());
    repo.set_mutation(ok(true));
    repo.push_list(page_of(&["bob"], 1));
    let mut store = store_with(repo.clone());

    store.delete_account("alice").await;

    assert!(store.error_message.is_none());
    assert_eq!(
        repo.calls(),
        vec![
            Call::Delete { username: "alice".to_string() },
            Call::GetAll { page: 1, page_size: 10 },
        ]
    );
    assert_eq!(store.accounts.len(), 1);
    assert_eq!(store.accounts[0].user_name, "bob");
}

#[tokio::test]
async fn failed_mutation_does_not_refetch() {
    let repo = Arc::new(ScriptedAccountRepository::default());
    repo.set_mutation(Envelope::failure("username already taken"));
    let mut store = store_with(repo.clone());

    let request = AccountRequest {
        user_name: "alice".to_string(),
        password: Some("pw".to_string()),
        full_name: "Alice".to_string(),
        email: "alice@example.test".to_string(),
        parent_email: String::new(),
        group_id: "g1".to_string(),
    };
    store.add_account(&request).await;

    assert_eq!(store.error_message.as_deref(), Some("username already taken"));
    assert_eq!(repo.calls(), vec![Call::Add { username: "alice".to_string() }]);
}

#[tokio::test]
async fn failed_search_clears_the_list() {
    let repo = Arc::new(ScriptedAccountRepository::default());
    repo.push_list(page_of(&["alice", "bob"], 2));
    repo.push_list(Envelope::failure("nothing matched"));
    let mut store = store_with(repo);

    store.fetch_accounts(1, 10).await;
    assert_eq!(store.accounts.len(), 2);

    store.search_accounts("zzz", 1, 10).await;

    assert_eq!(store.error_message.as_deref(), Some("nothing matched"));
    // search failure empties the list, unlike a plain fetch failure
    assert!(store.accounts.is_empty());
}

#[tokio::test]
async fn successful_search_replaces_the_list() {
    let repo = Arc::new(ScriptedAccountRepository::default());
    repo.push_list(page_of(&["carol"], 1));
    let mut store = store_with(repo.clone());

    store.search_accounts("car", 2, 5).await;

    assert!(store.error_message.is_none());
    assert_eq!(store.accounts.len(), 1);
    assert_eq!(store.accounts[0].user_name, "carol");
    assert_eq!(
        repo.calls(),
        vec![Call::Search { text: "car".to_string(), page: 2, page_size: 5 }]
    );
}

#[tokio::test]
async fn profile_lookup_failure_clears_the_selection() {
    let repo = Arc::new(ScriptedAccountRepository::default());
    repo.set_profile(Envelope {
        success: true,
        message: String::new(),
        data: Some(account("alice")),
    });
    let mut store = store_with(repo.clone());

    store.fetch_user_information("alice").await;
    assert!(store.selected_account.is_some());

    repo.set_profile(Envelope::failure("user not found"));
    store.fetch_user_information("ghost").await;

    assert!(store.selected_account.is_none());
    assert_eq!(store.error_message.as_deref(), Some("user not found"));
}
