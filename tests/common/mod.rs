#![allow(dead_code)]

use std::fs;
use std::sync::Mutex;

use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use study_planner_admin::api::envelope::{Envelope, Page};
use study_planner_admin::error::ClientError;
use study_planner_admin::models::{Account, AccountRequest, LoginRequest, LoginResponse};
use study_planner_admin::repositories::{AccountRepository, LoginRepository};
use study_planner_admin::storage::CredentialStore;

/// Mints a real signed compact token carrying the given claims. The client
/// never verifies signatures, so any secret works.
pub fn mint_token(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("token encoding cannot fail for JSON claims")
}

/// The claim set the backend issues for an admin, expiring at the given
/// epoch second.
pub fn admin_claims(username: &str, exp: i64) -> Value {
    json!({
        "nameid": username,
        "unique_name": "Alice Administrator",
        "role": "Admin",
        "Permission": [
            { "id": "ucAccountManagement", "ro": false },
            { "id": "ucGroupManagement", "ro": true },
        ],
        "exp": exp,
    })
}

/// A credential store rooted in a fresh temp directory, so tests never see
/// each other's persisted entries.
pub fn temp_store(name: &str) -> CredentialStore {
    let dir = std::env::temp_dir().join(format!(
        "planner-test-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    CredentialStore::open(dir).expect("temp dir must be creatable")
}

/// Scripted login backend: a fixed token on success, or a fixed refusal.
pub struct MockLoginRepository {
    token: Option<String>,
    pub requests: Mutex<Vec<LoginRequest>>,
}

impl MockLoginRepository {
    pub fn succeeding(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn refusing() -> Self {
        Self {
            token: None,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LoginRepository for MockLoginRepository {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.token {
            Some(token) => Ok(LoginResponse {
                token: token.clone(),
                username: request.username.clone(),
                group_id: 1,
            }),
            None => Err(ClientError::EnvelopeFailure(
                "Invalid username or password".to_string(),
            )),
        }
    }
}

/// Account backend stub for session tests: only the profile lookup is
/// scripted, everything else reports failure.
pub struct MockAccountRepository {
    profile: Option<Account>,
}

impl MockAccountRepository {
    pub fn empty() -> Self {
        Self { profile: None }
    }

    pub fn with_profile(profile: Account) -> Self {
        Self {
            profile: Some(profile),
        }
    }
}

pub fn sample_account(username: &str) -> Account {
    Account {
        user_name: username.to_string(),
        full_name: "Alice Administrator".to_string(),
        email: "alice@example.test".to_string(),
        parent_email: String::new(),
        group_id: "g-admin".to_string(),
        group_name: "Administrators".to_string(),
        created_at: "2024-01-01T00:00:00".to_string(),
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn get_all(
        &self,
        _page: u32,
        _page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_total(&self) -> Result<Envelope<u64>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_user_information(
        &self,
        _username: &str,
    ) -> Result<Envelope<Account>, ClientError> {
        match &self.profile {
            Some(account) => Ok(Envelope {
                success: true,
                message: String::new(),
                data: Some(account.clone()),
            }),
            None => Ok(Envelope::failure("user not found")),
        }
    }

    async fn add(&self, _account: &AccountRequest) -> Result<Envelope<bool>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn update(&self, _account: &AccountRequest) -> Result<Envelope<bool>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn delete(&self, _username: &str) -> Result<Envelope<bool>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn get_all_by_group(
        &self,
        _group_id: &str,
        _page: u32,
        _page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }

    async fn search(
        &self,
        _text_to_search: &str,
        _page: u32,
        _page_size: u32,
    ) -> Result<Envelope<Page<Account>>, ClientError> {
        Ok(Envelope::failure("not scripted"))
    }
}
