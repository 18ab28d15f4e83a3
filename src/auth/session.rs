use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::auth::{decode_token_claims, parse_permissions, Permission};
use crate::error::ClientError;
use crate::models::{Account, LoginRequest};
use crate::repositories::{AccountRepository, LoginRepository};
use crate::storage::CredentialStore;

/// Process-wide session: the bearer token, the identity fields derived from
/// its payload, and the normalized permission list.
///
/// The token is never verified client-side; whatever decodes is trusted
/// until its `exp` claim says otherwise. Initialized once at application
/// start (`load_from_storage`) and cleared only by `logout`.
pub struct Session {
    login_repo: Arc<dyn LoginRepository>,
    account_repo: Arc<dyn AccountRepository>,
    store: CredentialStore,

    pub token: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub permissions: Vec<Permission>,
    /// Expiry as epoch seconds; 0 means "no valid expiry", which the
    /// predicates treat as already expired.
    pub expires_at: i64,
    pub user_info: Option<Account>,
    pub error_message: Option<String>,
    pub is_loading: bool,
}

impl Session {
    pub fn new(
        login_repo: Arc<dyn LoginRepository>,
        account_repo: Arc<dyn AccountRepository>,
        store: CredentialStore,
    ) -> Self {
        Self {
            login_repo,
            account_repo,
            store,
            token: None,
            username: None,
            full_name: None,
            role: None,
            permissions: Vec::new(),
            expires_at: 0,
            user_info: None,
            error_message: None,
            is_loading: false,
        }
    }

    /// Authenticates and derives the whole session from the returned token.
    /// On failure the error message is recorded and every prior field is
    /// left untouched apart from the loading flag.
    pub async fn login(&mut self, username: &str, password: &str) {
        self.is_loading = true;
        self.error_message = None;

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        match self.login_repo.login(&request).await {
            Ok(response) => {
                self.token = Some(response.token.clone());
                self.username = Some(username.to_string());

                if let Some(claims) = decode_token_claims(&response.token) {
                    self.full_name = claim_string(&claims, "unique_name");
                    self.role = claim_string(&claims, "role");
                    self.permissions = parse_permissions(claims.get("Permission"));
                    self.expires_at = claim_epoch(&claims, "exp");
                }

                if let Err(e) = self.store.save(&response.token, username) {
                    tracing::warn!("failed to persist session: {}", e);
                }

                self.fetch_user_info().await;
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }

        self.is_loading = false;
    }

    /// Follow-up profile fetch after login. Failures are silently ignored;
    /// the session is already established.
    pub async fn fetch_user_info(&mut self) {
        let Some(username) = self.username.clone() else {
            return;
        };
        if let Ok(envelope) = self.account_repo.get_user_information(&username).await {
            if envelope.is_success() {
                if let Some(account) = envelope.data {
                    self.user_info = Some(account);
                }
            }
        }
    }

    /// Clears every session field and removes both persisted entries.
    /// No network call.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.token = None;
        self.username = None;
        self.full_name = None;
        self.role = None;
        self.permissions.clear();
        self.expires_at = 0;
        self.user_info = None;
        self.error_message = None;
        self.store.clear()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && !self.is_token_expired()
    }

    pub fn is_token_expired(&self) -> bool {
        if self.expires_at == 0 {
            return true;
        }
        Utc::now().timestamp() >= self.expires_at
    }

    pub fn has_permission(&self, capability_id: &str) -> bool {
        self.permissions.iter().any(|p| p.id == capability_id)
    }

    /// Read-only flag of the first matching grant; false when none match.
    /// Duplicate grants are not deduplicated, so first-match wins here.
    pub fn is_read_only(&self, capability_id: &str) -> bool {
        self.permissions
            .iter()
            .find(|p| p.id == capability_id)
            .map(|p| p.read_only)
            .unwrap_or(false)
    }

    /// Re-derives the session from the persisted token at startup, without
    /// contacting the server. A stale or tampered token is accepted until
    /// its expiry check fails.
    pub fn load_from_storage(&mut self) {
        let Some(token) = self.store.token() else {
            return;
        };
        self.token = Some(token.clone());
        if let Some(claims) = decode_token_claims(&token) {
            self.username = claim_string(&claims, "nameid");
            self.full_name = claim_string(&claims, "unique_name");
            self.role = claim_string(&claims, "role");
            self.permissions = parse_permissions(claims.get("Permission"));
            self.expires_at = claim_epoch(&claims, "exp");
        }
    }
}

fn claim_string(claims: &Value, name: &str) -> Option<String> {
    claims.get(name).and_then(Value::as_str).map(str::to_string)
}

fn claim_epoch(claims: &Value, name: &str) -> i64 {
    match claims.get(name) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}
