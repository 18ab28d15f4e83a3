pub mod envelope;

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config;
use crate::error::ClientError;
use crate::storage::CredentialStore;

/// Thin wrapper over a shared `reqwest::Client` that knows the backend base
/// URL and attaches the stored bearer token to every call.
///
/// The token is re-read from the credential store on each request rather
/// than cached, so a login in the same process (or a concurrent one) is
/// picked up immediately.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: CredentialStore,
}

impl ApiClient {
    pub fn from_config(store: CredentialStore) -> Result<Self, ClientError> {
        let cfg = config::config();
        Self::new(
            &cfg.api.base_url,
            Duration::from_secs(cfg.api.timeout_secs),
            store,
        )
    }

    pub fn new(
        base_url: &str,
        timeout: Duration,
        store: CredentialStore,
    ) -> Result<Self, ClientError> {
        // Validate eagerly so a typo fails at construction, not mid-request
        Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ClientError> {
        self.send(Method::GET, path, query, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ClientError> {
        self.send(Method::DELETE, path, query, None::<&()>).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        if config::config().api.enable_request_logging {
            tracing::debug!(%method, %url, "sending request");
        }

        let mut request: RequestBuilder = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.store.token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(transport_message(&e)))?;

        let status = response.status();
        let raw = response.bytes().await.unwrap_or_default();

        if !status.is_success() {
            // Prefer the server's own message over a generic status line
            let message = serde_json::from_slice::<Value>(&raw)
                .ok()
                .and_then(|body| {
                    ["Message", "message"]
                        .iter()
                        .find_map(|k| body.get(*k).and_then(Value::as_str).map(str::to_string))
                })
                .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
            tracing::warn!(%url, status = status.as_u16(), "request failed: {}", message);
            return Err(ClientError::Transport(message));
        }

        // An empty or non-JSON success body unwraps as Null, which the
        // envelope layer raises as the fatal missing-response fault.
        Ok(serde_json::from_slice(&raw).unwrap_or(Value::Null))
    }
}

/// Faults where no response arrived at all collapse to the NETWORK_ERROR
/// sentinel rather than leaking a transport-library message.
fn transport_message(err: &reqwest::Error) -> String {
    if err.status().is_none() {
        ClientError::NETWORK_ERROR.to_string()
    } else {
        err.to_string()
    }
}
