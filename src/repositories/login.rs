use async_trait::async_trait;

use crate::api::envelope::Envelope;
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{LoginRequest, LoginResponse};

/// Authentication against `/Login/Authentication`.
///
/// Unlike the resource repositories, login raises failures as errors: there
/// is no prior list state to preserve, and the session needs to distinguish
/// "bad credentials" from "no response".
#[async_trait]
pub trait LoginRepository: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;
}

pub struct HttpLoginRepository {
    api: ApiClient,
}

impl HttpLoginRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl LoginRepository for HttpLoginRepository {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let body = self.api.post("/Login/Authentication", request).await?;
        let envelope: Envelope<LoginResponse> = Envelope::from_value(body)?;

        if !envelope.is_success() {
            let message = if envelope.message.is_empty() {
                "login failed".to_string()
            } else {
                envelope.message
            };
            return Err(ClientError::EnvelopeFailure(message));
        }

        envelope
            .data
            .ok_or_else(|| ClientError::EnvelopeFailure("login response carried no token".to_string()))
    }
}
