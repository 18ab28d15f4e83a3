use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Payload of a successful `/Login/Authentication` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "Token", alias = "token", default)]
    pub token: String,
    #[serde(rename = "Username", alias = "username", default)]
    pub username: String,
    #[serde(rename = "GroupId", alias = "groupId", default)]
    pub group_id: i64,
}
