use serde::{Deserialize, Serialize};

/// Account record as returned by the `/AccountManagement` endpoints.
///
/// The backend emits PascalCase but has drifted to camelCase on some
/// deployments, so every field carries an alias. Missing fields default to
/// empty rather than failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "UserName", alias = "userName", default)]
    pub user_name: String,
    #[serde(rename = "FullName", alias = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "Email", alias = "email", default)]
    pub email: String,
    #[serde(rename = "ParentEmail", alias = "parentEmail", default)]
    pub parent_email: String,
    #[serde(rename = "GroupId", alias = "groupId", default)]
    pub group_id: String,
    #[serde(rename = "GroupName", alias = "groupName", default)]
    pub group_name: String,
    #[serde(rename = "CreatedAt", alias = "createdAt", default)]
    pub created_at: String,
}

/// Payload for account create/update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRequest {
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "ParentEmail")]
    pub parent_email: String,
    #[serde(rename = "GroupId")]
    pub group_id: String,
}
