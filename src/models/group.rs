use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "GroupId", alias = "groupId", default)]
    pub group_id: String,
    #[serde(rename = "GroupName", alias = "groupName", default)]
    pub group_name: String,
    #[serde(rename = "GroupDescription", alias = "groupDescription", default)]
    pub group_description: String,
}

/// Payload for group create/update calls, including the full capability
/// grant matrix for the group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRequest {
    #[serde(rename = "GroupId")]
    pub group_id: String,
    #[serde(rename = "GroupName")]
    pub group_name: String,
    #[serde(rename = "GroupDescription")]
    pub group_description: String,
    #[serde(rename = "GroupFunctions", default)]
    pub group_functions: Vec<GroupFunction>,
}

/// A group together with its member count, as used on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    #[serde(rename = "GroupId", alias = "groupId", default)]
    pub group_id: String,
    #[serde(rename = "GroupName", alias = "groupName", default)]
    pub group_name: String,
    #[serde(rename = "TotalUser", alias = "totalUser", default)]
    pub total_user: u64,
}

/// A permission-gated UI feature the backend knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(rename = "FunctionId", alias = "functionId", default)]
    pub function_id: String,
    #[serde(rename = "FunctionName", alias = "functionName", default)]
    pub function_name: String,
    #[serde(rename = "IsEnable", alias = "isEnable", default)]
    pub is_enable: bool,
    #[serde(rename = "IsReadOnly", alias = "isReadOnly", default)]
    pub is_read_only: bool,
}

/// The grant of one function to one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupFunction {
    #[serde(rename = "GroupId", alias = "groupId", default)]
    pub group_id: String,
    #[serde(rename = "FunctionId", alias = "functionId", default)]
    pub function_id: String,
    #[serde(rename = "FunctionName", alias = "functionName", default)]
    pub function_name: String,
    #[serde(rename = "IsEnable", alias = "isEnable", default)]
    pub is_enable: bool,
    #[serde(rename = "IsReadOnly", alias = "isReadOnly", default)]
    pub is_read_only: bool,
}
