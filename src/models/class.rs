use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(rename = "ClassId", alias = "classId", default)]
    pub class_id: String,
    #[serde(rename = "ClassName", alias = "className", default)]
    pub class_name: String,
    #[serde(rename = "ClassDescription", alias = "classDescription", default)]
    pub class_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRequest {
    #[serde(rename = "ClassId")]
    pub class_id: String,
    #[serde(rename = "ClassName")]
    pub class_name: String,
    #[serde(rename = "ClassDescription")]
    pub class_description: String,
}
