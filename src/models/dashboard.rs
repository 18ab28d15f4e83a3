use serde::{Deserialize, Serialize};

use super::group::GroupTotal;
use super::roster::ClassTotal;

/// Aggregate counts shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "TotalAccounts", alias = "totalAccounts", default)]
    pub total_accounts: u64,
    #[serde(rename = "TotalGroups", alias = "totalGroups", default)]
    pub total_groups: u64,
    #[serde(rename = "TotalClasses", alias = "totalClasses", default)]
    pub total_classes: u64,
    #[serde(rename = "ClassWithStudentCounts", alias = "classWithStudentCounts", default)]
    pub class_with_student_counts: Vec<ClassTotal>,
    #[serde(rename = "TotalNewAccountInMonth", alias = "totalNewAccountInMonth", default)]
    pub total_new_account_in_month: u64,
    #[serde(
        rename = "PercentUpDownNewRegisterAccount",
        alias = "percentUpDownNewRegisterAccount",
        default
    )]
    pub percent_up_down_new_register_account: f64,
    #[serde(rename = "GroupsWithUserCounts", alias = "groupsWithUserCounts", default)]
    pub groups_with_user_counts: Vec<GroupTotal>,
}
