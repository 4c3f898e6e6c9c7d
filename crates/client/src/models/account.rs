//! Account information models.

use serde::{Deserialize, Serialize};

/// Response of `GET /v2/account`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountInfoResponse {
    pub data: AccountInfo,
    pub took: f64,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountInfo {
    pub name: String,
    pub user_count: u64,
    pub plan: Option<AccountPlan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountPlan {
    pub max_user_count: u64,
    pub name: String,
    pub is_yearly: bool,
}
