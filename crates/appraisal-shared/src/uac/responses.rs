use crate::token::AuthToken;

/// Body returned by the login endpoint on success
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: AuthToken,
    pub role: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Kept as raw json because only an explicit `false` revokes the capability
    #[serde(default)]
    pub can_edit_evaluation_requests: Option<serde_json::Value>,
    #[serde(default)]
    pub can_delete_evaluation_requests: Option<serde_json::Value>,
}
