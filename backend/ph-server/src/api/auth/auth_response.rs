use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub user_id: String,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, user_id: Uuid) -> Self {
        Self {
            message: message.into(),
            user_id: user_id.to_string(),
        }
    }
}
