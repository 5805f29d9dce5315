use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name (optional)
    #[serde(default)]
    pub name: Option<String>,

    pub email: String,

    pub password: String,
}
