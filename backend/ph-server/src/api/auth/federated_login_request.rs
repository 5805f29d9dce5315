use serde::Deserialize;

/// Sign-in asserted by an external identity provider.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedLoginRequest {
    #[serde(default)]
    pub name: Option<String>,

    pub email: String,

    /// Provider-issued subject id; stored only when a new record is created
    pub google_id: String,
}
