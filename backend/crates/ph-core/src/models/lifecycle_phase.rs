use serde::{Deserialize, Serialize};

/// Where a user record sits between creation and having a public identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    /// Created, never edited, no public code yet
    #[default]
    Provisional,
    /// At least one profile edit happened and a public code was issued
    Published,
}

impl LifecyclePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provisional => "provisional",
            Self::Published => "published",
        }
    }
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
