use serde::{Deserialize, Serialize};

/// Process environment mode
///
/// Development is the diagnostic mode: error responses carry the raw
/// trace of the fault. Production never exposes it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    /// Diagnostic mode
    #[serde(alias = "dev")]
    #[strum(to_string = "development", serialize = "dev")]
    Development,
    /// Production mode
    #[default]
    #[serde(alias = "prod")]
    #[strum(to_string = "production", serialize = "prod")]
    Production,
}

impl Environment {
    /// Whether raw fault traces may be exposed to clients
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Development)
    }
}
