use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Shared secret expected in the `Authorize` header. No key, no check.
    #[serde(default)]
    pub api_key: Option<String>,
}
