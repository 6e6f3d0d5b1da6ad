use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://dict.laban.vn".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("lexis/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_max_in_flight() -> usize {
    1
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Root of the dictionary site, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Words looked up at once, 1 keeps lookups sequential
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            max_in_flight: default_max_in_flight(),
        }
    }
}
