use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::storage::StorageConfig;
use self::study::StudyConfig;

pub mod dictionary;
pub mod storage;
pub mod study;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub storage: StorageConfig,
    pub study: StudyConfig,
}

impl Config {
    /// Defaults overridden by `LEXIS_*` environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::new`] but reads variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(base_url) = lookup("LEXIS_DICT_BASE_URL") {
            config.dictionary.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(timeout) = lookup("LEXIS_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            config.dictionary.timeout_seconds = timeout;
        }

        if let Some(user_agent) = lookup("LEXIS_USER_AGENT") {
            config.dictionary.user_agent = user_agent;
        }

        if let Some(max) = lookup("LEXIS_MAX_IN_FLIGHT").and_then(|v| v.parse().ok()) {
            config.dictionary.max_in_flight = max;
        }

        if let Some(dir) = lookup("LEXIS_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }

        if let Some(count) = lookup("LEXIS_STUDY_PROMPT_MEANINGS").and_then(|v| v.parse().ok()) {
            config.study.prompt_meanings = count;
        }

        config
    }
}
