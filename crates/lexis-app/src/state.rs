use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use lexis_config::Config;
use lexis_core::state::{LookupContext, LookupMode};
use lexis_lang_english::LabanSource;
use lexis_store::{HistoryStore, Preferences};

/// Settings for one CLI invocation, handed to whatever needs them
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Lookup context against the configured dictionary site.
    /// `max_in_flight` overrides the configured value when given.
    pub fn lookup_context(&self, max_in_flight: Option<usize>) -> anyhow::Result<LookupContext> {
        let dict = &self.config.dictionary;
        let source = LabanSource::new(
            &dict.base_url,
            Duration::from_secs(dict.timeout_seconds),
            &dict.user_agent,
        )
        .context("Failed to create dictionary client")?;

        let mode = LookupMode::with_max_in_flight(max_in_flight.unwrap_or(dict.max_in_flight));
        Ok(LookupContext::new(Arc::new(source)).with_mode(mode))
    }

    pub fn open_history(&self) -> anyhow::Result<HistoryStore> {
        let path = self.config.storage.history_path();
        HistoryStore::open(&path)
            .with_context(|| format!("Failed to load history from {}", path.display()))
    }

    pub fn load_preferences(&self) -> anyhow::Result<Preferences> {
        let path = self.config.storage.preferences_path();
        Preferences::load(&path)
            .with_context(|| format!("Failed to load preferences from {}", path.display()))
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> anyhow::Result<()> {
        let path = self.config.storage.preferences_path();
        preferences
            .save(&path)
            .with_context(|| format!("Failed to save preferences to {}", path.display()))
    }
}
