use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

fn default_show() -> bool {
    true
}

/// Display toggles for word tables and study cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_show")]
    pub show_word: bool,
    #[serde(default = "default_show")]
    pub show_vietnamese: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_word: default_show(),
            show_vietnamese: default_show(),
        }
    }
}

impl Preferences {
    /// Stored preferences, defaults if nothing was saved yet
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
