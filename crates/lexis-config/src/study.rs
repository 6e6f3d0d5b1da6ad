use serde::{Deserialize, Serialize};

fn default_prompt_meanings() -> usize {
    2
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StudyConfig {
    /// Meanings shown as the clue on each card
    #[serde(default = "default_prompt_meanings")]
    pub prompt_meanings: usize,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            prompt_meanings: default_prompt_meanings(),
        }
    }
}
