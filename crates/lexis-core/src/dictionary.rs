use std::fmt;

use crate::error::SourceError;
use crate::types::Meaning;

/// Pronunciation variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Uk,
    Us,
}

impl Accent {
    /// Value the upstream expects in its `accent` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Uk => "uk",
            Accent::Us => "us",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where word definitions come from.
///
/// The fetch half talks to the network, the parse half turns the fetched
/// page into fields. Parsing never fails: missing markup degrades to empty
/// values.
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Fetch the definition page for a word
    async fn fetch_definition_page(&self, word: &str) -> Result<String, SourceError>;

    /// Look up the pronunciation audio URL for a word, `None` if the source has none
    async fn fetch_sound_url(&self, accent: Accent, word: &str)
    -> Result<Option<String>, SourceError>;

    /// Phonetic transcription, empty if not found
    fn parse_transcription(&self, html: &str) -> String;

    /// Part-of-speech groups in document order, empty if not found
    fn parse_meanings(&self, html: &str) -> Vec<Meaning>;

    /// Source name for logs
    fn name(&self) -> &str {
        "unknown"
    }
}
