use std::time::Duration;

use async_trait::async_trait;
use lexis_core::dictionary::{Accent, DefinitionSource};
use lexis_core::error::SourceError;
use lexis_core::types::Meaning;

use crate::client::LabanClient;
use crate::parser;

/// English-Vietnamese definitions from dict.laban.vn
#[derive(Clone)]
pub struct LabanSource {
    client: LabanClient,
}

impl LabanSource {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, SourceError> {
        Ok(Self {
            client: LabanClient::new(base_url, timeout, user_agent)?,
        })
    }
}

#[async_trait]
impl DefinitionSource for LabanSource {
    async fn fetch_definition_page(&self, word: &str) -> Result<String, SourceError> {
        self.client.fetch_definition_page(word).await
    }

    async fn fetch_sound_url(
        &self,
        accent: Accent,
        word: &str,
    ) -> Result<Option<String>, SourceError> {
        self.client.fetch_sound_url(accent, word).await
    }

    fn parse_transcription(&self, html: &str) -> String {
        parser::parse_transcription(html)
    }

    fn parse_meanings(&self, html: &str) -> Vec<Meaning> {
        parser::parse_meanings(html)
    }

    fn name(&self) -> &str {
        "laban"
    }
}
