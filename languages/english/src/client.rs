use std::time::Duration;

use lexis_core::dictionary::Accent;
use lexis_core::error::SourceError;
use serde::Deserialize;

/// HTTP client for dict.laban.vn
#[derive(Clone)]
pub struct LabanClient {
    client: reqwest::Client,
    base_url: String,
}

impl LabanClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// English-Vietnamese definition page for a word
    pub async fn fetch_definition_page(&self, word: &str) -> Result<String, SourceError> {
        let response = self.definition_request(word).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Pronunciation audio URL for a word, `None` when the site has none
    pub async fn fetch_sound_url(
        &self,
        accent: Accent,
        word: &str,
    ) -> Result<Option<String>, SourceError> {
        let response = self.sound_request(accent, word).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        decode_sound_envelope(&body)
    }

    fn definition_request(&self, word: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/find", self.base_url))
            .query(&[("type", "1"), ("query", word)])
    }

    fn sound_request(&self, accent: Accent, word: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/ajax/getsound", self.base_url))
            .query(&[("accent", accent.as_str()), ("word", word)])
    }
}

// {"error":0, "data":"https://stream-dict-laban.zdn.vn/uk/.../F/feel.mp3", "id":34586}
#[derive(Debug, Deserialize)]
struct SoundEnvelope {
    #[serde(default)]
    error: i64,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    id: Option<i64>,
}

fn decode_sound_envelope(body: &str) -> Result<Option<String>, SourceError> {
    let envelope: SoundEnvelope = serde_json::from_str(body)
        .map_err(|e| SourceError::Decode(format!("Failed to parse sound response: {e}")))?;

    tracing::trace!(
        "Sound envelope: error={} id={:?}",
        envelope.error,
        envelope.id
    );

    Ok(envelope
        .data
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty()))
}
