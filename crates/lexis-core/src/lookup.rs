use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::dictionary::{Accent, DefinitionSource};
use crate::error::{EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, LookupError, SourceError};
use crate::preprocess::tokenize;
use crate::state::{LookupContext, LookupMode};
use crate::types::{ExtractResponse, Word};

/// Tokenize `text` and look up every word.
///
/// A word whose definition page cannot be fetched is left out; the rest of
/// the batch carries on. Output follows token order in every mode.
pub async fn extract_and_translate(
    ctx: &LookupContext,
    text: &str,
) -> Result<Vec<Word>, LookupError> {
    let tokens = tokenize(text);
    tracing::info!(
        "Extracting {} distinct words via {} ({:?})",
        tokens.len(),
        ctx.source.name(),
        ctx.mode
    );

    let words = match ctx.mode {
        LookupMode::Sequential => lookup_sequential(ctx.source.as_ref(), tokens).await,
        LookupMode::Parallel { max_in_flight } => {
            lookup_parallel(Arc::clone(&ctx.source), tokens, max_in_flight).await?
        }
    };

    tracing::info!("Extracted {} words", words.len());
    Ok(words)
}

/// Validate input, run the extraction and wrap the outcome for display
pub async fn handle_extract_and_translate(ctx: &LookupContext, text: &str) -> ExtractResponse {
    if text.trim().is_empty() {
        return ExtractResponse::failed(text, EMPTY_INPUT_MESSAGE);
    }

    match extract_and_translate(ctx, text).await {
        Ok(words) => ExtractResponse::ok(text, words),
        Err(e) => {
            tracing::error!("Error extracting and translating words: {e}");
            ExtractResponse::failed(text, GENERIC_FAILURE_MESSAGE)
        }
    }
}

/// Full pipeline for one word. Only the definition page fetch can fail it.
pub async fn lookup_word(source: &dyn DefinitionSource, word: &str) -> Result<Word, SourceError> {
    let html = source.fetch_definition_page(word).await?;

    let transcription = source.parse_transcription(&html);
    if transcription.is_empty() {
        tracing::debug!("No transcription found for '{word}'");
    }

    let meanings = source.parse_meanings(&html);
    if meanings.is_empty() {
        tracing::debug!("No meanings found for '{word}'");
    }

    let (uk_sound_url, us_sound_url) = tokio::join!(
        sound_url(source, Accent::Uk, word),
        sound_url(source, Accent::Us, word)
    );

    Ok(Word {
        word: word.to_string(),
        meanings,
        phonetic_uk: transcription.clone(),
        phonetic_us: transcription,
        uk_sound_url,
        us_sound_url,
    })
}

/// Best-effort sound lookup, any failure or non-URL answer becomes `None`.
/// A valid URL is kept as the site sent it, minus surrounding whitespace.
async fn sound_url(source: &dyn DefinitionSource, accent: Accent, word: &str) -> Option<String> {
    match source.fetch_sound_url(accent, word).await {
        Ok(Some(raw)) => match url::Url::parse(raw.trim()) {
            Ok(_) => Some(raw.trim().to_string()),
            Err(e) => {
                tracing::warn!("Discarding {accent} sound URL for '{word}' ({raw:?}): {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Error fetching {accent} sound URL for word '{word}': {e}");
            None
        }
    }
}

async fn lookup_sequential(source: &dyn DefinitionSource, tokens: Vec<String>) -> Vec<Word> {
    let mut words = Vec::with_capacity(tokens.len());

    for token in tokens {
        match lookup_word(source, &token).await {
            Ok(word) => {
                tracing::debug!("Parsed word: {}", word.word);
                words.push(word);
            }
            Err(e) => tracing::warn!("Skipping '{token}': {e}"),
        }
    }

    words
}

async fn lookup_parallel(
    source: Arc<dyn DefinitionSource>,
    tokens: Vec<String>,
    max_in_flight: usize,
) -> Result<Vec<Word>, LookupError> {
    let permits = Arc::new(Semaphore::new(max_in_flight.max(1)));
    let mut tasks = JoinSet::new();

    for (index, token) in tokens.into_iter().enumerate() {
        let source = Arc::clone(&source);
        let permits = Arc::clone(&permits);

        tasks.spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .map_err(|e| LookupError::Batch(e.to_string()))?;

            let word = match lookup_word(source.as_ref(), &token).await {
                Ok(word) => Some(word),
                Err(e) => {
                    tracing::warn!("Skipping '{token}': {e}");
                    None
                }
            };
            Ok::<_, LookupError>((index, word))
        });
    }

    let mut slots = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (index, word) = joined.map_err(|e| LookupError::Batch(e.to_string()))??;
        if let Some(word) = word {
            slots.push((index, word));
        }
    }

    slots.sort_by_key(|(index, _)| *index);
    Ok(slots.into_iter().map(|(_, word)| word).collect())
}
