use std::sync::Arc;

use lexis_core::dictionary::{Accent, DefinitionSource};
use lexis_core::error::{EMPTY_INPUT_MESSAGE, GENERIC_FAILURE_MESSAGE, SourceError};
use lexis_core::state::LookupContext;
use lexis_core::types::{ExtractResponse, Meaning};
use lexis_store::HistoryStore;

use crate::controller::AppController;

/// Knows every word except "missing"; the page is the word itself
struct StubSource;

#[async_trait::async_trait]
impl DefinitionSource for StubSource {
    async fn fetch_definition_page(&self, word: &str) -> Result<String, SourceError> {
        if word == "missing" {
            return Err(SourceError::Status {
                status: 404,
                url: format!("stub://{word}"),
            });
        }
        Ok(word.to_string())
    }

    async fn fetch_sound_url(
        &self,
        accent: Accent,
        word: &str,
    ) -> Result<Option<String>, SourceError> {
        Ok(Some(format!("https://audio.example/{accent}/{word}.mp3")))
    }

    fn parse_transcription(&self, html: &str) -> String {
        format!("/{html}/")
    }

    fn parse_meanings(&self, html: &str) -> Vec<Meaning> {
        vec![Meaning {
            part_of_speech: "danh từ".to_string(),
            definitions: vec![format!("nghĩa của {html}")],
        }]
    }
}

fn controller(history: HistoryStore) -> AppController {
    AppController::new(LookupContext::new(Arc::new(StubSource)), history)
}

#[tokio::test]
async fn extraction_is_saved_and_shown_as_newest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut app = controller(HistoryStore::open(&path).unwrap());

    let view = app.extract_and_translate("Cat cat, missing dog-house!").await;
    assert_eq!(view.error, None);
    assert!(!view.no_words);
    let page = view.data.unwrap();
    let words: Vec<_> = page.record.output.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["cat", "dog house"]);
    assert_eq!(
        page.record.output[0].us_sound_url.as_deref(),
        Some("https://audio.example/us/cat.mp3")
    );
    assert!(!page.has_next_page);
    assert!(!page.has_previous_page);

    let reopened = HistoryStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.all()[0].input, "Cat cat, missing dog-house!");
}

#[tokio::test]
async fn blank_input_is_not_recorded() {
    let mut app = controller(HistoryStore::in_memory());

    let view = app.extract_and_translate("  ").await;
    assert_eq!(view.error.as_deref(), Some(EMPTY_INPUT_MESSAGE));
    assert!(view.data.is_none());
    assert!(app.history().is_empty());
}

#[tokio::test]
async fn empty_result_is_recorded_and_flagged() {
    let mut app = controller(HistoryStore::in_memory());

    let view = app.extract_and_translate("... !!!").await;
    assert!(view.no_words);
    assert_eq!(view.error, None);
    assert!(view.data.unwrap().record.output.is_empty());
}

#[tokio::test]
async fn error_response_keeps_current_page() {
    let mut app = controller(HistoryStore::in_memory());
    app.extract_and_translate("first").await;

    let view = app.add_record(ExtractResponse::failed("second", GENERIC_FAILURE_MESSAGE));
    assert_eq!(view.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    assert_eq!(view.input_text, "second");
    assert_eq!(view.data.unwrap().record.input, "first");
    assert_eq!(app.history().len(), 1);
}

#[tokio::test]
async fn pages_between_batches_and_clears() {
    let mut app = controller(HistoryStore::in_memory()).without_persistence();
    app.extract_and_translate("one").await;
    app.extract_and_translate("two").await;
    app.extract_and_translate("three").await;

    assert_eq!(app.current_page().unwrap().record.input, "three");
    assert_eq!(app.previous_page().unwrap().record.input, "two");
    assert_eq!(app.previous_page().unwrap().record.input, "one");
    assert!(app.previous_page().is_none());
    assert_eq!(app.next_page().unwrap().record.input, "two");

    let first = app.history()[0].id;
    assert_eq!(app.seek(first).unwrap().record.input, "one");
    assert_eq!(app.history()[0].output[0].phonetic_uk, "/one/");

    app.clear_history().unwrap();
    assert!(app.history().is_empty());
    assert!(app.current_page().is_none());
}
