use lexis_core::error::GENERIC_FAILURE_MESSAGE;
use lexis_core::lookup::handle_extract_and_translate;
use lexis_core::state::LookupContext;
use lexis_core::types::ExtractResponse;
use lexis_store::{DataPage, ExtractionRecord, HistoryStore, Pager};
use uuid::Uuid;

/// What the front end shows after a submission or a paging action
#[derive(Debug)]
pub struct AppView<'a> {
    pub data: Option<DataPage<'a>>,
    pub error: Option<String>,
    pub input_text: String,
    /// Set when the submission finished but produced no words
    pub no_words: bool,
}

/// Ties extraction, history and paging together
pub struct AppController {
    ctx: LookupContext,
    history: HistoryStore,
    pager: Pager,
    persist: bool,
}

impl AppController {
    pub fn new(ctx: LookupContext, history: HistoryStore) -> Self {
        let pager = Pager::new(&history);
        Self {
            ctx,
            history,
            pager,
            persist: true,
        }
    }

    /// Keep new records in memory only
    pub fn without_persistence(mut self) -> Self {
        self.persist = false;
        self
    }

    /// Extract words from `input` and record the batch
    pub async fn extract_and_translate(&mut self, input: &str) -> AppView<'_> {
        let response = handle_extract_and_translate(&self.ctx, input).await;
        self.add_record(response)
    }

    /// Store a successful response as the newest record and show it.
    /// Errors leave history untouched and keep the current page.
    pub fn add_record(&mut self, response: ExtractResponse) -> AppView<'_> {
        let input_text = response.input_text.clone();
        let no_words = response.is_empty_result();
        let error = response.error.clone();

        let Some(batch) = response.into_batch() else {
            return AppView {
                data: self.pager.current_page(&self.history),
                error,
                input_text,
                no_words: false,
            };
        };

        self.history.add(batch);
        if self.persist {
            if let Err(e) = self.history.save() {
                tracing::error!("Error saving history: {e}");
                return AppView {
                    data: None,
                    error: Some(GENERIC_FAILURE_MESSAGE.to_string()),
                    input_text,
                    no_words,
                };
            }
        }

        self.pager.reset(&self.history);
        AppView {
            data: self.pager.current_page(&self.history),
            error: None,
            input_text,
            no_words,
        }
    }

    pub fn history(&self) -> &[ExtractionRecord] {
        self.history.all()
    }

    pub fn current_page(&self) -> Option<DataPage<'_>> {
        self.pager.current_page(&self.history)
    }

    pub fn seek(&mut self, id: Uuid) -> Option<DataPage<'_>> {
        self.pager.seek(&self.history, id)
    }

    /// Newer record
    pub fn next_page(&mut self) -> Option<DataPage<'_>> {
        self.pager.next_page(&self.history)
    }

    /// Older record
    pub fn previous_page(&mut self) -> Option<DataPage<'_>> {
        self.pager.previous_page(&self.history)
    }

    pub fn clear_history(&mut self) -> anyhow::Result<()> {
        self.history.clear();
        self.pager.reset(&self.history);
        if self.persist {
            self.history.save()?;
        }
        Ok(())
    }
}
