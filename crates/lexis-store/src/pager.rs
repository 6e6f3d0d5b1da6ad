use uuid::Uuid;

use crate::history::{ExtractionRecord, HistoryStore};

/// One history record plus whether paging can continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPage<'a> {
    pub record: &'a ExtractionRecord,
    /// A newer record exists
    pub has_next_page: bool,
    /// An older record exists
    pub has_previous_page: bool,
}

/// Cursor over history. Starts at the newest record; "previous" walks
/// towards older records, "next" back towards newer ones.
#[derive(Debug, Default, Clone)]
pub struct Pager {
    current: Option<usize>,
}

impl Pager {
    pub fn new(history: &HistoryStore) -> Self {
        let mut pager = Self::default();
        pager.reset(history);
        pager
    }

    /// Jump back to the newest record
    pub fn reset(&mut self, history: &HistoryStore) {
        self.current = history.len().checked_sub(1);
    }

    /// Point at a specific record, `None` if it is not in history
    pub fn seek<'a>(&mut self, history: &'a HistoryStore, id: Uuid) -> Option<DataPage<'a>> {
        let index = history.position(id)?;
        self.current = Some(index);
        self.current_page(history)
    }

    pub fn current_page<'a>(&self, history: &'a HistoryStore) -> Option<DataPage<'a>> {
        let index = self.valid_index(history)?;
        Some(DataPage {
            record: &history.all()[index],
            has_next_page: index + 1 < history.len(),
            has_previous_page: index > 0,
        })
    }

    pub fn next_page<'a>(&mut self, history: &'a HistoryStore) -> Option<DataPage<'a>> {
        if !self.has_next_page(history) {
            return None;
        }
        self.current = self.current.map(|i| i + 1);
        self.current_page(history)
    }

    pub fn previous_page<'a>(&mut self, history: &'a HistoryStore) -> Option<DataPage<'a>> {
        if !self.has_previous_page(history) {
            return None;
        }
        self.current = self.current.map(|i| i - 1);
        self.current_page(history)
    }

    pub fn has_next_page(&self, history: &HistoryStore) -> bool {
        self.current_page(history).is_some_and(|page| page.has_next_page)
    }

    pub fn has_previous_page(&self, history: &HistoryStore) -> bool {
        self.current_page(history).is_some_and(|page| page.has_previous_page)
    }

    fn valid_index(&self, history: &HistoryStore) -> Option<usize> {
        self.current.filter(|&i| i < history.len())
    }
}
