mod error;
mod history;
mod pager;
mod preferences;

pub use error::StoreError;
pub use history::{ExtractionRecord, HistoryStore};
pub use pager::{DataPage, Pager};
pub use preferences::Preferences;
