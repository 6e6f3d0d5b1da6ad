pub mod dictionary;
pub mod error;
pub mod lookup;
pub mod preprocess;
pub mod state;
pub mod types;


pub use dictionary::{Accent, DefinitionSource};
pub use error::{LookupError, SourceError};
pub use lookup::{extract_and_translate, handle_extract_and_translate};
pub use preprocess::tokenize;
pub use state::{LookupContext, LookupMode};
pub use types::{ExtractResponse, ExtractionBatch, Meaning, Word};
