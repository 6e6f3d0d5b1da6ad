/// Failure talking to the upstream dictionary
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Failure of a whole extraction call, not of a single word
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Batch failed: {0}")]
    Batch(String),
}

/// Shown to the user for any unexpected batch failure
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An unexpected error occurred while processing the text. Please try again later.";

/// Shown when the submitted text is blank
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter text.";

/// Shown when the text held no usable words
pub const NO_WORDS_MESSAGE: &str =
    "No distinct words could be extracted. Please try different text.";
