use serde::{Deserialize, Serialize};

/// A looked-up word with its pronunciation and Vietnamese meanings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub word: String,
    #[serde(rename = "vietnameseMeaning", default)]
    pub meanings: Vec<Meaning>,
    #[serde(rename = "phoneticTranscriptionUK", default)]
    pub phonetic_uk: String,
    #[serde(rename = "phoneticTranscriptionUS", default)]
    pub phonetic_us: String,
    #[serde(default)]
    pub uk_sound_url: Option<String>,
    #[serde(default)]
    pub us_sound_url: Option<String>,
}

impl Word {
    /// Record with no lookup data attached yet
    pub fn bare(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meanings: Vec::new(),
            phonetic_uk: String::new(),
            phonetic_us: String::new(),
            uk_sound_url: None,
            us_sound_url: None,
        }
    }

    /// Flattened "pos: def1; def2" lines, one per meaning
    pub fn meaning_lines(&self) -> Vec<String> {
        self.meanings
            .iter()
            .map(|m| format!("{}: {}", m.part_of_speech, m.definitions.join("; ")))
            .collect()
    }
}

/// Part-of-speech group of definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "type")]
    pub part_of_speech: String,
    #[serde(rename = "meaning")]
    pub definitions: Vec<String>,
}

/// One submitted text and the words extracted from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionBatch {
    pub input: String,
    pub output: Vec<Word>,
}

impl ExtractionBatch {
    pub fn new(input: impl Into<String>, output: Vec<Word>) -> Self {
        Self {
            input: input.into(),
            output,
        }
    }
}

/// What the presentation layer gets back for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub data: Option<Vec<Word>>,
    pub error: Option<String>,
    pub input_text: String,
}

impl ExtractResponse {
    pub fn ok(input_text: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            data: Some(words),
            error: None,
            input_text: input_text.into(),
        }
    }

    pub fn failed(input_text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
            input_text: input_text.into(),
        }
    }

    /// Lookup ran but produced no words
    pub fn is_empty_result(&self) -> bool {
        matches!(&self.data, Some(words) if words.is_empty())
    }

    /// Convert a successful response into a batch, `None` on error
    pub fn into_batch(self) -> Option<ExtractionBatch> {
        match (self.error, self.data) {
            (None, Some(words)) => Some(ExtractionBatch::new(self.input_text, words)),
            _ => None,
        }
    }
}
