use lexis_core::types::Word;
use serde::{Deserialize, Serialize};

/// What a flashcard shows: meanings as the clue, the word as the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub clue: Vec<String>,
    pub answer: String,
    pub phonetic: String,
    pub audio_url: Option<String>,
}

impl Card {
    /// Build a card from a word, using at most `max_clues` meanings as the clue
    pub fn from_word(word: &Word, max_clues: usize) -> Self {
        let mut clue = word.meaning_lines();
        clue.truncate(max_clues);

        let phonetic = if word.phonetic_uk.is_empty() {
            word.phonetic_us.clone()
        } else {
            word.phonetic_uk.clone()
        };

        Self {
            clue,
            answer: word.word.clone(),
            phonetic,
            audio_url: word.uk_sound_url.clone().or_else(|| word.us_sound_url.clone()),
        }
    }

    /// Front of the card, one clue per line
    pub fn front(&self) -> String {
        if self.clue.is_empty() {
            return "(no meanings)".to_string();
        }
        self.clue.join("\n")
    }

    /// Back of the card: the word and its pronunciation
    pub fn back(&self) -> String {
        if self.phonetic.is_empty() {
            self.answer.clone()
        } else {
            format!("{} {}", self.answer, self.phonetic)
        }
    }
}

#[cfg(test)]
mod tests {
    use lexis_core::types::Meaning;

    use super::*;

    fn feel() -> Word {
        let mut word = Word::bare("feel");
        word.phonetic_uk = "/fi:l/".to_string();
        word.us_sound_url = Some("https://example.com/us/feel.mp3".to_string());
        word.meanings = vec![
            Meaning {
                part_of_speech: "ngoại động từ".to_string(),
                definitions: vec!["sờ, mó".to_string(), "cảm thấy".to_string()],
            },
            Meaning {
                part_of_speech: "nội động từ".to_string(),
                definitions: vec!["cảm thấy".to_string()],
            },
            Meaning {
                part_of_speech: "danh từ".to_string(),
                definitions: vec!["sự sờ mó".to_string()],
            },
        ];
        word
    }

    #[test]
    fn clue_is_limited_to_first_meanings() {
        let card = Card::from_word(&feel(), 2);
        assert_eq!(
            card.front(),
            "ngoại động từ: sờ, mó; cảm thấy\nnội động từ: cảm thấy"
        );
        assert_eq!(card.back(), "feel /fi:l/");
    }

    #[test]
    fn falls_back_to_us_audio_and_bare_word() {
        let mut word = feel();
        word.phonetic_uk.clear();
        word.meanings.clear();

        let card = Card::from_word(&word, 2);
        assert_eq!(card.audio_url.as_deref(), Some("https://example.com/us/feel.mp3"));
        assert_eq!(card.front(), "(no meanings)");
        assert_eq!(card.back(), "feel");
    }
}
