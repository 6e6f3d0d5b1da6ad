use std::collections::HashSet;

use lexis_core::types::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Result of the last answer check on the current card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerStatus {
    #[default]
    Idle,
    Correct,
    Incorrect,
}

/// Spelling drill over a batch of words in shuffled order
#[derive(Debug, Clone)]
pub struct StudySession {
    words: Vec<Word>,
    index: usize,
    status: AnswerStatus,
    solved: HashSet<usize>,
    finished: bool,
}

impl StudySession {
    pub fn new<R: Rng + ?Sized>(words: Vec<Word>, rng: &mut R) -> Self {
        let mut session = Self {
            words,
            index: 0,
            status: AnswerStatus::Idle,
            solved: HashSet::new(),
            finished: false,
        };
        session.restart(rng);
        session
    }

    /// Reshuffle and start over with a zero score
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
        self.index = 0;
        self.status = AnswerStatus::Idle;
        self.solved.clear();
        self.finished = false;
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn current(&self) -> Option<&Word> {
        if self.finished {
            return None;
        }
        self.words.get(self.index)
    }

    /// 1-based card number for "Word i of n"
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Share of the deck already passed, 0.0 to 100.0
    pub fn progress(&self) -> f32 {
        if self.words.is_empty() {
            return 0.0;
        }
        if self.finished {
            return 100.0;
        }
        self.index as f32 / self.words.len() as f32 * 100.0
    }

    pub fn status(&self) -> AnswerStatus {
        self.status
    }

    pub fn score(&self) -> usize {
        self.solved.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Compare an answer to the current word, ignoring case and outer whitespace
    pub fn check(&mut self, answer: &str) -> AnswerStatus {
        let Some(word) = self.current() else {
            return AnswerStatus::Idle;
        };

        if answer.trim().to_lowercase() == word.word.to_lowercase() {
            self.solved.insert(self.index);
            self.status = AnswerStatus::Correct;
        } else {
            self.status = AnswerStatus::Incorrect;
        }
        self.status
    }

    /// Move to the next card; after the last one the session is finished
    pub fn advance(&mut self) -> Option<&Word> {
        if self.finished || self.words.is_empty() {
            return None;
        }

        self.status = AnswerStatus::Idle;
        if self.index + 1 < self.words.len() {
            self.index += 1;
            self.words.get(self.index)
        } else {
            self.finished = true;
            None
        }
    }

    /// Step back one card, `None` when already at the first
    pub fn back(&mut self) -> Option<&Word> {
        if self.finished || self.index == 0 {
            return None;
        }

        self.status = AnswerStatus::Idle;
        self.index -= 1;
        self.words.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn words(names: &[&str]) -> Vec<Word> {
        names.iter().map(|n| Word::bare(*n)).collect()
    }

    fn session(names: &[&str]) -> StudySession {
        StudySession::new(words(names), &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut s = session(&[]);
        assert!(s.is_empty());
        assert!(s.current().is_none());
        assert_eq!(s.check("anything"), AnswerStatus::Idle);
        assert!(s.advance().is_none());
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn shuffle_keeps_every_word() {
        let s = session(&["a", "b", "c", "d", "e"]);
        let mut seen: Vec<_> = s.words.iter().map(|w| w.word.clone()).collect();
        seen.sort();
        assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn answers_ignore_case_and_whitespace() {
        let mut s = session(&["feel"]);
        assert_eq!(s.check("fell"), AnswerStatus::Incorrect);
        assert_eq!(s.score(), 0);
        assert_eq!(s.check("  FEEL \n"), AnswerStatus::Correct);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn each_card_scores_once() {
        let mut s = session(&["feel"]);
        s.check("feel");
        s.check("feel");
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn walks_deck_then_finishes() {
        let mut s = session(&["one", "two", "three"]);
        let mut answered = 0;

        while let Some(word) = s.current().map(|w| w.word.clone()) {
            assert_eq!(s.position(), answered + 1);
            assert_eq!(s.check(&word), AnswerStatus::Correct);
            answered += 1;
            s.advance();
        }

        assert!(s.is_finished());
        assert_eq!(answered, 3);
        assert_eq!(s.score(), 3);
        assert_eq!(s.progress(), 100.0);
        assert!(s.advance().is_none());
    }

    #[test]
    fn back_resets_status_and_stops_at_first() {
        let mut s = session(&["one", "two"]);
        assert!(s.back().is_none());

        s.advance();
        s.check("nope");
        assert_eq!(s.status(), AnswerStatus::Incorrect);
        assert!(s.back().is_some());
        assert_eq!(s.status(), AnswerStatus::Idle);
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn restart_clears_score_and_finish() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = StudySession::new(words(&["one"]), &mut rng);
        s.check("one");
        s.advance();
        assert!(s.is_finished());

        s.restart(&mut rng);
        assert!(!s.is_finished());
        assert_eq!(s.score(), 0);
        assert_eq!(s.current().unwrap().word, "one");
    }
}
