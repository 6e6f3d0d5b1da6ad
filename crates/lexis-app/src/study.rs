use std::io::{BufRead, Write};

use lexis_core::types::Word;
use lexis_study::{AnswerStatus, Card, StudySession};
use rand::Rng;

const HELP: &str = "Type the word, or :n next, :p previous, :q quit";

/// Terminal flashcard drill. Returns the final score.
pub fn run<R, W, G>(
    words: Vec<Word>,
    prompt_meanings: usize,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut session = StudySession::new(words, rng);
    if session.is_empty() {
        writeln!(out, "No words to study.")?;
        return Ok(0);
    }

    writeln!(out, "{HELP}")?;
    let mut line = String::new();

    loop {
        if session.is_finished() {
            writeln!(out, "\nSession complete! Score: {} / {}", session.score(), session.len())?;
            write!(out, "Study again? [y/N] ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
                return Ok(session.score());
            }
            session.restart(rng);
            continue;
        }

        let Some(word) = session.current() else {
            return Ok(session.score());
        };
        let card = Card::from_word(word, prompt_meanings);

        writeln!(out, "\nWord {} of {} ({:.0}%)", session.position(), session.len(), session.progress())?;
        writeln!(out, "{}", card.front())?;
        if let Some(url) = &card.audio_url {
            writeln!(out, "Audio: {url}")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(session.score());
        }

        match line.trim() {
            ":q" => return Ok(session.score()),
            ":n" => {
                session.advance();
            }
            ":p" => {
                if session.back().is_none() {
                    writeln!(out, "Already at the first word.")?;
                }
            }
            answer => match session.check(answer) {
                AnswerStatus::Correct => {
                    writeln!(out, "Correct! {}", card.back())?;
                    session.advance();
                }
                AnswerStatus::Incorrect => writeln!(out, "Incorrect, try again.")?,
                AnswerStatus::Idle => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn empty_deck_says_so() {
        let mut out = Vec::new();
        let score = run(
            Vec::new(),
            2,
            &mut StdRng::seed_from_u64(0),
            &mut Cursor::new(""),
            &mut out,
        )
        .unwrap();

        assert_eq!(score, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "No words to study.\n");
    }

    #[test]
    fn wrong_then_right_then_decline_restart() {
        let mut out = Vec::new();
        let score = run(
            vec![Word::bare("feel")],
            2,
            &mut StdRng::seed_from_u64(0),
            &mut Cursor::new("fell\nFeel\nn\n"),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(score, 1);
        assert!(text.contains("Incorrect, try again."));
        assert!(text.contains("Correct! feel"));
        assert!(text.contains("Score: 1 / 1"));
    }

    #[test]
    fn quit_keeps_partial_score() {
        let mut out = Vec::new();
        let score = run(
            vec![Word::bare("a"), Word::bare("b")],
            2,
            &mut StdRng::seed_from_u64(0),
            &mut Cursor::new(":q\n"),
            &mut out,
        )
        .unwrap();

        assert_eq!(score, 0);
    }
}
