use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Runs of anything other than letters (`L`), numbers (`N`), `_` and `-`
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_-]+").unwrap());

/// Split raw text into distinct lower-cased words, first-seen order.
///
/// Only the first hyphen of a fragment becomes a space, so `"dog-house"`
/// yields `"dog house"` while `"jack-in-the-box"` yields `"jack in-the-box"`.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    NON_WORD
        .split(text)
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_lowercase().replacen('-', " ", 1).trim().to_string())
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
