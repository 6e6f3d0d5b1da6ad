use std::fmt::Write;

use lexis_core::types::Word;
use lexis_store::{DataPage, ExtractionRecord, Preferences};

const HIDDEN: &str = "•••";

/// Word table honouring the display toggles
pub fn words(words: &[Word], prefs: &Preferences) -> String {
    let mut out = String::new();

    for (i, word) in words.iter().enumerate() {
        let headword = if prefs.show_word { word.word.as_str() } else { HIDDEN };
        let _ = write!(out, "{:>3}. {headword}", i + 1);
        if !word.phonetic_uk.is_empty() {
            let _ = write!(out, "  {}", word.phonetic_uk);
        }
        out.push('\n');

        if !prefs.show_vietnamese {
            continue;
        }
        for line in word.meaning_lines() {
            let _ = writeln!(out, "       {line}");
        }
    }

    out
}

/// One-line summary of a history record
pub fn record_summary(record: &ExtractionRecord) -> String {
    let when = record
        .recorded_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    let preview: String = record.input.chars().take(40).collect();
    let ellipsis = if record.input.chars().count() > 40 { "…" } else { "" };

    format!(
        "{}  {when}  {:>3} words  {}{ellipsis}",
        record.id,
        record.output.len(),
        preview.replace('\n', " ")
    )
}

/// Full page view with paging hints
pub fn page(page: &DataPage<'_>, prefs: &Preferences) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record_summary(page.record));
    let _ = writeln!(out);
    out.push_str(&words(&page.record.output, prefs));

    let mut hints = Vec::new();
    if page.has_previous_page {
        hints.push("--older");
    }
    if page.has_next_page {
        hints.push("--newer");
    }
    if !hints.is_empty() {
        let _ = writeln!(out, "\nMore history: {}", hints.join(" / "));
    }

    out
}
