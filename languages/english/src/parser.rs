//! Scrapes the dict.laban.vn definition page.
//!
//! The page is not a documented API; when its markup moves the functions
//! here return empty values instead of failing.

use lexis_core::types::Meaning;
use scraper::{ElementRef, Html, Selector};

const TRANSCRIPTION_CONTAINER: &str = ".word_tab_title_0";
/// English-Vietnamese tab of the result slider
const EN_VI_SECTION: &str = r#"li.slide_content[rel="0"] .content"#;
const POS_BLOCK: &str = "div.bg-grey";
const POS_LABEL: &str = "span";

const POS_CLASS: &str = "bg-grey";
const DEFINITION_CLASSES: [&str; 2] = ["green", "bold"];

/// Phonetic transcription, e.g. `/fi:l/`; empty when the page has none.
///
/// The text is trimmed, since the page indents it inside its container.
pub fn parse_transcription(html: &str) -> String {
    let document = Html::parse_document(html);
    let Some(container) = selector(TRANSCRIPTION_CONTAINER) else {
        return String::new();
    };

    document
        .select(&container)
        .next()
        .and_then(first_child_element)
        .and_then(first_child_element)
        .map(text_of)
        .unwrap_or_default()
}

/// Part-of-speech groups of the English-Vietnamese section, in page order
pub fn parse_meanings(html: &str) -> Vec<Meaning> {
    let document = Html::parse_document(html);
    let (Some(section), Some(pos_block), Some(pos_label)) = (
        selector(EN_VI_SECTION),
        selector(POS_BLOCK),
        selector(POS_LABEL),
    ) else {
        return Vec::new();
    };

    let Some(content) = document.select(&section).next() else {
        tracing::warn!("Could not find the English-Vietnamese content section");
        return Vec::new();
    };

    content
        .select(&pos_block)
        .filter_map(|block| read_meaning(block, &pos_label))
        .collect()
}

/// Label of one part-of-speech block plus the definitions that follow it,
/// up to the next block
fn read_meaning(block: ElementRef<'_>, pos_label: &Selector) -> Option<Meaning> {
    let label = block.select(pos_label).next().map(text_of)?;
    if label.is_empty() {
        return None;
    }

    let definitions: Vec<String> = block
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| !has_class(el, POS_CLASS))
        .filter(|el| DEFINITION_CLASSES.iter().all(|class| has_class(el, class)))
        .map(text_of)
        .filter(|text| !text.is_empty())
        .collect();

    if definitions.is_empty() {
        tracing::debug!("Part of speech '{label}' has no definitions");
        return None;
    }

    Some(Meaning {
        part_of_speech: label,
        definitions,
    })
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css)
        .map_err(|e| tracing::error!("Invalid selector {css:?}: {e}"))
        .ok()
}

fn first_child_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.children().find_map(ElementRef::wrap)
}

fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
