//! Heading classifiers and the text clean-up shared by the extraction passes.
//!
//! Two independent heuristics decide whether a fragment names a section:
//! typography ([`is_styled_heading`]) and resemblance to a template leaf
//! ([`matches_template`]).

use crate::document::ParagraphRecord;
use crate::matcher::LeafMatcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading numbering such as `2.1 `, `а) ` or `3.`.
static NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\p{Ll}\d][.) ])+").expect("numbering pattern is valid"));

const SPECIAL_CHARS: &[char] = &[
    '!', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '/', ';', '<', '=', '>', '?', '@',
    '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', '—', '"', '-', '.',
];

const HEADING_STYLE_MARKERS: [&str; 2] = ["heading", "заголовок"];

#[must_use]
/// `text` without its leading numbering token.
pub fn strip_numbering(text: &str) -> &str {
    match NUMBERING.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

#[must_use]
/// Whether `text` starts with a numbering token followed by something else.
pub fn has_numbering(text: &str) -> bool {
    NUMBERING
        .find(text)
        .is_some_and(|m| !text[m.end()..].trim().is_empty())
}

#[must_use]
/// Split at the first colon into (heading candidate, content candidate).
pub fn split_heading(text: &str) -> Option<(&str, &str)> {
    text.split_once(':')
}

#[must_use]
/// `text` with special characters and whitespace trimmed from both ends.
pub fn trim_special(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || SPECIAL_CHARS.contains(&c))
}

fn strip_label(text: &str) -> &str {
    text.trim().trim_end_matches(':').trim_end()
}

/// Typographic check: does `fragment` of `record` look like a heading?
///
/// True when the fragment is non-empty and either the paragraph style is a
/// heading style or the bold runs spell out exactly the fragment on a paragraph
/// with default alignment. A trailing colon is ignored on both sides.
#[must_use]
pub fn is_styled_heading(record: &ParagraphRecord<'_>, fragment: &str) -> bool {
    let fragment = strip_label(fragment);
    if fragment.is_empty() {
        return false;
    }
    let style = record.style_name.to_lowercase();
    if HEADING_STYLE_MARKERS.iter().any(|m| style.contains(m)) {
        return true;
    }
    record.alignment.is_none() && strip_label(&record.bold_text()) == fragment
}

/// Template check: does `fragment`, without numbering, resemble some leaf name?
#[must_use]
pub fn matches_template(matcher: &LeafMatcher<'_>, fragment: &str, threshold: f64) -> bool {
    let fragment = strip_numbering(fragment.trim()).trim();
    !fragment.is_empty() && matcher.resembles_leaf(fragment, threshold)
}

#[must_use]
/// Whether `text` ends with ASCII punctuation.
pub fn ends_with_punctuation(text: &str) -> bool {
    text.chars().last().is_some_and(|c| c.is_ascii_punctuation())
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;
