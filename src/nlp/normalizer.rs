//! Tokenization pipeline: lower-case, deaccent, split, filter, lemmatize.

use super::lexicon::{Lexicon, SuffixLexicon};
use super::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Alphabetic}+").expect("word pattern is valid"));

const MIN_TOKEN_LEN: usize = 2;
const MAX_TOKEN_LEN: usize = 50;

/// Turns free text into canonical tokens.
pub struct Normalizer {
    stopwords: HashSet<&'static str>,
    lexicon: Box<dyn Lexicon>,
}

impl Normalizer {
    #[must_use]
    /// Normalizer with the built-in suffix lexicon for `language`.
    pub fn new(language: Language) -> Self {
        Self::with_lexicon(language, Box::new(SuffixLexicon::new(language)))
    }

    #[must_use]
    /// Normalizer with a caller-supplied lexicon.
    pub fn with_lexicon(language: Language, lexicon: Box<dyn Lexicon>) -> Self {
        Self {
            stopwords: language.stopwords().iter().copied().collect(),
            lexicon,
        }
    }

    #[must_use]
    /// Canonical tokens of `text`, in order of appearance (duplicates kept).
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let folded: String = text.to_lowercase().chars().map(deaccent).collect();
        WORD_PATTERN
            .find_iter(&folded)
            .map(|m| m.as_str())
            .filter(|token| {
                let len = token.chars().count();
                (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&len)
            })
            .filter(|token| !self.stopwords.contains(*token))
            .map(|token| {
                self.lexicon
                    .normal_forms(token)
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| token.to_string())
            })
            .collect()
    }
}

/// Strip diacritics from a lower-case character.
///
/// `ё` and `й` fold to `е` and `и`, matching what Unicode decomposition followed
/// by dropping combining marks produces.
#[must_use]
pub fn deaccent(c: char) -> char {
    match c {
        'ё' => 'е',
        'й' => 'и',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' => 's',
        'ž' => 'z',
        'ř' => 'r',
        other => other,
    }
}

#[cfg(test)]
#[path = "../tests/normalizer.rs"]
mod tests;
