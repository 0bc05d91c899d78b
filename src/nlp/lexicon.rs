//! Morphological lookup reducing word forms to a canonical key.
//!
//! A lexicon may return several candidate normal forms for an ambiguous word
//! form; callers take the first one, so the candidate order is significant.

use super::normalizer::deaccent;
use super::Language;
use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maps a lower-cased, deaccented word form to its normal forms.
pub trait Lexicon {
    /// Candidate normal forms, most likely first. Never empty for a non-empty word.
    fn normal_forms(&self, word: &str) -> Vec<String>;
}

/// Inflection stripping from a fixed per-language table of endings.
///
/// Produces a stem rather than a dictionary lemma, which is enough for matching:
/// all inflected forms of a word collapse onto the same key.
pub struct SuffixLexicon {
    endings: Vec<&'static str>,
    min_stem: usize,
}

const RUSSIAN_ENDINGS: &[&str] = &[
    "остями", "остью", "остей", "иями", "ость", "ости", "ться", "иях", "иям", "ием", "ями",
    "ами", "ого", "его", "ому", "ему", "ыми", "ими", "ует", "уют", "ена", "ено", "ены", "ях",
    "ах", "ам", "ям", "ем", "ом", "ой", "ей", "ий", "ый", "ая", "яя", "ое", "ее", "ые", "ие",
    "ых", "их", "ым", "им", "ую", "юю", "ию", "ия", "ья", "ов", "ев", "ью", "ии", "ть", "ет",
    "ют", "ит", "ат", "ят", "ен", "и", "ы", "а", "я", "о", "е", "у", "ю", "ь",
];

const ENGLISH_ENDINGS: &[&str] = &[
    "ations", "ation", "ments", "ment", "ness", "ings", "ing", "ies", "ied", "ed", "es", "s",
];

impl SuffixLexicon {
    #[must_use]
    /// Ending table for `language`, longest endings tried first.
    pub fn new(language: Language) -> Self {
        let mut endings = match language {
            Language::Russian => RUSSIAN_ENDINGS.to_vec(),
            Language::English => ENGLISH_ENDINGS.to_vec(),
        };
        endings.sort_by_key(|e| std::cmp::Reverse(e.chars().count()));
        Self {
            endings,
            min_stem: 3,
        }
    }

    fn stem<'a>(&self, word: &'a str) -> &'a str {
        let len = word.chars().count();
        for ending in &self.endings {
            if word.ends_with(ending) && len - ending.chars().count() >= self.min_stem {
                return &word[..word.len() - ending.len()];
            }
        }
        word
    }
}

impl Lexicon for SuffixLexicon {
    fn normal_forms(&self, word: &str) -> Vec<String> {
        vec![self.stem(word).to_string()]
    }
}

/// Dictionary of word forms loaded from a TSV file, with a fallback for unknown forms.
///
/// Each line is `wordform<TAB>lemma[,lemma...]`; empty lines and lines starting
/// with `#` are skipped.
pub struct DictionaryLexicon {
    entries: HashMap<String, Vec<String>>,
    fallback: Box<dyn Lexicon>,
}

impl DictionaryLexicon {
    #[must_use]
    /// Parse dictionary text. Malformed lines are skipped with a warning.
    pub fn from_tsv(text: &str, fallback: Box<dyn Lexicon>) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((form, lemmas)) = line.split_once('\t') else {
                log::warn!("lexicon line {} has no tab separator, skipped", lineno + 1);
                continue;
            };
            let candidates: Vec<String> = lemmas
                .split(',')
                .map(|l| normalize_key(l.trim()))
                .filter(|l| !l.is_empty())
                .collect();
            if candidates.is_empty() {
                log::warn!("lexicon line {} has no lemmas, skipped", lineno + 1);
                continue;
            }
            entries
                .entry(normalize_key(form.trim()))
                .or_default()
                .extend(candidates);
        }
        log::debug!("loaded {} lexicon entries", entries.len());
        Self { entries, fallback }
    }

    /// Read a dictionary file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path, fallback: Box<dyn Lexicon>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_tsv(&text, fallback))
    }

    #[must_use]
    /// Number of word forms in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Whether the dictionary has no word forms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lexicon for DictionaryLexicon {
    fn normal_forms(&self, word: &str) -> Vec<String> {
        match self.entries.get(word) {
            Some(lemmas) => lemmas.clone(),
            None => self.fallback.normal_forms(word),
        }
    }
}

fn normalize_key(s: &str) -> String {
    s.to_lowercase().chars().map(deaccent).collect()
}

#[cfg(test)]
#[path = "../tests/lexicon.rs"]
mod tests;
