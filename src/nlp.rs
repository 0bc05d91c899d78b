//! Lexical normalization and the similarity measure used to match headings.
//!
//! Matching is purely lexical: both strings are reduced to sets of canonical
//! tokens and compared with set-overlap cosine. The [`Scorer`] is built once per
//! process and passed by reference to everything that needs it.

pub mod lexicon;
pub mod normalizer;
pub mod similarity;
pub mod stopwords;

pub use lexicon::{DictionaryLexicon, Lexicon, SuffixLexicon};
pub use normalizer::Normalizer;
pub use similarity::{Scorer, TokenSet};

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Document language, selecting the stopword set and inflection rules.
pub enum Language {
    #[default]
    /// Russian (the language of the standard SRS outline).
    Russian,
    /// English.
    English,
}

impl Language {
    #[must_use]
    /// Stopwords removed before lemmatization.
    pub fn stopwords(self) -> &'static [&'static str] {
        match self {
            Self::Russian => stopwords::RUSSIAN,
            Self::English => stopwords::ENGLISH,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "russian" => Ok(Self::Russian),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Russian => write!(f, "ru"),
            Self::English => write!(f, "en"),
        }
    }
}
