//! Set-overlap cosine similarity between two strings.

use super::normalizer::Normalizer;
use super::Language;
use std::collections::HashSet;

/// Distinct canonical tokens of a string.
pub type TokenSet = HashSet<String>;

/// Scores how similar two strings are, from 0.0 (disjoint) to 1.0 (same token set).
pub struct Scorer {
    normalizer: Normalizer,
}

impl Scorer {
    #[must_use]
    /// Scorer over an existing normalizer.
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    #[must_use]
    /// Scorer with the built-in lexicon for `language`.
    pub fn for_language(language: Language) -> Self {
        Self::new(Normalizer::new(language))
    }

    #[must_use]
    /// Underlying normalizer.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    #[must_use]
    /// Token set of `text`, for callers that compare one string against many.
    pub fn token_set(&self, text: &str) -> TokenSet {
        self.normalizer.tokenize(text).into_iter().collect()
    }

    #[must_use]
    /// Similarity of two strings.
    pub fn similarity(&self, s1: &str, s2: &str) -> f64 {
        Self::set_similarity(&self.token_set(s1), &self.token_set(s2))
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    /// Cosine of the binary membership vectors: `|A ∩ B| / sqrt(|A| * |B|)`.
    ///
    /// Either set being empty yields 0.0.
    pub fn set_similarity(a: &TokenSet, b: &TokenSet) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        let common = small.iter().filter(|t| large.contains(*t)).count();
        common as f64 / ((a.len() * b.len()) as f64).sqrt()
    }
}

#[cfg(test)]
#[path = "../tests/similarity.rs"]
mod tests;
