//! Scoring free-text headings against the leaf names of a template.

use crate::nlp::{Scorer, TokenSet};

/// Leaf names of one tree, tokenized once and scored against many headings.
pub struct LeafMatcher<'s> {
    scorer: &'s Scorer,
    leaves: Vec<TokenSet>,
}

impl<'s> LeafMatcher<'s> {
    #[must_use]
    /// Matcher over `names`, given in leaf pre-order.
    pub fn new<S: AsRef<str>>(scorer: &'s Scorer, names: &[S]) -> Self {
        Self {
            scorer,
            leaves: names.iter().map(|n| scorer.token_set(n.as_ref())).collect(),
        }
    }

    #[must_use]
    /// Scorer used for tokenization.
    pub fn scorer(&self) -> &'s Scorer {
        self.scorer
    }

    #[must_use]
    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    #[must_use]
    /// Whether the matcher has no leaves.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    #[must_use]
    /// Whether `text` scores at least `threshold` against some leaf.
    pub fn resembles_leaf(&self, text: &str, threshold: f64) -> bool {
        let tokens = self.scorer.token_set(text);
        if tokens.is_empty() {
            return false;
        }
        self.leaves
            .iter()
            .any(|leaf| Scorer::set_similarity(&tokens, leaf) >= threshold)
    }

    #[must_use]
    /// Index and score of the best-matching leaf. Ties go to the later leaf.
    pub fn best_leaf(&self, heading: &str) -> Option<(usize, f64)> {
        let tokens = self.scorer.token_set(heading);
        let mut best: Option<(usize, f64)> = None;
        for (index, leaf) in self.leaves.iter().enumerate() {
            let score = Scorer::set_similarity(&tokens, leaf);
            if best.is_none_or(|(_, max)| score >= max) {
                best = Some((index, score));
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "tests/matcher.rs"]
mod tests;
