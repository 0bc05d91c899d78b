//! Assigning extracted section texts to the best-matching template leaves.

use crate::extract::Sections;
use crate::matcher::LeafMatcher;
use crate::section::SectionsTree;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// What happens when a pair matches a leaf that already has text.
pub enum OverwritePolicy {
    #[default]
    /// Replace the text; the last pass run is authoritative.
    LaterWins,
    /// Only fill leaves that are still empty.
    KeepFirst,
}

impl OverwritePolicy {
    #[must_use]
    /// Configuration name of the policy.
    pub fn name(self) -> &'static str {
        match self {
            Self::LaterWins => "later-wins",
            Self::KeepFirst => "keep-first",
        }
    }
}

impl FromStr for OverwritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "later-wins" => Ok(Self::LaterWins),
            "keep-first" => Ok(Self::KeepFirst),
            other => Err(format!("unknown overwrite policy: {other}")),
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assign each pair's text to the leaf its heading resembles most.
///
/// Pairs whose best score is below `threshold`, or whose text is blank, are
/// dropped. Returns the number of pairs assigned.
pub fn fill(
    tree: &mut SectionsTree,
    sections: &Sections,
    matcher: &LeafMatcher<'_>,
    threshold: f64,
    policy: OverwritePolicy,
) -> usize {
    let mut assigned = 0;
    for (heading, text) in sections {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let Some((index, score)) = matcher.best_leaf(heading) else {
            continue;
        };
        if score < threshold {
            log::debug!("Dropped {heading:?}: best score {score:.3} below {threshold}");
            continue;
        }
        let filled = tree.leaf_text(index).is_some_and(|t| !t.is_empty());
        if policy == OverwritePolicy::KeepFirst && filled {
            log::debug!("Kept existing text of leaf #{index} over {heading:?}");
            continue;
        }
        if tree.set_leaf_text(index, text) {
            log::debug!("Assigned {heading:?} to leaf #{index} (score {score:.3})");
            assigned += 1;
        }
    }
    assigned
}

#[cfg(test)]
#[path = "tests/fill.rs"]
mod tests;
