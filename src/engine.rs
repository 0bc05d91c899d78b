//! Reconciliation engine: one template, one document, one filled tree.

use crate::document::{walk, Body};
use crate::error::Result;
use crate::extract::{Extractor, PassKind};
use crate::fill::{fill, OverwritePolicy};
use crate::matcher::LeafMatcher;
use crate::nlp::Scorer;
use crate::section::{SectionNode, SectionsTree};

#[derive(Clone, Debug, PartialEq)]
/// Tunables of a reconciliation run.
pub struct Settings {
    /// Minimum similarity for a whole paragraph or pre-colon fragment to count as a heading.
    pub heading_threshold: f64,
    /// Stricter threshold used by the colon-grouping pass.
    pub contains_heading_threshold: f64,
    /// Minimum similarity for a pair to be assigned to a leaf.
    pub fill_threshold: f64,
    /// Behaviour when a leaf is already filled.
    pub overwrite: OverwritePolicy,
    /// Passes to run, in order; each is followed by a fill.
    pub passes: Vec<PassKind>,
    /// Separator placed between accumulated paragraphs.
    pub joiner: String,
    /// Append a period to accumulated paragraphs lacking final punctuation.
    pub terminate_sentences: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            heading_threshold: 0.5,
            contains_heading_threshold: 0.6,
            fill_threshold: 0.5,
            overwrite: OverwritePolicy::LaterWins,
            passes: vec![PassKind::ColonSplit, PassKind::Positional],
            joiner: "\n".to_string(),
            terminate_sentences: true,
        }
    }
}

/// Fills a fresh section tree from a document body.
pub struct Reconciler<'s> {
    tree: SectionsTree,
    scorer: &'s Scorer,
    settings: Settings,
}

impl<'s> Reconciler<'s> {
    /// Import `template` for one run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTemplate`] if the template is malformed.
    pub fn new(template: &SectionNode, scorer: &'s Scorer, settings: &Settings) -> Result<Self> {
        Ok(Self {
            tree: SectionsTree::new(template)?,
            scorer,
            settings: settings.clone(),
        })
    }

    /// Run the configured passes over `body` and return the pruned result.
    pub fn run(&mut self, body: &Body) -> SectionNode {
        let records: Vec<_> = walk(body).collect();
        let matcher = LeafMatcher::new(self.scorer, &self.tree.leaf_names());
        let extractor = Extractor::new(&matcher, &self.settings);

        let mut total = 0;
        for &pass in &self.settings.passes {
            let sections = extractor.run(pass, &records);
            let assigned = fill(
                &mut self.tree,
                &sections,
                &matcher,
                self.settings.fill_threshold,
                self.settings.overwrite,
            );
            log::debug!("{pass} pass assigned {assigned} of {} pair(s)", sections.len());
            total += assigned;
        }

        let result = self.tree.export();
        log::info!(
            "Reconciled {} paragraph(s) into '{}': {} assignment(s), {} of {} leaves filled",
            records.len(),
            result.name,
            total,
            self.tree
                .leaves()
                .iter()
                .filter(|s| s.text().is_some_and(|t| !t.is_empty()))
                .count(),
            matcher.len(),
        );
        result
    }

    #[must_use]
    /// The tree as filled so far, for content queries.
    pub fn tree(&self) -> &SectionsTree {
        &self.tree
    }

    #[must_use]
    /// Consume the reconciler, keeping the filled tree.
    pub fn into_tree(self) -> SectionsTree {
        self.tree
    }
}

#[cfg(test)]
#[path = "tests/engine.rs"]
mod tests;
