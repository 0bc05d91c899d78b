//! Extraction passes: sweeps over the paragraph stream producing heading→text pairs.
//!
//! Every pass skips table cells; tables carry their own heading/value layout that
//! has nothing to do with the section outline.

use crate::classify::{
    ends_with_punctuation, has_numbering, is_styled_heading, matches_template, split_heading,
    strip_numbering, trim_special,
};
use crate::document::ParagraphRecord;
use crate::engine::Settings;
use crate::matcher::LeafMatcher;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Heading→text pairs in first-seen order; a repeated heading keeps the last text.
pub type Sections = IndexMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Sweep strategy of one extraction pass.
pub enum PassKind {
    /// Split paragraphs at the first colon; the left half is the heading.
    ColonSplit,
    /// Group paragraphs under the last heading paragraph seen.
    Positional,
    /// Group paragraphs under the last colon paragraph whose label names a section.
    ColonGrouping,
}

impl PassKind {
    #[must_use]
    /// Configuration name of the pass.
    pub fn name(self) -> &'static str {
        match self {
            Self::ColonSplit => "colon-split",
            Self::Positional => "positional",
            Self::ColonGrouping => "colon-grouping",
        }
    }
}

impl FromStr for PassKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "colon-split" => Ok(Self::ColonSplit),
            "positional" => Ok(Self::Positional),
            "colon-grouping" => Ok(Self::ColonGrouping),
            other => Err(format!("unknown pass: {other}")),
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running heading plus the chunks collected under it.
struct Accumulator<'a> {
    heading: String,
    chunks: Vec<String>,
    settings: &'a Settings,
}

impl<'a> Accumulator<'a> {
    fn new(settings: &'a Settings) -> Self {
        Self {
            heading: String::new(),
            chunks: Vec::new(),
            settings,
        }
    }

    fn push(&mut self, chunk: &str) {
        if chunk.is_empty() {
            return;
        }
        let mut chunk = chunk.to_string();
        if self.settings.terminate_sentences && !ends_with_punctuation(&chunk) {
            chunk.push('.');
        }
        self.chunks.push(chunk);
    }

    fn flush(&mut self, out: &mut Sections) {
        if !self.heading.is_empty() && !self.chunks.is_empty() {
            out.insert(
                std::mem::take(&mut self.heading),
                self.chunks.join(&self.settings.joiner),
            );
        }
        self.chunks.clear();
    }

    fn open(&mut self, heading: &str, out: &mut Sections) {
        self.flush(out);
        self.heading = heading.to_string();
    }
}

/// Runs extraction passes over one document's paragraphs.
pub struct Extractor<'a, 's> {
    matcher: &'a LeafMatcher<'s>,
    settings: &'a Settings,
}

impl<'a, 's> Extractor<'a, 's> {
    #[must_use]
    /// Extractor judging headings against `matcher`'s leaves.
    pub fn new(matcher: &'a LeafMatcher<'s>, settings: &'a Settings) -> Self {
        Self { matcher, settings }
    }

    #[must_use]
    /// Pairs produced by `pass` over `records`.
    pub fn run(&self, pass: PassKind, records: &[ParagraphRecord<'_>]) -> Sections {
        let sections = match pass {
            PassKind::ColonSplit => self.colon_split(records),
            PassKind::Positional => self.positional(records),
            PassKind::ColonGrouping => self.colon_grouping(records),
        };
        log::debug!("{pass} pass extracted {} section(s)", sections.len());
        sections
    }

    fn is_heading(&self, record: &ParagraphRecord<'_>, fragment: &str, threshold: f64) -> bool {
        is_styled_heading(record, fragment) || matches_template(self.matcher, fragment, threshold)
    }

    fn body_paragraphs<'r, 'p>(
        records: &'r [ParagraphRecord<'p>],
    ) -> impl Iterator<Item = &'r ParagraphRecord<'p>> {
        records.iter().filter(|r| !r.is_table_cell)
    }

    /// `Heading: content` paragraphs, one pair each.
    fn colon_split(&self, records: &[ParagraphRecord<'_>]) -> Sections {
        let mut out = Sections::new();
        for record in Self::body_paragraphs(records) {
            let Some((heading, content)) = split_heading(record.text) else {
                continue;
            };
            let (heading, content) = (heading.trim(), content.trim());
            if heading.is_empty() || content.is_empty() {
                continue;
            }
            if self.is_heading(record, heading, self.settings.heading_threshold) {
                out.insert(heading.to_string(), content.to_string());
            }
        }
        out
    }

    /// Heading paragraphs followed by body paragraphs.
    fn positional(&self, records: &[ParagraphRecord<'_>]) -> Sections {
        let mut out = Sections::new();
        let mut acc = Accumulator::new(self.settings);
        for record in Self::body_paragraphs(records) {
            let text = strip_numbering(record.text.trim()).trim();
            if self.is_heading(record, record.text, self.settings.heading_threshold) {
                acc.open(text, &mut out);
            } else {
                acc.push(text);
            }
        }
        acc.flush(&mut out);
        out
    }

    /// Colon paragraphs whose label names a section open a group; the rest of the
    /// paragraph starts its content. A numbered label that names no section is a pair
    /// of its own, and any other colon paragraph is dropped. Group chunks are joined
    /// with the configured joiner.
    fn colon_grouping(&self, records: &[ParagraphRecord<'_>]) -> Sections {
        let threshold = self.settings.contains_heading_threshold;
        let mut out = Sections::new();
        let mut acc = Accumulator::new(self.settings);
        for record in Self::body_paragraphs(records) {
            if let Some((label, rest)) = split_heading(record.text) {
                let heading = strip_numbering(label.trim()).trim();
                let content = trim_special(rest);
                if matches_template(self.matcher, label, threshold) {
                    acc.open(heading, &mut out);
                    acc.push(content);
                    continue;
                }
                if has_numbering(label.trim())
                    && !heading.is_empty()
                    && !content.is_empty()
                {
                    out.insert(heading.to_string(), content.to_string());
                }
                continue;
            }
            if !is_styled_heading(record, record.text) {
                acc.push(trim_special(record.text));
            }
        }
        acc.flush(&mut out);
        out
    }
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
