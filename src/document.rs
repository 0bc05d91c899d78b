//! Document body model and the paragraph stream walker.
//!
//! Adapters in [`crate::formats`] turn files into a [`Body`]: an ordered list of
//! paragraphs and tables, where table cells hold their own blocks and may nest
//! further tables. [`walk`] flattens a body into [`ParagraphRecord`]s in reading
//! order, which the extraction passes depend on.
//!
//! The JSON shape of a body, as accepted by the JSON adapter:
//!
//! ```text
//! {"blocks": [
//!   {"type": "paragraph", "text": "1.1 Общие сведения:", "style": "Heading 2"},
//!   {"type": "table", "rows": [[{"blocks": [{"type": "paragraph", "text": "cell"}]}]]}
//! ]}
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Flatten;
use std::slice;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Top-level content of a document.
pub struct Body {
    /// Paragraphs and tables in physical order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
/// A body-level element.
pub enum Block {
    /// A single paragraph.
    Paragraph(Paragraph),
    /// A table whose cells contain blocks.
    Table(Table),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// A paragraph with its style and formatting runs.
pub struct Paragraph {
    /// Full paragraph text.
    #[serde(default)]
    pub text: String,
    /// Style name, e.g. `Heading 1` or `Normal`.
    #[serde(default)]
    pub style: String,
    /// Explicit alignment override (`center`, `both`, ...), absent for the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    /// Formatting runs whose texts concatenate to `text`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<Run>,
}

impl Paragraph {
    #[must_use]
    /// Unformatted paragraph with a single plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            runs: vec![Run {
                text: text.clone(),
                bold: false,
            }],
            text,
            ..Self::default()
        }
    }

    #[must_use]
    /// Paragraph built from runs; `text` is their concatenation.
    pub fn from_runs(runs: Vec<Run>, style: impl Into<String>, alignment: Option<String>) -> Self {
        Self {
            text: runs.iter().map(|r| r.text.as_str()).collect(),
            style: style.into(),
            alignment,
            runs,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// A stretch of paragraph text with uniform formatting.
pub struct Run {
    /// Run text.
    pub text: String,
    /// Whether the run is bold.
    #[serde(default)]
    pub bold: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// A table, row-major.
pub struct Table {
    /// Rows of cells.
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// A table cell.
pub struct Cell {
    /// Cell content in order; may include nested tables.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A paragraph as seen by the classifiers, tagged with where it came from.
pub struct ParagraphRecord<'a> {
    /// Paragraph text.
    pub text: &'a str,
    /// Style name.
    pub style_name: &'a str,
    /// Formatting runs.
    pub runs: &'a [Run],
    /// Explicit alignment override.
    pub alignment: Option<&'a str>,
    /// Whether the paragraph sits inside a table cell (at any depth).
    pub is_table_cell: bool,
}

impl<'a> ParagraphRecord<'a> {
    fn new(paragraph: &'a Paragraph, is_table_cell: bool) -> Self {
        Self {
            text: &paragraph.text,
            style_name: &paragraph.style,
            runs: &paragraph.runs,
            alignment: paragraph.alignment.as_deref(),
            is_table_cell,
        }
    }

    #[must_use]
    /// Concatenated text of the bold runs.
    pub fn bold_text(&self) -> String {
        self.runs
            .iter()
            .filter(|r| r.bold)
            .map(|r| r.text.as_str())
            .collect()
    }
}

enum Frame<'a> {
    Blocks {
        iter: slice::Iter<'a, Block>,
        in_table: bool,
    },
    Cells(Flatten<slice::Iter<'a, Vec<Cell>>>),
}

enum Step<'a> {
    Yield(&'a Paragraph, bool),
    Enter(Frame<'a>),
    Leave,
}

/// Lazy depth-first iterator over the paragraphs of a body.
pub struct Walker<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for Walker<'a> {
    type Item = ParagraphRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = match self.stack.last_mut()? {
                Frame::Blocks { iter, in_table } => match iter.next() {
                    Some(Block::Paragraph(p)) => Step::Yield(p, *in_table),
                    Some(Block::Table(t)) => Step::Enter(Frame::Cells(t.rows.iter().flatten())),
                    None => Step::Leave,
                },
                Frame::Cells(cells) => match cells.next() {
                    Some(cell) => Step::Enter(Frame::Blocks {
                        iter: cell.blocks.iter(),
                        in_table: true,
                    }),
                    None => Step::Leave,
                },
            };
            match step {
                Step::Yield(paragraph, in_table) => {
                    return Some(ParagraphRecord::new(paragraph, in_table));
                }
                Step::Enter(frame) => self.stack.push(frame),
                Step::Leave => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[must_use]
/// Paragraphs of `body` in reading order, descending into tables row by row.
pub fn walk(body: &Body) -> Walker<'_> {
    Walker {
        stack: vec![Frame::Blocks {
            iter: body.blocks.iter(),
            in_table: false,
        }],
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
