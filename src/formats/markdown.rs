//! Markdown format implementation using tree-sitter-md.
//!
//! Block structure comes from the block grammar: ATX and setext headings become
//! paragraphs styled `Heading N`, list items and plain paragraphs stay paragraphs,
//! pipe tables become tables. Inline text is parsed with the inline grammar so
//! that `**strong**` spans become bold runs.

use crate::document::{Block, Body, Cell, Paragraph, Run, Table};
use crate::error::{Error, Result};
use crate::formats::Format;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

/// Tree-sitter queries for markdown block and inline structure.
pub struct MarkdownFormat;

impl MarkdownFormat {
    fn block_language() -> Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn inline_language() -> Language {
        tree_sitter_md::INLINE_LANGUAGE.into()
    }

    /// Top-level content blocks, in document order.
    fn block_query() -> &'static str {
        "[(atx_heading) (setext_heading) (paragraph) (pipe_table)] @block"
    }

    /// Bold spans inside an inline node.
    fn strong_query() -> &'static str {
        "(strong_emphasis) @strong"
    }
}

fn parse_error(reason: impl ToString) -> Error {
    Error::Parse {
        format: "markdown",
        reason: reason.to_string(),
    }
}

fn parse_tree(language: &Language, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser.set_language(language).map_err(parse_error)?;
    parser
        .parse(source, None)
        .ok_or_else(|| parse_error("tree-sitter returned no tree"))
}

fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

/// Inline text split into plain and bold runs, with the `**` markers removed.
struct InlineParser {
    language: Language,
    query: Query,
}

impl InlineParser {
    fn new() -> Result<Self> {
        let language = MarkdownFormat::inline_language();
        let query =
            Query::new(&language, MarkdownFormat::strong_query()).map_err(parse_error)?;
        Ok(Self { language, query })
    }

    fn runs(&self, text: &str) -> Result<Vec<Run>> {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let tree = parse_tree(&self.language, &text)?;

        let mut spans = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), text.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                spans.push(capture.node.byte_range());
            }
        }
        spans.sort_by_key(|r| r.start);

        let mut runs = Vec::new();
        let mut offset = 0;
        for span in spans {
            if span.start < offset {
                continue;
            }
            if span.start > offset {
                runs.push(Run {
                    text: text[offset..span.start].to_string(),
                    bold: false,
                });
            }
            runs.push(Run {
                text: text[span.clone()].trim_matches(['*', '_']).to_string(),
                bold: true,
            });
            offset = span.end;
        }
        if offset < text.len() {
            runs.push(Run {
                text: text[offset..].to_string(),
                bold: false,
            });
        }
        Ok(runs)
    }

    fn paragraph(&self, text: &str, style: &str) -> Result<Paragraph> {
        Ok(Paragraph::from_runs(self.runs(text)?, style, None))
    }
}

fn heading_level(node: Node<'_>) -> usize {
    let mut cursor = node.walk();
    let level = node
        .children(&mut cursor)
        .find_map(|child| match child.kind() {
            "atx_h1_marker" | "setext_h1_underline" => Some(1),
            "atx_h2_marker" | "setext_h2_underline" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        })
        .unwrap_or(1);
    level
}

fn table(node: Node<'_>, source: &str, inline: &InlineParser) -> Result<Table> {
    let mut rows = Vec::new();
    let mut cursor = node.walk();
    for row in node.named_children(&mut cursor) {
        if !matches!(row.kind(), "pipe_table_header" | "pipe_table_row") {
            continue;
        }
        let mut row_cursor = row.walk();
        let cells = row
            .named_children(&mut row_cursor)
            .filter(|cell| cell.kind() == "pipe_table_cell")
            .map(|cell| {
                let paragraph = inline.paragraph(node_text(cell, source), "")?;
                Ok(Cell {
                    blocks: vec![Block::Paragraph(paragraph)],
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(cells);
    }
    Ok(Table { rows })
}

fn block(node: Node<'_>, source: &str, inline: &InlineParser) -> Result<Option<Block>> {
    let block = match node.kind() {
        "atx_heading" | "setext_heading" => {
            let content = node
                .child_by_field_name("heading_content")
                .map_or("", |c| node_text(c, source));
            let style = format!("Heading {}", heading_level(node));
            Block::Paragraph(inline.paragraph(content, &style)?)
        }
        "paragraph" => {
            if node.parent().is_some_and(|p| p.kind() == "setext_heading") {
                return Ok(None);
            }
            Block::Paragraph(inline.paragraph(node_text(node, source), "")?)
        }
        "pipe_table" => Block::Table(table(node, source, inline)?),
        _ => return Ok(None),
    };
    Ok(Some(block))
}

impl Format for MarkdownFormat {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["md", "markdown"]
    }

    fn parse(&self, bytes: &[u8]) -> Result<Body> {
        let source = std::str::from_utf8(bytes).map_err(parse_error)?;
        let language = Self::block_language();
        let tree = parse_tree(&language, source)?;
        let query = Query::new(&language, Self::block_query()).map_err(parse_error)?;
        let inline = InlineParser::new()?;

        let mut blocks = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Some(block) = block(capture.node, source, &inline)? {
                    blocks.push(block);
                }
            }
        }
        Ok(Body { blocks })
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
