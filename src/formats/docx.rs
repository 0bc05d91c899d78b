//! Word documents (.docx).
//!
//! DOCX files are ZIP archives containing XML files in Open XML format.
//! The body is in `word/document.xml`; style display names come from
//! `word/styles.xml` when present.

use crate::document::{Block, Body, Cell, Paragraph, Run, Table};
use crate::error::{Error, Result};
use crate::formats::Format;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// Office Open XML word-processing documents.
pub struct DocxFormat;

impl Format for DocxFormat {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    fn parse(&self, bytes: &[u8]) -> Result<Body> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let styles = match read_part(&mut archive, STYLES_PART)? {
            Some(xml) => parse_styles(&xml)?,
            None => HashMap::new(),
        };
        let document = read_part(&mut archive, DOCUMENT_PART)?.ok_or_else(|| Error::Parse {
            format: "docx",
            reason: format!("missing {DOCUMENT_PART}"),
        })?;
        parse_document(&document, &styles)
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    match archive.by_name(name) {
        Ok(mut file) => {
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(Some(content))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Get an attribute value by local name, ignoring the namespace prefix.
fn get_attribute(e: &BytesStart, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == name.as_bytes())
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Toggle properties such as `<w:b/>` are on unless explicitly switched off.
fn is_on(e: &BytesStart) -> bool {
    !matches!(
        get_attribute(e, "val").as_deref(),
        Some("0" | "false" | "off")
    )
}

/// Map of style id to display name.
fn parse_styles(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut styles = HashMap::new();
    let mut current_id: Option<String> = None;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.local_name().as_ref() == b"style" => {
                current_id = get_attribute(e, "styleId");
            }
            Event::Empty(ref e) | Event::Start(ref e) if e.local_name().as_ref() == b"name" => {
                if let (Some(id), Some(name)) = (current_id.as_ref(), get_attribute(e, "val")) {
                    styles.insert(id.clone(), name);
                }
            }
            Event::End(ref e) if e.local_name().as_ref() == b"style" => current_id = None,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(styles)
}

/// Open containers while walking the body; tables nest inside cells.
enum Container {
    Blocks(Vec<Block>),
    Table(Vec<Vec<Cell>>),
    Row(Vec<Cell>),
}

#[derive(Default)]
struct ParagraphState {
    style: String,
    alignment: Option<String>,
    runs: Vec<Run>,
    in_properties: bool,
}

struct BodyBuilder<'a> {
    styles: &'a HashMap<String, String>,
    stack: Vec<Container>,
    paragraph: Option<ParagraphState>,
    run: Option<Run>,
    in_text: bool,
    skip_depth: usize,
}

impl<'a> BodyBuilder<'a> {
    fn new(styles: &'a HashMap<String, String>) -> Self {
        Self {
            styles,
            stack: vec![Container::Blocks(Vec::new())],
            paragraph: None,
            run: None,
            in_text: false,
            skip_depth: 0,
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.stack.last_mut() {
            Some(Container::Blocks(blocks)) => blocks.push(block),
            _ => log::warn!("Dropped content outside of a table cell"),
        }
    }

    fn start(&mut self, e: &BytesStart) {
        match e.local_name().as_ref() {
            b"txbxContent" => self.skip_depth += 1,
            _ if self.skip_depth > 0 => {}
            b"tbl" => self.stack.push(Container::Table(Vec::new())),
            b"tr" => self.stack.push(Container::Row(Vec::new())),
            b"tc" => self.stack.push(Container::Blocks(Vec::new())),
            b"p" => self.paragraph = Some(ParagraphState::default()),
            b"pPr" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.in_properties = true;
                }
            }
            b"r" if self.paragraph.is_some() => self.run = Some(Run::default()),
            b"t" => self.in_text = self.run.is_some(),
            _ => self.property(e),
        }
    }

    fn empty(&mut self, e: &BytesStart) {
        if self.skip_depth > 0 {
            return;
        }
        match e.local_name().as_ref() {
            b"tab" => self.push_text("\t"),
            b"br" | b"cr" => self.push_text("\n"),
            b"p" => {
                self.paragraph = Some(ParagraphState::default());
                self.end_paragraph();
            }
            _ => self.property(e),
        }
    }

    /// Paragraph and run properties that may appear as empty or start tags.
    fn property(&mut self, e: &BytesStart) {
        match e.local_name().as_ref() {
            b"b" => {
                if let Some(run) = self.run.as_mut() {
                    run.bold = is_on(e);
                }
            }
            b"pStyle" | b"jc" if self.run.is_none() => {
                let Some(p) = self.paragraph.as_mut().filter(|p| p.in_properties) else {
                    return;
                };
                let Some(val) = get_attribute(e, "val") else {
                    return;
                };
                if e.local_name().as_ref() == b"pStyle" {
                    p.style = self.styles.get(&val).cloned().unwrap_or(val);
                } else {
                    p.alignment = Some(val);
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, e: &quick_xml::events::BytesEnd) {
        match e.local_name().as_ref() {
            b"txbxContent" => self.skip_depth = self.skip_depth.saturating_sub(1),
            _ if self.skip_depth > 0 => {}
            b"t" => self.in_text = false,
            b"r" => {
                if let (Some(run), Some(p)) = (self.run.take(), self.paragraph.as_mut()) {
                    if !run.text.is_empty() {
                        p.runs.push(run);
                    }
                }
            }
            b"pPr" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.in_properties = false;
                }
            }
            b"p" => self.end_paragraph(),
            b"tc" => {
                if let Some(Container::Blocks(blocks)) = self.stack.pop() {
                    if let Some(Container::Row(cells)) = self.stack.last_mut() {
                        cells.push(Cell { blocks });
                    }
                }
            }
            b"tr" => {
                if let Some(Container::Row(cells)) = self.stack.pop() {
                    if let Some(Container::Table(rows)) = self.stack.last_mut() {
                        rows.push(cells);
                    }
                }
            }
            b"tbl" => {
                if let Some(Container::Table(rows)) = self.stack.pop() {
                    self.push_block(Block::Table(Table { rows }));
                }
            }
            _ => {}
        }
    }

    fn end_paragraph(&mut self) {
        if let Some(p) = self.paragraph.take() {
            let paragraph = Paragraph::from_runs(p.runs, p.style, p.alignment);
            self.push_block(Block::Paragraph(paragraph));
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        }
    }

    fn finish(mut self) -> Result<Body> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(Container::Blocks(blocks)), true) => Ok(Body { blocks }),
            _ => Err(Error::Parse {
                format: "docx",
                reason: "unbalanced table markup".to_string(),
            }),
        }
    }
}

fn parse_document(xml: &str, styles: &HashMap<String, String>) -> Result<Body> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut builder = BodyBuilder::new(styles);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => builder.start(e),
            Event::Empty(ref e) => builder.empty(e),
            Event::End(ref e) => builder.end(e),
            Event::Text(e) => {
                if builder.in_text && builder.skip_depth == 0 {
                    builder.push_text(&e.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    builder.finish()
}

#[cfg(test)]
#[path = "../tests/docx.rs"]
mod tests;
