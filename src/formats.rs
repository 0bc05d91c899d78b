//! Format trait and implementations for different document types.
//!
//! Each format turns the raw bytes of a file into a [`Body`] of paragraphs and
//! tables. The engine never sees the source format; it only walks the body.

pub mod docx;
pub mod json;
pub mod markdown;

use crate::document::Body;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// A document source adapter.
pub trait Format {
    /// Name used to select the format explicitly.
    fn name(&self) -> &'static str;
    /// File suffixes (lower-case, without the dot) handled by this format.
    fn extensions(&self) -> &'static [&'static str];
    /// Parse a whole file into a document body.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid document of this format.
    fn parse(&self, bytes: &[u8]) -> Result<Body>;
}

const FORMATS: &[&dyn Format] = &[
    &docx::DocxFormat,
    &markdown::MarkdownFormat,
    &json::JsonFormat,
];

#[must_use]
/// All built-in formats.
pub fn all() -> &'static [&'static dyn Format] {
    FORMATS
}

/// Look up a format by name.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown names.
pub fn by_name(name: &str) -> Result<&'static dyn Format> {
    let wanted = name.trim().to_lowercase();
    FORMATS
        .iter()
        .copied()
        .find(|f| f.name() == wanted || f.extensions().contains(&wanted.as_str()))
        .ok_or_else(|| Error::UnsupportedFormat(name.to_string()))
}

/// Pick a format from the file extension of `path`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the extension is missing or unknown.
pub fn for_path(path: &Path) -> Result<&'static dyn Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
    FORMATS
        .iter()
        .copied()
        .find(|f| f.extensions().contains(&ext.as_str()))
        .ok_or(Error::UnsupportedFormat(ext))
}

/// Read and parse the document at `path`, by `format` name or else by extension.
///
/// # Errors
///
/// Returns an error if the format cannot be determined, the file cannot be
/// read, or parsing fails.
pub fn read_document(path: &Path, format: Option<&str>) -> Result<Body> {
    let format = match format {
        Some(name) => by_name(name)?,
        None => for_path(path)?,
    };
    let bytes = fs::read(path)?;
    log::debug!("Parsing {} as {}", path.display(), format.name());
    format.parse(&bytes)
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
