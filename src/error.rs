//! Error types for template handling, document adapters and the result store.
//!
//! Reconciliation itself never fails once a valid template is loaded: unmatched
//! headings are dropped and empty inputs score zero. Everything that can go wrong
//! lives at the edges and is collected here.

/// Result type alias for srsparser operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading inputs or persisting results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Template breaks the leaf-or-children invariant.
    #[error("invalid template at {path}: {reason}")]
    InvalidTemplate {
        /// Slash-separated section names leading to the offending node.
        path: String,
        /// What is wrong with the node.
        reason: String,
    },

    /// Named template or result is absent from the store.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// Kind of object looked up ("template" or "result").
        kind: &'static str,
        /// Name that was looked up.
        name: String,
    },

    /// No adapter is registered for the requested format.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Document could not be turned into paragraphs.
    #[error("failed to parse {format} document: {reason}")]
    Parse {
        /// Adapter that failed.
        format: &'static str,
        /// Reason for the failure.
        reason: String,
    },

    /// Configuration file could not be read or has invalid values.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML error inside a DOCX part
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

#[cfg(test)]
#[path = "tests/error.rs"]
mod tests;
