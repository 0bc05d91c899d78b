//! Serialized document bodies, for paragraph sources outside the crate.

use crate::document::Body;
use crate::error::Result;
use crate::formats::Format;

/// A [`Body`] stored as JSON.
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn parse(&self, bytes: &[u8]) -> Result<Body> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
