//! Persistent store for section-tree templates and reconciliation results.
//!
//! [`JsonStore`] keeps two JSON files in a directory:
//!
//! - `templates.json`: `[{"name": ..., "structure": {...}}]`
//! - `results.json`: `[{"document_name": ..., "structure": {...}}]`

use crate::error::{Error, Result};
use crate::section::SectionNode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of templates and sink of filled results.
pub trait Store {
    /// Template stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such template.
    fn load_template(&self, name: &str) -> Result<SectionNode>;

    /// Store `structure` under `document_name`, replacing any earlier result.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save_result(&self, document_name: &str, structure: &SectionNode) -> Result<()>;

    /// Result stored under `document_name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such result.
    fn load_result(&self, document_name: &str) -> Result<SectionNode>;
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A named template.
pub struct TemplateRecord {
    /// Template name, e.g. the document type.
    pub name: String,
    /// Section tree with empty leaves.
    pub structure: SectionNode,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A filled tree for one document.
pub struct ResultRecord {
    /// Name of the source document.
    pub document_name: String,
    /// Pruned section tree.
    pub structure: SectionNode,
}

/// Directory of JSON files standing in for a document database.
pub struct JsonStore {
    dir: PathBuf,
}

const TEMPLATES_FILE: &str = "templates.json";
const RESULTS_FILE: &str = "results.json";

impl JsonStore {
    #[must_use]
    /// Store rooted at `dir`; files are created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    /// Directory holding the store files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_records<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_records<T: Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.dir.join(file), json)?;
        Ok(())
    }

    /// All templates.
    ///
    /// # Errors
    ///
    /// Returns an error if `templates.json` exists but cannot be read.
    pub fn templates(&self) -> Result<Vec<TemplateRecord>> {
        self.read_records(TEMPLATES_FILE)
    }

    /// Add or replace the template called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTemplate`] for a malformed structure, or an IO error.
    pub fn save_template(&self, name: &str, structure: &SectionNode) -> Result<()> {
        structure.validate()?;
        let mut records = self.templates()?;
        let record = TemplateRecord {
            name: name.to_string(),
            structure: structure.clone(),
        };
        match records.iter_mut().find(|r| r.name == name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        self.write_records(TEMPLATES_FILE, &records)
    }

    /// All stored results.
    ///
    /// # Errors
    ///
    /// Returns an error if `results.json` exists but cannot be read.
    pub fn results(&self) -> Result<Vec<ResultRecord>> {
        self.read_records(RESULTS_FILE)
    }
}

impl Store for JsonStore {
    fn load_template(&self, name: &str) -> Result<SectionNode> {
        self.templates()?
            .into_iter()
            .find(|r| r.name == name)
            .map(|r| r.structure)
            .ok_or_else(|| Error::NotFound {
                kind: "template",
                name: name.to_string(),
            })
    }

    fn save_result(&self, document_name: &str, structure: &SectionNode) -> Result<()> {
        let mut records = self.results()?;
        let record = ResultRecord {
            document_name: document_name.to_string(),
            structure: structure.clone(),
        };
        match records.iter_mut().find(|r| r.document_name == document_name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        log::debug!("Saving result for {document_name} to {}", self.dir.display());
        self.write_records(RESULTS_FILE, &records)
    }

    fn load_result(&self, document_name: &str) -> Result<SectionNode> {
        self.results()?
            .into_iter()
            .find(|r| r.document_name == document_name)
            .map(|r| r.structure)
            .ok_or_else(|| Error::NotFound {
                kind: "result",
                name: document_name.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "tests/store.rs"]
mod tests;
