//! srsparser: reconcile requirements-specification documents against a section template.
//!
//! A template describes the expected outline of a document type as a tree of
//! named sections. [`engine::Reconciler`] walks the paragraphs of one document,
//! spots heading candidates by typography and by resemblance to the template's
//! leaf names, and assigns the text found under each heading to the best-matching
//! leaf. The result is the template with unfilled leaves pruned away.
//!
//! ```no_run
//! use srsparser::config::Config;
//! use srsparser::engine::Reconciler;
//! use srsparser::store::{JsonStore, Store};
//! use std::path::Path;
//!
//! # fn main() -> srsparser::Result<()> {
//! let config = Config::load();
//! let scorer = config.scorer()?;
//! let store = JsonStore::new(&config.store_dir);
//! let template = store.load_template(&config.default_template)?;
//! let body = srsparser::formats::read_document(Path::new("srs.docx"), None)?;
//! let result = Reconciler::new(&template, &scorer, &config.settings()?)?.run(&body);
//! store.save_result("srs.docx", &result)?;
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod extract;
pub mod fill;
pub mod formats;
pub mod matcher;
pub mod nlp;
pub mod outline;
pub mod section;
pub mod store;

pub use error::{Error, Result};
