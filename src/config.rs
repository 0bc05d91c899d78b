//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find an srsparser.toml, and if present we load settings from there.
//! This provides the matching thresholds, pass order, language, lexicon and store location.

use crate::engine::Settings;
use crate::error::{Error, Result};
use crate::extract::PassKind;
use crate::nlp::{DictionaryLexicon, Language, Normalizer, Scorer, SuffixLexicon};
use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "srsparser.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from srsparser.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 0.5)]
    /// Similarity at which a paragraph or pre-colon fragment counts as a heading.
    pub heading_threshold: f64,
    #[facet(default = 0.6)]
    /// Stricter heading similarity used by the colon-grouping pass.
    pub contains_heading_threshold: f64,
    #[facet(default = 0.5)]
    /// Similarity at which extracted text is assigned to a leaf.
    pub fill_threshold: f64,
    #[facet(default = "later-wins".to_string())]
    /// `later-wins` or `keep-first`.
    pub overwrite: String,
    #[facet(default = vec!["colon-split".to_string(), "positional".to_string()])]
    /// Extraction passes in run order.
    pub passes: Vec<String>,
    #[facet(default = "\n".to_string())]
    /// Separator between paragraphs grouped under one heading.
    pub joiner: String,
    #[facet(default = true)]
    /// Append a period to grouped paragraphs lacking final punctuation.
    pub terminate_sentences: bool,
    #[facet(default = "ru".to_string())]
    /// Document language, `ru` or `en`.
    pub language: String,
    #[facet(default = String::new())]
    /// Optional TSV morphological dictionary; empty for the built-in rules.
    pub lexicon_path: String,
    #[facet(default = "store".to_string())]
    /// Directory of the JSON store.
    pub store_dir: String,
    #[facet(default = "default".to_string())]
    /// Template used when none is named on the command line.
    pub default_template: String,
}

impl Default for Config {
    /// The field defaults declared above, as read from an empty file.
    fn default() -> Self {
        facet_toml::from_str::<Self>("").expect("empty configuration takes the field defaults")
    }
}

impl Config {
    #[must_use]
    /// Load configuration from srsparser.toml if present.
    ///
    /// A malformed file is reported and ignored.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring {CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicitly requested file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML or out-of-range values.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config = facet_toml::from_str::<Self>(contents)
            .map_err(|e| Error::Config(e.to_string()))?;
        config.settings()?;
        config.language()?;
        Ok(config)
    }

    /// Engine settings with names resolved to their enums.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for unknown pass or policy names and thresholds
    /// outside `[0, 1]`.
    pub fn settings(&self) -> Result<Settings> {
        for (key, value) in [
            ("heading_threshold", self.heading_threshold),
            ("contains_heading_threshold", self.contains_heading_threshold),
            ("fill_threshold", self.fill_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!("{key} must be within [0, 1], got {value}")));
            }
        }
        let passes = self
            .passes
            .iter()
            .map(|p| p.parse::<PassKind>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Config)?;
        Ok(Settings {
            heading_threshold: self.heading_threshold,
            contains_heading_threshold: self.contains_heading_threshold,
            fill_threshold: self.fill_threshold,
            overwrite: self.overwrite.parse().map_err(Error::Config)?,
            passes,
            joiner: self.joiner.clone(),
            terminate_sentences: self.terminate_sentences,
        })
    }

    /// Configured document language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown language code.
    pub fn language(&self) -> Result<Language> {
        self.language.parse().map_err(Error::Config)
    }

    /// Scorer for the configured language, backed by the dictionary when one is set.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown language or an unreadable dictionary.
    pub fn scorer(&self) -> Result<Scorer> {
        let language = self.language()?;
        if self.lexicon_path.is_empty() {
            return Ok(Scorer::for_language(language));
        }
        let fallback = Box::new(SuffixLexicon::new(language));
        let lexicon = DictionaryLexicon::load(Path::new(&self.lexicon_path), fallback)?;
        log::info!("Loaded {} word forms from {}", lexicon.len(), self.lexicon_path);
        Ok(Scorer::new(Normalizer::with_lexicon(language, Box::new(lexicon))))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
