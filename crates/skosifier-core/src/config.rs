//! Run configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::emit::RdfFormat;
use crate::error::{Error, Result};
use crate::header::HeaderClassifier;
use crate::scheme::is_absolute_iri;

/// Everything one conversion run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Delimited input file.
    pub input: PathBuf,
    /// Output directory, created if missing.
    pub output_dir: PathBuf,
    /// IRI prefix used to mint concept IRIs.
    pub base_iri: String,
    /// Whole-graph formats to write.
    #[serde(default = "default_formats")]
    pub formats: Vec<RdfFormat>,
    /// Also write one artifact per concept for every format.
    #[serde(default)]
    pub per_concept: bool,
    /// Also write the HTML table views.
    #[serde(default)]
    pub html: bool,
    /// Field delimiter of the input.
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,
    /// Fixed set of four label languages.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

fn default_formats() -> Vec<RdfFormat> {
    vec![RdfFormat::NTriples, RdfFormat::Turtle]
}

fn default_delimiter() -> u8 {
    defaults::DELIMITER
}

fn default_languages() -> Vec<String> {
    defaults::LANGUAGES.iter().map(|s| s.to_string()).collect()
}

impl Config {
    pub fn new(
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        base_iri: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            base_iri: base_iri.into(),
            formats: default_formats(),
            per_concept: false,
            html: false,
            delimiter: default_delimiter(),
            languages: default_languages(),
        }
    }

    pub fn with_formats(mut self, formats: Vec<RdfFormat>) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_per_concept(mut self, per_concept: bool) -> Self {
        self.per_concept = per_concept;
        self
    }

    pub fn with_html(mut self, html: bool) -> Self {
        self.html = html;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.base_iri.is_empty() {
            return Err(Error::Config("base IRI must not be empty".to_string()));
        }
        if !is_absolute_iri(&self.base_iri) {
            return Err(Error::Config(format!(
                "base IRI {:?} is not an absolute IRI",
                self.base_iri
            )));
        }
        if self.formats.is_empty() {
            return Err(Error::Config("at least one output format is required".to_string()));
        }
        if self.languages.len() != defaults::LANGUAGES.len() {
            return Err(Error::Config(format!(
                "expected {} language codes, got {}",
                defaults::LANGUAGES.len(),
                self.languages.len()
            )));
        }
        if let Some(bad) = self
            .languages
            .iter()
            .find(|l| l.is_empty() || !l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
        {
            return Err(Error::Config(format!("invalid language code {:?}", bad)));
        }
        Ok(())
    }

    /// Header classifier for the configured languages.
    pub fn classifier(&self) -> HeaderClassifier {
        HeaderClassifier::new(self.languages.iter().cloned())
    }
}
