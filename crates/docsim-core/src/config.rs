//! Analysis configuration for docsim
//!
//! Configuration lives in a TOML file (conventionally `docsim.toml`). Every
//! key is optional; command-line flags override individual values.

pub mod types;

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::bail_invalid;
use crate::classify::Classifier;
use crate::cluster::SeparationValidator;
use crate::error::{DocsimError, Result};
use crate::similarity::MatrixBuilder;
use crate::text::{StopWordSet, StopWords, TermFilter};
use crate::vector::VectorBuilder;

pub use types::{AnalysisConfig, StopWordConfig};

/// Largest precision that still survives an f64 round trip
pub const MAX_PRECISION: u32 = 15;

impl AnalysisConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DocsimError::io_operation("read config", path.display(), e))?;
        let mut config: AnalysisConfig = toml::from_str(&content)?;

        if let Some(base) = path.parent() {
            for file in &mut config.stop_words.files {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DocsimError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values no component can work with
    pub fn validate(&self) -> Result<()> {
        if self.field.trim().is_empty() {
            bail_invalid!("field", "(empty)");
        }
        if self.top_k == 0 {
            bail_invalid!("top_k", self.top_k);
        }
        if self.precision > MAX_PRECISION {
            bail_invalid!("precision", self.precision);
        }
        for (context, pattern) in [
            ("word_pattern", &self.word_pattern),
            ("numeric_pattern", &self.numeric_pattern),
        ] {
            if let Err(e) = Regex::new(pattern) {
                bail_invalid!(context, e);
            }
        }
        for language in &self.stop_words.languages {
            StopWordSet::builtin(language)?;
        }
        Ok(())
    }

    /// Union of the configured built-in lists and word-list files
    pub fn stop_words(&self) -> Result<StopWords> {
        let mut sets = Vec::new();
        for language in &self.stop_words.languages {
            sets.push(StopWordSet::builtin(language)?);
        }
        for file in &self.stop_words.files {
            sets.push(StopWordSet::from_file(file)?);
        }
        Ok(StopWords::from_sets(sets))
    }

    pub fn term_filter(&self) -> Result<TermFilter> {
        TermFilter::with_patterns(
            self.stop_words()?,
            &self.word_pattern,
            &self.numeric_pattern,
        )
    }

    pub fn vector_builder(&self) -> Result<VectorBuilder> {
        Ok(VectorBuilder::new(self.term_filter()?))
    }

    pub fn matrix_builder(&self) -> MatrixBuilder {
        MatrixBuilder::new()
            .with_top_k(self.top_k)
            .with_parallel(self.parallel)
    }

    pub fn separation_validator(&self) -> SeparationValidator {
        SeparationValidator::new(self.precision)
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.vote_mode)
    }
}
