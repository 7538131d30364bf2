//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classify::VoteMode;
use crate::cluster::DEFAULT_PRECISION;
use crate::similarity::DEFAULT_TOP_K;
use crate::text::{DEFAULT_NUMERIC_PATTERN, DEFAULT_WORD_PATTERN};

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Index field whose term vectors are analyzed
    #[serde(default = "default_field")]
    pub field: String,

    /// Links kept per source document in the similarity matrix
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Decimal digits kept when recording cluster extremes
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Score matrix sources on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Vote policy of the classifier
    #[serde(default)]
    pub vote_mode: VoteMode,

    /// Term must match this pattern somewhere to be kept
    #[serde(default = "default_word_pattern")]
    pub word_pattern: String,

    /// Terms matching this pattern anywhere are dropped
    #[serde(default = "default_numeric_pattern")]
    pub numeric_pattern: String,

    #[serde(default)]
    pub stop_words: StopWordConfig,
}

/// Stop-word sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopWordConfig {
    /// Built-in lists to enable
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Extra newline-separated word lists. Relative paths resolve against
    /// the directory of the config file.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl Default for StopWordConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            files: Vec::new(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            field: default_field(),
            top_k: default_top_k(),
            precision: default_precision(),
            parallel: default_parallel(),
            vote_mode: VoteMode::default(),
            word_pattern: default_word_pattern(),
            numeric_pattern: default_numeric_pattern(),
            stop_words: StopWordConfig::default(),
        }
    }
}

fn default_field() -> String {
    "text".to_string()
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_parallel() -> bool {
    true
}

fn default_word_pattern() -> String {
    DEFAULT_WORD_PATTERN.to_string()
}

fn default_numeric_pattern() -> String {
    DEFAULT_NUMERIC_PATTERN.to_string()
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string(), "de".to_string()]
}
