//! Term filtering for vector construction

pub mod stopwords;

use regex::Regex;

use crate::error::Result;
pub use stopwords::{StopWordSet, StopWords, BUILTIN_LANGUAGES};

/// Default pattern a term must match somewhere to count as a word
pub const DEFAULT_WORD_PATTERN: &str = r"\w+";

/// Default pattern that disqualifies a term when found anywhere in it
pub const DEFAULT_NUMERIC_PATTERN: &str = r"[0-9]+";

/// Decides which index terms become vector dimensions.
///
/// A term is kept when it matches the word pattern, does not match the numeric
/// pattern, and appears in none of the stop-word sets. Patterns are searched,
/// not anchored, so `[0-9]+` rejects any term containing a digit.
#[derive(Debug, Clone)]
pub struct TermFilter {
    word: Regex,
    numeric: Regex,
    stop_words: StopWords,
}

impl TermFilter {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            word: Regex::new(DEFAULT_WORD_PATTERN).expect("default word pattern is valid"),
            numeric: Regex::new(DEFAULT_NUMERIC_PATTERN).expect("default numeric pattern is valid"),
            stop_words,
        }
    }

    /// Build a filter with custom patterns
    pub fn with_patterns(stop_words: StopWords, word: &str, numeric: &str) -> Result<Self> {
        Ok(Self {
            word: Regex::new(word)?,
            numeric: Regex::new(numeric)?,
            stop_words,
        })
    }

    pub fn accepts(&self, term: &str) -> bool {
        self.word.is_match(term)
            && !self.numeric.is_match(term)
            && !self.stop_words.contains(term)
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

impl Default for TermFilter {
    fn default() -> Self {
        Self::new(StopWords::builtin())
    }
}
