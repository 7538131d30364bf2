//! Stop-word dictionaries
//!
//! Stop words are injected into the vector builder rather than consulted as
//! globals. The built-in English and German lists are conveniences; callers can
//! replace or extend them with word lists loaded from files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::bail_unsupported;
use crate::error::{DocsimError, Result};

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had",
    "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her",
    "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd",
    "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself",
    "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over",
    "own", "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so",
    "some", "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't",
    "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when",
    "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's",
    "with", "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your",
    "yours", "yourself", "yourselves",
];

const GERMAN: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
    "andere", "anderem", "anderen", "anderer", "anderes", "anderm", "andern", "anders", "auch",
    "auf", "aus", "bei", "bin", "bis", "bist", "da", "damit", "dann", "das", "dass", "dasselbe",
    "dazu", "daß", "dein", "deine", "deinem", "deinen", "deiner", "deines", "dem", "demselben",
    "den", "denn", "denselben", "der", "derer", "derselbe", "derselben", "des", "desselben",
    "dessen", "dich", "die", "dies", "diese", "dieselbe", "dieselben", "diesem", "diesen",
    "dieser", "dieses", "dir", "doch", "dort", "du", "durch", "ein", "eine", "einem", "einen",
    "einer", "eines", "einig", "einige", "einigem", "einigen", "einiger", "einiges", "einmal",
    "er", "es", "etwas", "euch", "euer", "eure", "eurem", "euren", "eurer", "eures", "für",
    "gegen", "gewesen", "hab", "habe", "haben", "hat", "hatte", "hatten", "hier", "hin",
    "hinter", "ich", "ihm", "ihn", "ihnen", "ihr", "ihre", "ihrem", "ihren", "ihrer", "ihres",
    "im", "in", "indem", "ins", "ist", "jede", "jedem", "jeden", "jeder", "jedes", "jene",
    "jenem", "jenen", "jener", "jenes", "jetzt", "kann", "kein", "keine", "keinem", "keinen",
    "keiner", "keines", "können", "könnte", "machen", "man", "manche", "manchem", "manchen",
    "mancher", "manches", "mein", "meine", "meinem", "meinen", "meiner", "meines", "mich",
    "mir", "mit", "muss", "musste", "nach", "nicht", "nichts", "noch", "nun", "nur", "ob",
    "oder", "ohne", "sehr", "sein", "seine", "seinem", "seinen", "seiner", "seines", "selbst",
    "sich", "sie", "sind", "so", "solche", "solchem", "solchen", "solcher", "solches", "soll",
    "sollte", "sondern", "sonst", "um", "und", "uns", "unser", "unsere", "unserem", "unseren",
    "unserer", "unseres", "unter", "viel", "vom", "von", "vor", "war", "waren", "warst", "was",
    "weg", "weil", "weiter", "welche", "welchem", "welchen", "welcher", "welches", "wenn",
    "werde", "werden", "wie", "wieder", "will", "wir", "wird", "wirst", "wo", "wollen",
    "wollte", "während", "würde", "würden", "zu", "zum", "zur", "zwar", "zwischen", "über",
];

/// Language codes with a built-in stop-word list
pub const BUILTIN_LANGUAGES: &[&str] = &["en", "de"];

/// A named set of stop words for one language or source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    pub name: String,
    words: HashSet<String>,
}

impl StopWordSet {
    /// Create a set from any word iterator
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn english() -> Self {
        Self::new("en", ENGLISH.iter().copied())
    }

    pub fn german() -> Self {
        Self::new("de", GERMAN.iter().copied())
    }

    /// Built-in list for a language code
    pub fn builtin(language: &str) -> Result<Self> {
        match language {
            "en" => Ok(Self::english()),
            "de" => Ok(Self::german()),
            other => bail_unsupported!("stop-word language", other, BUILTIN_LANGUAGES.join(", ")),
        }
    }

    /// Load a newline-separated word list. Blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DocsimError::io_operation("read stop words from", path.display(), e))?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        Ok(Self::new(path.display().to_string(), words))
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Union of several stop-word sets
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    sets: Vec<StopWordSet>,
}

impl StopWords {
    /// No stop words at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_sets(sets: Vec<StopWordSet>) -> Self {
        Self { sets }
    }

    /// English and German, the two languages the corpus is expected in
    pub fn builtin() -> Self {
        Self::from_sets(vec![StopWordSet::english(), StopWordSet::german()])
    }

    pub fn with_set(mut self, set: StopWordSet) -> Self {
        self.sets.push(set);
        self
    }

    /// True if any configured set contains `term`
    pub fn contains(&self, term: &str) -> bool {
        self.sets.iter().any(|set| set.contains(term))
    }

    pub fn sets(&self) -> &[StopWordSet] {
        &self.sets
    }
}
