//! Input document records
//!
//! Documents arrive as term-vector responses from a search index: per field,
//! the corpus document count plus per-term frequency statistics. Files may hold
//! either a bare JSON array of records or an object with a `docs` array.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocsimError, Result};

/// Statistics for a single term within one document field
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TermStats {
    /// Occurrences of the term in this document
    pub term_freq: f64,
    /// Number of corpus documents containing the term
    #[serde(default)]
    pub doc_freq: f64,
}

/// Field-level corpus statistics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldStatistics {
    /// Number of documents in the corpus that have this field
    pub doc_count: u64,
}

/// Term statistics for one field of one document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldTermVector {
    pub field_statistics: FieldStatistics,
    #[serde(default)]
    pub terms: BTreeMap<String, TermStats>,
}

/// A raw document record as produced by the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub term_vectors: BTreeMap<String, FieldTermVector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
}

impl DocumentRecord {
    /// Term statistics for `field`, if the index returned any
    pub fn field(&self, field: &str) -> Option<&FieldTermVector> {
        self.term_vectors.get(field)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentFile {
    List(Vec<DocumentRecord>),
    Envelope { docs: Vec<DocumentRecord> },
}

/// Parse documents from a JSON string. `origin` is only used for error messages.
pub fn parse_documents(content: &str, origin: &Path) -> Result<Vec<DocumentRecord>> {
    let file: DocumentFile =
        serde_json::from_str(content).map_err(|e| DocsimError::InvalidInput {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

    let docs = match file {
        DocumentFile::List(docs) => docs,
        DocumentFile::Envelope { docs } => docs,
    };

    tracing::debug!(path = %origin.display(), documents = docs.len(), "parse_documents");
    Ok(docs)
}

/// Load documents from a JSON file
pub fn load_documents(path: &Path) -> Result<Vec<DocumentRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| DocsimError::io_operation("read", path.display(), e))?;
    parse_documents(&content, path)
}
