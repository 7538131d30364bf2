//! TF-IDF term vectors
//!
//! Converts per-field term statistics from the index into sparse weight maps.
//! Weights use `tf * ln(docCount / (1 + df))`, so terms that occur in every
//! document get a negative weight. That is expected and kept as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{DocumentRecord, FieldTermVector};
use crate::text::TermFilter;

/// Sparse term weights. Absent terms weigh 0.
///
/// Ordered by term so that sums over a vector are reproducible bit for bit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVector {
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: impl Into<String>, weight: f64) {
        self.weights.insert(term.into(), weight);
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, weight)| (term.as_str(), *weight))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Returns the top N terms by weight, heaviest first
    pub fn top_terms(&self, n: usize) -> Vec<(&str, f64)> {
        let mut terms: Vec<_> = self.iter().collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1));
        terms.truncate(n);
        terms
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for TermVector {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(t, w)| (t.into(), w)).collect(),
        }
    }
}

/// A document's id and its TF-IDF vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentVector {
    pub id: String,
    pub vector: TermVector,
}

/// A labeled document. The vector may be empty when only the label lookup is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedDocument {
    pub id: String,
    pub classification: String,
    #[serde(default)]
    pub vector: TermVector,
}

impl ClassifiedDocument {
    pub fn new(id: impl Into<String>, classification: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classification: classification.into(),
            vector: TermVector::new(),
        }
    }

    pub fn with_vector(mut self, vector: TermVector) -> Self {
        self.vector = vector;
        self
    }
}

/// TF-IDF weight of a term: `tf * ln(docCount / (1 + df))`
pub fn calc_tf_idf(term_freq: f64, doc_freq: f64, doc_count: f64) -> f64 {
    let inverse_doc_freq = (doc_count / (1.0 + doc_freq)).ln();
    term_freq * inverse_doc_freq
}

/// Builds TF-IDF vectors from index term statistics
#[derive(Debug, Clone, Default)]
pub struct VectorBuilder {
    filter: TermFilter,
}

impl VectorBuilder {
    pub fn new(filter: TermFilter) -> Self {
        Self { filter }
    }

    /// Weight every accepted term of one field
    pub fn build_vector(&self, field: &FieldTermVector) -> TermVector {
        let doc_count = field.field_statistics.doc_count as f64;

        field
            .terms
            .iter()
            .filter(|(term, _)| self.filter.accepts(term))
            .map(|(term, stats)| {
                (
                    term.clone(),
                    calc_tf_idf(stats.term_freq, stats.doc_freq, doc_count),
                )
            })
            .collect()
    }

    /// Build vectors for every document that carries statistics for `field`.
    ///
    /// Documents without the field are skipped; that is not an error.
    pub fn build_vectors(&self, documents: &[DocumentRecord], field: &str) -> Vec<DocumentVector> {
        let vectors: Vec<DocumentVector> = documents
            .iter()
            .filter_map(|doc| {
                doc.field(field).map(|stats| DocumentVector {
                    id: doc.id.clone(),
                    vector: self.build_vector(stats),
                })
            })
            .collect();

        debug!(
            field,
            documents = documents.len(),
            vectors = vectors.len(),
            skipped = documents.len() - vectors.len(),
            "build_vectors"
        );

        vectors
    }

    /// Build labeled vectors for documents that have both the field and a classification
    pub fn build_classified(
        &self,
        documents: &[DocumentRecord],
        field: &str,
    ) -> Vec<ClassifiedDocument> {
        documents
            .iter()
            .filter_map(|doc| {
                let classification = doc.classification.as_ref()?;
                let stats = doc.field(field)?;
                Some(ClassifiedDocument {
                    id: doc.id.clone(),
                    classification: classification.clone(),
                    vector: self.build_vector(stats),
                })
            })
            .collect()
    }
}
