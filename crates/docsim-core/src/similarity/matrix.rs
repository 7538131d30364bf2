//! Top-K similarity graph over a corpus
//!
//! Built in three phases:
//! 1. score every ordered pair and keep each source's K best links
//!    (independent per source, run on the rayon pool when enabled)
//! 2. reduce the per-source maxima to one global maximum over all pairs
//! 3. divide every kept link by that maximum, flooring at 0
//!
//! Phase 2 only starts once phase 1 has been collected, which is the single
//! synchronization point between workers.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pseudo_cosine_score;
use crate::trace_time;
use crate::vector::DocumentVector;

/// Links kept per source document
pub const DEFAULT_TOP_K: usize = 10;

/// A directed, scored edge between two documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

impl DistanceLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>, value: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value,
        }
    }
}

/// Ordered sequence of links, grouped by source in corpus order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMatrix {
    links: Vec<DistanceLink>,
}

impl DistanceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_links(links: Vec<DistanceLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[DistanceLink] {
        &self.links
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DistanceLink> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Outgoing links of one document, best first
    pub fn links_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a DistanceLink> {
        self.links.iter().filter(move |link| link.source == source)
    }
}

impl<'a> IntoIterator for &'a DistanceMatrix {
    type Item = &'a DistanceLink;
    type IntoIter = std::slice::Iter<'a, DistanceLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

/// Result of scoring one source document against the rest of the corpus
struct SourceLinks {
    kept: Vec<DistanceLink>,
    max: f64,
}

/// Builds normalized top-K similarity matrices
#[derive(Debug, Clone, Copy)]
pub struct MatrixBuilder {
    top_k: usize,
    parallel: bool,
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            parallel: true,
        }
    }
}

impl MatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Build the matrix. Corpora of fewer than two documents, and corpora where
    /// no pair scores above zero, produce an empty matrix.
    pub fn build(&self, vectors: &[DocumentVector]) -> DistanceMatrix {
        let start = Instant::now();

        if vectors.len() < 2 {
            debug!(documents = vectors.len(), "build_matrix: corpus too small");
            return DistanceMatrix::new();
        }

        let scored: Vec<SourceLinks> = if self.parallel {
            (0..vectors.len())
                .into_par_iter()
                .map(|i| self.score_source(vectors, i))
                .collect()
        } else {
            (0..vectors.len())
                .map(|i| self.score_source(vectors, i))
                .collect()
        };
        trace_time!(start, "build_matrix_score", documents = vectors.len());

        let global_max = scored.iter().map(|s| s.max).fold(0.0, f64::max);
        if global_max <= 0.0 {
            debug!(documents = vectors.len(), "build_matrix: no positive score");
            return DistanceMatrix::new();
        }

        let links: Vec<DistanceLink> = scored
            .into_iter()
            .flat_map(|source| source.kept)
            .map(|mut link| {
                let value = link.value / global_max;
                // Negative weights can score below zero; the graph stays in [0, 1]
                link.value = if value > 0.0 { value } else { 0.0 };
                link
            })
            .collect();

        debug!(
            documents = vectors.len(),
            pairs = vectors.len() * (vectors.len() - 1),
            links = links.len(),
            global_max,
            parallel = self.parallel,
            "build_matrix"
        );

        DistanceMatrix::from_links(links)
    }

    fn score_source(&self, vectors: &[DocumentVector], i: usize) -> SourceLinks {
        let source = &vectors[i];
        let mut max = 0.0_f64;

        let mut links: Vec<DistanceLink> = vectors
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, target)| {
                let value = pseudo_cosine_score(&source.vector, &target.vector);
                max = max.max(value);
                DistanceLink::new(source.id.clone(), target.id.clone(), value)
            })
            .collect();

        // Stable: equal scores keep generation order
        links.sort_by(|a, b| b.value.total_cmp(&a.value));
        links.truncate(self.top_k);

        SourceLinks { kept: links, max }
    }
}
