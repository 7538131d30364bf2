//! Pairwise scoring of sparse term vectors
//!
//! Two functions are provided: a true Euclidean distance and the pseudo-cosine
//! score the rest of the crate is built on. The pseudo-cosine is a raw dot
//! product over shared terms scaled by `1 / sqrt(|union of terms|)`. It is not
//! divided by the vector norms, and downstream thresholds depend on that.

mod matrix;

pub use matrix::{DistanceLink, DistanceMatrix, MatrixBuilder, DEFAULT_TOP_K};

use std::collections::BTreeSet;

use crate::vector::TermVector;

/// Every term present in either vector
fn key_union<'a>(a: &'a TermVector, b: &'a TermVector) -> BTreeSet<&'a str> {
    a.terms().chain(b.terms()).collect()
}

/// Euclidean distance over the union of terms, absent terms counting as 0
pub fn euclidean_distance(a: &TermVector, b: &TermVector) -> f64 {
    key_union(a, b)
        .into_iter()
        .map(|term| {
            let diff = a.get(term).unwrap_or(0.0) - b.get(term).unwrap_or(0.0);
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Dot product over shared terms divided by the square root of the union size.
///
/// Returns 0.0 when both vectors are empty.
pub fn pseudo_cosine_score(a: &TermVector, b: &TermVector) -> f64 {
    let union = key_union(a, b);
    if union.is_empty() {
        return 0.0;
    }

    let sum: f64 = union
        .iter()
        .filter_map(|term| match (a.get(term), b.get(term)) {
            (Some(wa), Some(wb)) => Some(wa * wb),
            _ => None,
        })
        .fold(0.0, |acc, x| acc + x);

    sum / (union.len() as f64).sqrt()
}

#[cfg(test)]
mod tests;
