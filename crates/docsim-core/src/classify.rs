//! Label prediction by similarity voting
//!
//! Every labeled neighbor votes for its label with its pseudo-cosine score
//! against the target document. Two vote modes exist:
//! - `raw`: scores are summed as computed
//! - `normalized`: scores are first divided by the largest neighbor score
//!   of this call, so each vote lies in `(-inf, 1]`

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocsimError, Result};
use crate::similarity::pseudo_cosine_score;
use crate::vector::TermVector;

/// How neighbor scores are combined into votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteMode {
    /// Sum raw scores
    #[default]
    Raw,
    /// Divide by the maximum neighbor score before summing
    Normalized,
}

impl FromStr for VoteMode {
    type Err = DocsimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(VoteMode::Raw),
            "normalized" => Ok(VoteMode::Normalized),
            other => Err(DocsimError::unsupported("vote mode", other, "raw, normalized")),
        }
    }
}

impl fmt::Display for VoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteMode::Raw => write!(f, "raw"),
            VoteMode::Normalized => write!(f, "normalized"),
        }
    }
}

/// Accumulated vote for one label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub name: String,
    pub score: f64,
}

/// Anything carrying a term vector can be a neighbor
pub trait Neighbor {
    fn vector(&self) -> &TermVector;
}

impl Neighbor for TermVector {
    fn vector(&self) -> &TermVector {
        self
    }
}

impl Neighbor for crate::vector::DocumentVector {
    fn vector(&self) -> &TermVector {
        &self.vector
    }
}

impl Neighbor for crate::vector::ClassifiedDocument {
    fn vector(&self) -> &TermVector {
        &self.vector
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    mode: VoteMode,
}

impl Classifier {
    pub fn new(mode: VoteMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> VoteMode {
        self.mode
    }

    /// Score every label named in `labels`; `labels[i]` belongs to `neighbors[i]`.
    ///
    /// Labels without votes stay at 0. Mismatched lengths are rejected.
    pub fn predict<N: Neighbor>(
        &self,
        target: &TermVector,
        neighbors: &[N],
        labels: &[String],
    ) -> Result<BTreeMap<String, Prediction>> {
        if neighbors.len() != labels.len() {
            return Err(DocsimError::LengthMismatch {
                neighbors: neighbors.len(),
                labels: labels.len(),
            });
        }

        let mut scores: Vec<f64> = neighbors
            .iter()
            .map(|n| pseudo_cosine_score(target, n.vector()))
            .collect();

        if self.mode == VoteMode::Normalized {
            let max = scores.iter().copied().fold(0.0, f64::max);
            // Nothing positive to scale by; keep the raw votes
            if max > 0.0 {
                for score in &mut scores {
                    *score /= max;
                }
            }
        }

        let mut predictions: BTreeMap<String, Prediction> = labels
            .iter()
            .map(|label| {
                (
                    label.clone(),
                    Prediction {
                        name: label.clone(),
                        score: 0.0,
                    },
                )
            })
            .collect();

        for (score, label) in scores.iter().zip(labels) {
            if let Some(prediction) = predictions.get_mut(label) {
                prediction.score += score;
            }
        }

        debug!(
            neighbors = neighbors.len(),
            labels = predictions.len(),
            mode = %self.mode,
            "predict"
        );

        Ok(predictions)
    }
}

/// [`Classifier::predict`] in raw mode
pub fn predict<N: Neighbor>(
    target: &TermVector,
    neighbors: &[N],
    labels: &[String],
) -> Result<BTreeMap<String, Prediction>> {
    Classifier::default().predict(target, neighbors, labels)
}

/// Highest-scoring label. Ties go to the label that appears first in `labels`.
pub fn best_label<'a>(
    predictions: &'a BTreeMap<String, Prediction>,
    labels: &[String],
) -> Option<&'a Prediction> {
    let mut best: Option<&Prediction> = None;
    for label in labels {
        let Some(candidate) = predictions.get(label) else {
            continue;
        };
        if best.map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(weights: &[(&str, f64)]) -> TermVector {
        weights.iter().map(|(t, w)| (*t, *w)).collect()
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fixture() -> (TermVector, Vec<TermVector>) {
        let doc1 = vector(&[
            ("hallo", 3.5),
            ("ich", 2.5),
            ("bin", 3.8),
            ("ein", 1.2),
            ("test", 2.5),
        ]);
        let doc2 = vector(&[
            ("hallo", 1.5),
            ("ich", 3.5),
            ("bin", 2.8),
            ("ein", 4.2),
            ("test", 3.5),
        ]);
        let doc3 = vector(&[
            ("hallo", 0.9),
            ("ich", 2.9),
            ("bin", 1.8),
            ("ein", 2.2),
            ("test", 4.5),
        ]);
        (doc1, vec![doc2, doc3])
    }

    #[test]
    fn test_predict_raw_sums_scores() {
        let (target, neighbors) = fixture();
        let labels = labels(&["class1", "class2"]);

        let predictions = predict(&target, &neighbors, &labels).unwrap();
        let keys: Vec<&str> = predictions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["class1", "class2"]);

        let expected: f64 = neighbors
            .iter()
            .map(|n| pseudo_cosine_score(&target, n))
            .sum();
        let total: f64 = predictions.values().map(|p| p.score).sum();
        assert!(predictions.values().all(|p| p.score.is_finite()));
        assert!((total - expected).abs() < 1e-12);
        assert_eq!(predictions["class1"].name, "class1");
    }

    #[test]
    fn test_predict_length_mismatch() {
        let (target, neighbors) = fixture();
        let err = predict(&target, &neighbors, &labels(&["class1"])).unwrap_err();
        assert!(matches!(
            err,
            DocsimError::LengthMismatch {
                neighbors: 2,
                labels: 1
            }
        ));
    }

    #[test]
    fn test_predict_accumulates_per_label() {
        let target = vector(&[("x", 1.0)]);
        let neighbors = vec![
            vector(&[("x", 1.0)]),
            vector(&[("x", 2.0)]),
            vector(&[("y", 5.0)]),
        ];
        let labels = labels(&["a", "a", "b"]);

        let predictions = predict(&target, &neighbors, &labels).unwrap();
        assert_eq!(predictions.len(), 2);
        assert!((predictions["a"].score - 3.0).abs() < 1e-12);
        assert_eq!(predictions["b"].score, 0.0);
    }

    #[test]
    fn test_predict_normalized_divides_by_max() {
        let target = vector(&[("x", 1.0)]);
        let neighbors = vec![vector(&[("x", 4.0)]), vector(&[("x", 2.0)])];
        let labels = labels(&["a", "b"]);

        let predictions = Classifier::new(VoteMode::Normalized)
            .predict(&target, &neighbors, &labels)
            .unwrap();
        assert!((predictions["a"].score - 1.0).abs() < 1e-12);
        assert!((predictions["b"].score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_mode_scales_votes() {
        let target = vector(&[("x", 1.0)]);
        let neighbors = vec![
            vector(&[("x", 10.0)]),
            vector(&[("x", 6.0)]),
            vector(&[("x", 6.0)]),
        ];
        let labels = labels(&["strong", "weak", "weak"]);

        let raw = Classifier::new(VoteMode::Raw)
            .predict(&target, &neighbors, &labels)
            .unwrap();
        let normalized = Classifier::new(VoteMode::Normalized)
            .predict(&target, &neighbors, &labels)
            .unwrap();

        assert!((raw["strong"].score - 10.0).abs() < 1e-12);
        assert!((raw["weak"].score - 12.0).abs() < 1e-12);
        assert!((normalized["strong"].score - 1.0).abs() < 1e-12);
        assert!((normalized["weak"].score - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_without_positive_scores_keeps_raw() {
        let target = vector(&[("x", 1.0)]);
        let neighbors = vec![vector(&[("x", -2.0)])];
        let labels = labels(&["a"]);

        let predictions = Classifier::new(VoteMode::Normalized)
            .predict(&target, &neighbors, &labels)
            .unwrap();
        assert!((predictions["a"].score + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_predict_no_neighbors() {
        let target = vector(&[("x", 1.0)]);
        let neighbors: Vec<TermVector> = Vec::new();
        let predictions = predict(&target, &neighbors, &[]).unwrap();
        assert!(predictions.is_empty());
    }

    #[test]
    fn test_best_label_prefers_first_on_tie() {
        let target = vector(&[("x", 1.0)]);
        let neighbors = vec![vector(&[("x", 1.0)]), vector(&[("x", 1.0)])];
        let labels = labels(&["second", "first"]);

        let predictions = predict(&target, &neighbors, &labels).unwrap();
        let best = best_label(&predictions, &labels).unwrap();
        assert_eq!(best.name, "second");
    }

    #[test]
    fn test_vote_mode_parse() {
        assert_eq!("raw".parse::<VoteMode>().unwrap(), VoteMode::Raw);
        assert_eq!("Normalized".parse::<VoteMode>().unwrap(), VoteMode::Normalized);
        assert!("max".parse::<VoteMode>().is_err());
        assert_eq!(VoteMode::Normalized.to_string(), "normalized");
    }
}
