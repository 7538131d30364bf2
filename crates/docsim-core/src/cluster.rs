//! Cluster separation over a similarity matrix
//!
//! Given labeled documents and a [`DistanceMatrix`], records for every pair of
//! distinct labels the weakest and strongest link between them, for every label
//! its strongest internal link, and the Dunn-style ratio
//! `min(inter-cluster minimums) / max(intra-cluster maximums)`.
//!
//! Link values are rounded to a fixed number of decimal digits when recorded,
//! and every comparison and ratio afterwards works on the rounded value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similarity::{DistanceLink, DistanceMatrix};
use crate::vector::ClassifiedDocument;

/// Decimal digits kept when a link value is recorded
pub const DEFAULT_PRECISION: u32 = 8;

/// Extremes between two distinct clusters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPairResult {
    pub clusters: [String; 2],
    pub min_distance: DistanceLink,
    pub max_distance: DistanceLink,
    /// `min / max` for this pair, absent when the ratio is not finite
    pub index: Option<f64>,
}

/// Strongest link inside one cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntraClusterMax {
    #[serde(flatten)]
    pub link: DistanceLink,
    pub cluster: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DunnIndexResult {
    pub cluster_values: Vec<ClusterPairResult>,
    pub intra_cluster_maxs: Vec<IntraClusterMax>,
    pub inter_cluster_mins: Vec<f64>,
    /// Absent when either collection is empty or the ratio is not finite
    pub dunn_index: Option<f64>,
}

impl DunnIndexResult {
    pub fn is_indeterminate(&self) -> bool {
        self.dunn_index.is_none()
    }
}

/// Round the exact stored value to `digits` decimal places, ties away from zero.
///
/// Works on the decimal expansion instead of scaling by `10^digits`, which
/// would round a second time.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let target = if is_decimal_tie(value, digits) {
        // one ulp further from zero lands on the upper candidate
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    let rounded = format!("{:.*}", digits as usize, target)
        .parse::<f64>()
        .unwrap_or(value);
    // no negative zero in reports
    rounded + 0.0
}

/// Whether `value` lies exactly halfway between two `digits`-place decimals,
/// i.e. `value * 2 * 10^digits` is an odd integer.
fn is_decimal_tie(value: f64, digits: u32) -> bool {
    if value == 0.0 {
        return false;
    }
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };
    // value = odd * 2^(exponent + twos); 5^digits is always odd
    exponent + mantissa.trailing_zeros() as i64 == -(digits as i64 + 1)
}

fn finite_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    let ratio = numerator / denominator;
    ratio.is_finite().then_some(ratio)
}

#[derive(Debug)]
struct PairExtremes {
    min: DistanceLink,
    max: DistanceLink,
}

/// Computes cluster separation for a labeled corpus
#[derive(Debug, Clone, Copy)]
pub struct SeparationValidator {
    precision: u32,
}

impl Default for SeparationValidator {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SeparationValidator {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    fn record(&self, link: &DistanceLink) -> DistanceLink {
        DistanceLink {
            value: round_to(link.value, self.precision),
            ..link.clone()
        }
    }

    /// Compute inter/intra-cluster extremes and the separation index.
    ///
    /// Label pairs without any link between them are left out, as are labels
    /// without a positive internal link. Links to ids missing from `docs` are ignored.
    pub fn calc_separation(
        &self,
        docs: &[ClassifiedDocument],
        matrix: &DistanceMatrix,
    ) -> DunnIndexResult {
        let mut labels: Vec<&str> = Vec::new();
        let mut label_of: HashMap<&str, usize> = HashMap::with_capacity(docs.len());

        for doc in docs {
            let position = match labels.iter().position(|l| *l == doc.classification) {
                Some(position) => position,
                None => {
                    labels.push(&doc.classification);
                    labels.len() - 1
                }
            };
            label_of.insert(&doc.id, position);
        }

        let mut inter: HashMap<(usize, usize), PairExtremes> = HashMap::new();
        let mut intra: Vec<Option<DistanceLink>> = vec![None; labels.len()];
        let mut unresolved = 0usize;

        for link in matrix {
            let (Some(&a), Some(&b)) = (
                label_of.get(link.source.as_str()),
                label_of.get(link.target.as_str()),
            ) else {
                unresolved += 1;
                continue;
            };

            let recorded = self.record(link);

            if a == b {
                // Unrelated members say nothing about compactness
                if recorded.value <= 0.0 {
                    continue;
                }
                let slot = &mut intra[a];
                if slot.as_ref().map_or(true, |max| recorded.value > max.value) {
                    *slot = Some(recorded);
                }
                continue;
            }

            let key = (a.min(b), a.max(b));
            match inter.get_mut(&key) {
                Some(extremes) => {
                    if recorded.value < extremes.min.value {
                        extremes.min = recorded.clone();
                    }
                    if recorded.value > extremes.max.value {
                        extremes.max = recorded;
                    }
                }
                None => {
                    inter.insert(
                        key,
                        PairExtremes {
                            min: recorded.clone(),
                            max: recorded,
                        },
                    );
                }
            }
        }

        let mut cluster_values = Vec::new();
        let mut inter_cluster_mins = Vec::new();
        for i in 0..labels.len() {
            for k in (i + 1)..labels.len() {
                let Some(extremes) = inter.remove(&(i, k)) else {
                    continue;
                };
                inter_cluster_mins.push(extremes.min.value);
                cluster_values.push(ClusterPairResult {
                    clusters: [labels[i].to_string(), labels[k].to_string()],
                    index: finite_ratio(extremes.min.value, extremes.max.value),
                    min_distance: extremes.min,
                    max_distance: extremes.max,
                });
            }
        }

        let intra_cluster_maxs: Vec<IntraClusterMax> = intra
            .into_iter()
            .zip(&labels)
            .filter_map(|(link, label)| {
                link.map(|link| IntraClusterMax {
                    link,
                    cluster: label.to_string(),
                })
            })
            .collect();

        let dunn_index = if inter_cluster_mins.is_empty() || intra_cluster_maxs.is_empty() {
            None
        } else {
            let min = inter_cluster_mins
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min);
            let max = intra_cluster_maxs
                .iter()
                .map(|m| m.link.value)
                .fold(f64::NEG_INFINITY, f64::max);
            finite_ratio(min, max)
        };

        debug!(
            labels = labels.len(),
            links = matrix.len(),
            unresolved,
            pairs = cluster_values.len(),
            intra = intra_cluster_maxs.len(),
            dunn_index = ?dunn_index,
            "calc_separation"
        );

        DunnIndexResult {
            cluster_values,
            intra_cluster_maxs,
            inter_cluster_mins,
            dunn_index,
        }
    }
}

/// [`SeparationValidator::calc_separation`] with the default precision
pub fn calc_separation(docs: &[ClassifiedDocument], matrix: &DistanceMatrix) -> DunnIndexResult {
    SeparationValidator::default().calc_separation(docs, matrix)
}
