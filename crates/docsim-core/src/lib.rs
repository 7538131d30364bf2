//! Docsim Core Library
//!
//! TF-IDF term vectors, pseudo-cosine similarity graphs, cluster separation
//! (Dunn index) and similarity-vote classification over search-index term
//! statistics.

pub mod classify;
pub mod cluster;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod logging;
pub mod similarity;
pub mod text;
pub mod vector;

pub use classify::{best_label, predict, Classifier, Prediction, VoteMode};
pub use cluster::{calc_separation, ClusterPairResult, DunnIndexResult, SeparationValidator};
pub use document::DocumentRecord;
pub use similarity::{
    euclidean_distance, pseudo_cosine_score, DistanceLink, DistanceMatrix, MatrixBuilder,
};
pub use vector::{calc_tf_idf, ClassifiedDocument, DocumentVector, TermVector, VectorBuilder};
