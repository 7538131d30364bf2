use super::parse::{parse_top_k, parse_vote_mode};
use docsim_core::classify::VoteMode;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct VectorsArgs {
    /// Document file (JSON), or - for stdin
    pub input: PathBuf,

    /// Show only the N heaviest terms per document
    #[arg(long)]
    pub top_terms: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct DistanceArgs {
    /// Document file (JSON), or - for stdin
    pub input: PathBuf,

    /// First document id
    pub a: String,

    /// Second document id
    pub b: String,
}

#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    /// Document file (JSON), or - for stdin
    pub input: PathBuf,

    /// Links kept per document (overrides config)
    #[arg(long, short = 'k', value_parser = parse_top_k)]
    pub top_k: Option<usize>,

    /// Score on a single thread
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SeparationArgs {
    /// Document file (JSON), or - for stdin
    pub input: PathBuf,

    /// Links kept per document (overrides config)
    #[arg(long, short = 'k', value_parser = parse_top_k)]
    pub top_k: Option<usize>,

    /// Include the similarity matrix in the output
    #[arg(long)]
    pub with_matrix: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Document file (JSON), or - for stdin
    pub input: PathBuf,

    /// Id of the document to classify
    pub target: String,

    /// Vote policy: raw or normalized (overrides config)
    #[arg(long, value_parser = parse_vote_mode)]
    pub vote: Option<VoteMode>,
}
