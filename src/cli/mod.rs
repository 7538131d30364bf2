//! CLI argument parsing for docsim
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --field, --format, --quiet, --verbose

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DistanceArgs, MatrixArgs, PredictArgs, SeparationArgs, VectorsArgs};
pub use docsim_core::format::OutputFormat;
use parse::parse_format;

/// Docsim - document similarity graphs and cluster separation over TF-IDF term vectors
#[derive(Parser, Debug)]
#[command(name = "docsim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Analysis configuration file (TOML)
    #[arg(long, short, global = true, env = "DOCSIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Index field whose term vectors are analyzed (overrides config)
    #[arg(long, short = 'F', global = true)]
    pub field: Option<String>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, docsim_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print TF-IDF vectors for every document carrying the field
    Vectors(VectorsArgs),

    /// Compare two documents by euclidean distance and pseudo-cosine score
    Distance(DistanceArgs),

    /// Build the normalized top-K similarity matrix
    Matrix(MatrixArgs),

    /// Score how well the classification separates the similarity graph
    Separation(SeparationArgs),

    /// Predict a label for one document by similarity vote
    Predict(PredictArgs),
}
