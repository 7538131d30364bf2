//! `docsim matrix` command - normalized top-K similarity graph

use crate::cli::Cli;
use crate::output_by_format_result;
use docsim_core::config::AnalysisConfig;
use docsim_core::error::{DocsimError, Result};
use docsim_core::{DistanceMatrix, DocumentRecord};

/// Print links one per line, grouped by source
pub(crate) fn print_links(matrix: &DistanceMatrix) {
    let mut current: Option<&str> = None;
    for link in matrix {
        if current != Some(link.source.as_str()) {
            println!("{}", link.source);
            current = Some(link.source.as_str());
        }
        println!("  -> {:<24} {:.8}", link.target, link.value);
    }
}

/// Execute the matrix command
pub fn execute(cli: &Cli, config: &AnalysisConfig, docs: &[DocumentRecord]) -> Result<()> {
    let vectors = config.vector_builder()?.build_vectors(docs, &config.field);
    let matrix = config.matrix_builder().build(&vectors);

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&matrix)?);
            Ok::<(), DocsimError>(())
        },
        human => {
            if matrix.is_empty() {
                if !cli.quiet {
                    println!("No similarity links ({} documents with field '{}')", vectors.len(), config.field);
                }
            } else {
                print_links(&matrix);
                if !cli.quiet {
                    println!();
                    println!("{} links over {} documents (top {})", matrix.len(), vectors.len(), config.top_k);
                }
            }
        }
    )
}
