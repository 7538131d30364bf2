//! `docsim separation` command - Dunn index of the classification

use crate::cli::Cli;
use crate::commands::matrix::print_links;
use crate::output_by_format_result;
use docsim_core::config::AnalysisConfig;
use docsim_core::error::{DocsimError, Result};
use docsim_core::format::format_ratio;
use docsim_core::{DocumentRecord, DunnIndexResult};

fn print_report(report: &DunnIndexResult) {
    if report.cluster_values.is_empty() {
        println!("No links between distinct clusters");
    }
    for pair in &report.cluster_values {
        println!("{} / {}", pair.clusters[0], pair.clusters[1]);
        println!(
            "  min: {:.8} ({} -> {})",
            pair.min_distance.value, pair.min_distance.source, pair.min_distance.target
        );
        println!(
            "  max: {:.8} ({} -> {})",
            pair.max_distance.value, pair.max_distance.source, pair.max_distance.target
        );
        println!("  index: {}", format_ratio(pair.index));
    }

    if !report.intra_cluster_maxs.is_empty() {
        println!();
        println!("Intra-cluster maxima:");
        for intra in &report.intra_cluster_maxs {
            println!(
                "  {:<16} {:.8} ({} -> {})",
                intra.cluster, intra.link.value, intra.link.source, intra.link.target
            );
        }
    }

    println!();
    println!("Dunn index: {}", format_ratio(report.dunn_index));
}

/// Execute the separation command
pub fn execute(
    cli: &Cli,
    config: &AnalysisConfig,
    docs: &[DocumentRecord],
    with_matrix: bool,
) -> Result<()> {
    let builder = config.vector_builder()?;
    let vectors = builder.build_vectors(docs, &config.field);
    let classified = builder.build_classified(docs, &config.field);
    let matrix = config.matrix_builder().build(&vectors);
    let report = config
        .separation_validator()
        .calc_separation(&classified, &matrix);

    output_by_format_result!(cli.format,
        json => {
            let mut output = serde_json::to_value(&report)?;
            if with_matrix {
                if let Some(obj) = output.as_object_mut() {
                    obj.insert("matrix".to_string(), serde_json::to_value(&matrix)?);
                }
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), DocsimError>(())
        },
        human => {
            if with_matrix {
                print_links(&matrix);
                println!();
            }
            print_report(&report);
        }
    )
}
