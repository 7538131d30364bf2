//! `docsim predict` command - label one document by similarity vote

use crate::cli::Cli;
use crate::commands::distance::vector_for;
use crate::output_by_format_result;
use docsim_core::config::AnalysisConfig;
use docsim_core::error::{DocsimError, Result};
use docsim_core::{best_label, ClassifiedDocument, DocumentRecord, Prediction};

/// Execute the predict command
///
/// Every other classified document carrying the field is a neighbor.
pub fn execute(
    cli: &Cli,
    config: &AnalysisConfig,
    docs: &[DocumentRecord],
    target: &str,
) -> Result<()> {
    let builder = config.vector_builder()?;
    let target_vector = vector_for(&builder, docs, &config.field, target)?;

    let neighbors: Vec<ClassifiedDocument> = builder
        .build_classified(docs, &config.field)
        .into_iter()
        .filter(|doc| doc.id != target)
        .collect();
    let labels: Vec<String> = neighbors
        .iter()
        .map(|doc| doc.classification.clone())
        .collect();

    let classifier = config.classifier();
    let predictions = classifier.predict(&target_vector, &neighbors, &labels)?;
    let best = best_label(&predictions, &labels);

    // Labels in order of first appearance among the neighbors
    let mut ordered: Vec<&Prediction> = Vec::new();
    for label in &labels {
        if let Some(prediction) = predictions.get(label) {
            if !ordered.iter().any(|p| p.name == prediction.name) {
                ordered.push(prediction);
            }
        }
    }

    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "target": target,
                    "mode": classifier.mode(),
                    "neighbors": neighbors.len(),
                    "predictions": ordered,
                    "best": best.map(|p| p.name.as_str()),
                }))?
            );
            Ok::<(), DocsimError>(())
        },
        human => {
            if ordered.is_empty() {
                println!("No classified neighbors for {}", target);
            }
            for prediction in &ordered {
                println!("  {:<16} {:.8}", prediction.name, prediction.score);
            }
            if let Some(best) = best {
                println!("{} -> {}", target, best.name);
            }
        }
    )
}
