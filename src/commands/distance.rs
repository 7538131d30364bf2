//! `docsim distance` command - compare two documents

use crate::cli::Cli;
use crate::output_by_format_result;
use docsim_core::config::AnalysisConfig;
use docsim_core::error::{DocsimError, Result};
use docsim_core::vector::VectorBuilder;
use docsim_core::{euclidean_distance, pseudo_cosine_score, DocumentRecord, TermVector};

/// Build the vector of one document, by id
pub(crate) fn vector_for(
    builder: &VectorBuilder,
    docs: &[DocumentRecord],
    field: &str,
    id: &str,
) -> Result<TermVector> {
    let doc = docs
        .iter()
        .find(|doc| doc.id == id)
        .ok_or_else(|| DocsimError::DocumentNotFound { id: id.to_string() })?;
    let stats = doc.field(field).ok_or_else(|| DocsimError::FieldNotFound {
        field: field.to_string(),
        id: id.to_string(),
    })?;
    Ok(builder.build_vector(stats))
}

/// Execute the distance command
pub fn execute(
    cli: &Cli,
    config: &AnalysisConfig,
    docs: &[DocumentRecord],
    a: &str,
    b: &str,
) -> Result<()> {
    let builder = config.vector_builder()?;
    let vector_a = vector_for(&builder, docs, &config.field, a)?;
    let vector_b = vector_for(&builder, docs, &config.field, b)?;

    let euclidean = euclidean_distance(&vector_a, &vector_b);
    let pseudo_cosine = pseudo_cosine_score(&vector_a, &vector_b);

    output_by_format_result!(cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "a": a,
                    "b": b,
                    "euclidean": euclidean,
                    "pseudoCosine": pseudo_cosine,
                }))?
            );
            Ok::<(), DocsimError>(())
        },
        human => {
            println!("{} <-> {}", a, b);
            println!("  euclidean:     {:.8}", euclidean);
            println!("  pseudo-cosine: {:.8}", pseudo_cosine);
        }
    )
}
