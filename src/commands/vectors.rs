//! `docsim vectors` command - TF-IDF vectors per document

use crate::cli::Cli;
use crate::output_by_format_result;
use docsim_core::config::AnalysisConfig;
use docsim_core::error::{DocsimError, Result};
use docsim_core::DocumentRecord;

/// Execute the vectors command
pub fn execute(
    cli: &Cli,
    config: &AnalysisConfig,
    docs: &[DocumentRecord],
    top_terms: Option<usize>,
) -> Result<()> {
    let builder = config.vector_builder()?;
    let vectors = builder.build_vectors(docs, &config.field);

    output_by_format_result!(cli.format,
        json => {
            let output: Vec<serde_json::Value> = vectors
                .iter()
                .map(|doc| match top_terms {
                    Some(n) => {
                        let terms: Vec<serde_json::Value> = doc
                            .vector
                            .top_terms(n)
                            .into_iter()
                            .map(|(term, weight)| serde_json::json!({ "term": term, "weight": weight }))
                            .collect();
                        serde_json::json!({ "id": doc.id, "terms": terms })
                    }
                    None => serde_json::json!({ "id": doc.id, "vector": doc.vector }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), DocsimError>(())
        },
        human => {
            if vectors.is_empty() && !cli.quiet {
                println!("No documents carry term statistics for field '{}'", config.field);
            }
            for doc in &vectors {
                println!("{} ({} terms)", doc.id, doc.vector.len());
                let terms = match top_terms {
                    Some(n) => doc.vector.top_terms(n),
                    None => doc.vector.iter().collect(),
                };
                for (term, weight) in terms {
                    println!("  {:<24} {:.6}", term, weight);
                }
            }
        }
    )
}
