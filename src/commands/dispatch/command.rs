//! Command trait and context for dispatching commands

use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use docsim_core::config::AnalysisConfig;
use docsim_core::document::{load_documents, parse_documents};
use docsim_core::error::{DocsimError, Result};
use docsim_core::DocumentRecord;

/// Load the analysis configuration named by `--config`, falling back to
/// defaults, then apply the global `--field` override.
pub fn load_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(field) = &cli.field {
        config.field = field.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Read a document file, or stdin when the path is `-`
pub fn read_documents(input: &Path) -> Result<Vec<DocumentRecord>> {
    if input == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| DocsimError::io_operation("read", "stdin", e))?;
        parse_documents(&content, input)
    } else {
        load_documents(input)
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_config(&self) -> Result<AnalysisConfig> {
        load_config(self.cli)
    }

    pub fn read_documents(&self, input: &Path) -> Result<Vec<DocumentRecord>> {
        read_documents(input)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("docsim {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Document similarity graphs and cluster separation over TF-IDF term vectors.");
        println!();
        println!("Run `docsim --help` for usage information.");
        Ok(())
    }
}
