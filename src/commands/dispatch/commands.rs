//! Command implementations for all docsim commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use docsim_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{DistanceArgs, MatrixArgs, PredictArgs, SeparationArgs, VectorsArgs};
    use crate::commands::dispatch::macros::trace_command;
    use crate::commands::{distance, matrix, predict, separation, vectors};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Vectors(args) => execute_vectors(ctx, args),
            Commands::Distance(args) => execute_distance(ctx, args),
            Commands::Matrix(args) => execute_matrix(ctx, args),
            Commands::Separation(args) => execute_separation(ctx, args),
            Commands::Predict(args) => execute_predict(ctx, args),
        }
    }

    fn execute_vectors(ctx: &CommandContext, args: &VectorsArgs) -> Result<()> {
        let config = ctx.load_config()?;
        let docs = ctx.read_documents(&args.input)?;
        trace_command!(ctx.cli, ctx.start, "load_documents");
        vectors::execute(ctx.cli, &config, &docs, args.top_terms)
    }

    fn execute_distance(ctx: &CommandContext, args: &DistanceArgs) -> Result<()> {
        let config = ctx.load_config()?;
        let docs = ctx.read_documents(&args.input)?;
        trace_command!(ctx.cli, ctx.start, "load_documents");
        distance::execute(ctx.cli, &config, &docs, &args.a, &args.b)
    }

    fn execute_matrix(ctx: &CommandContext, args: &MatrixArgs) -> Result<()> {
        let mut config = ctx.load_config()?;
        if let Some(top_k) = args.top_k {
            config.top_k = top_k;
        }
        if args.sequential {
            config.parallel = false;
        }
        let docs = ctx.read_documents(&args.input)?;
        trace_command!(ctx.cli, ctx.start, "load_documents");
        matrix::execute(ctx.cli, &config, &docs)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_separation(ctx: &CommandContext, args: &SeparationArgs) -> Result<()> {
        let mut config = ctx.load_config()?;
        if let Some(top_k) = args.top_k {
            config.top_k = top_k;
        }
        let docs = ctx.read_documents(&args.input)?;
        trace_command!(ctx.cli, ctx.start, "load_documents");
        separation::execute(ctx.cli, &config, &docs, args.with_matrix)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_predict(ctx: &CommandContext, args: &PredictArgs) -> Result<()> {
        let mut config = ctx.load_config()?;
        if let Some(vote) = args.vote {
            config.vote_mode = vote;
        }
        let docs = ctx.read_documents(&args.input)?;
        trace_command!(ctx.cli, ctx.start, "load_documents");
        predict::execute(ctx.cli, &config, &docs, &args.target)
    }
}
