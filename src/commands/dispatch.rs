//! Command dispatch logic for densepath

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use densepath_core::error::{DensepathError, Result};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(DensepathError::UsageError(
            "no command given (try `densepath demo` or `densepath solve --help`)".to_string(),
        )),

        Some(Commands::Demo) => commands::demo::run(cli, start),

        Some(Commands::Solve { file, nodes, query }) => {
            commands::solve::run(cli, file.as_deref(), *nodes, query, start)
        }
    }
}
