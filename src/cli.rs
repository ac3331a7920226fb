//! CLI argument parsing for densepath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use densepath_core::format::OutputFormat;

/// Densepath - dense all-pairs shortest path CLI
#[derive(Parser, Debug)]
#[command(name = "densepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in 4-node example graph
    Demo,

    /// Compute all-pairs shortest paths for an edge list
    Solve {
        /// Edge list file, one `from to weight` triple per line (stdin if omitted)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Number of graph nodes (default: largest endpoint + 1)
        #[arg(long, short)]
        nodes: Option<usize>,

        /// Point query `from,to` (can be repeated)
        #[arg(long, action = clap::ArgAction::Append, value_parser = parse_query)]
        query: Vec<(usize, usize)>,
    },
}

/// Parse a `from,to` query pair
fn parse_query(s: &str) -> Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid query '{}' (expected: from,to)", s))?;
    let from = from
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid query source '{}'", from))?;
    let to = to
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid query target '{}'", to))?;
    Ok((from, to))
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["densepath", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_cli_version() {
        // Should not panic
        let result = Cli::try_parse_from(["densepath", "--version"]);
        assert!(result.is_err()); // --version exits
    }

    #[test]
    fn test_parse_demo() {
        let cli = Cli::try_parse_from(["densepath", "demo"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Demo)));
    }

    #[test]
    fn test_parse_solve_defaults() {
        let cli = Cli::try_parse_from(["densepath", "solve"]).unwrap();
        if let Some(Commands::Solve { file, nodes, query }) = cli.command {
            assert!(file.is_none());
            assert!(nodes.is_none());
            assert!(query.is_empty());
        } else {
            panic!("Expected Solve command");
        }
    }

    #[test]
    fn test_parse_solve_with_options() {
        let cli = Cli::try_parse_from([
            "densepath",
            "solve",
            "--file",
            "edges.txt",
            "--nodes",
            "6",
            "--query",
            "0,3",
            "--query",
            "2,5",
        ])
        .unwrap();
        if let Some(Commands::Solve { file, nodes, query }) = cli.command {
            assert_eq!(file, Some(PathBuf::from("edges.txt")));
            assert_eq!(nodes, Some(6));
            assert_eq!(query, vec![(0, 3), (2, 5)]);
        } else {
            panic!("Expected Solve command");
        }
    }

    #[test]
    fn test_parse_bad_query() {
        assert!(Cli::try_parse_from(["densepath", "solve", "--query", "0"]).is_err());
        assert!(Cli::try_parse_from(["densepath", "solve", "--query", "a,b"]).is_err());
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["densepath", "--format", "json", "demo"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
