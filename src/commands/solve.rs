//! Solve an edge list from a file or stdin

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use crate::commands::report::{build_report, render};
use densepath_core::edge::{parse_edge_list, Edge};
use densepath_core::error::Result;
use densepath_core::trace_time;

pub fn run(
    cli: &Cli,
    file: Option<&Path>,
    nodes: Option<usize>,
    queries: &[(usize, usize)],
    start: Instant,
) -> Result<()> {
    let input = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let edges = parse_edge_list(&input)?;
    trace_time!(start, "edges_parsed", edges = edges.len());

    let node_count = nodes.unwrap_or_else(|| infer_node_count(&edges));
    tracing::debug!(nodes = node_count, edges = edges.len(), "solve");

    let report = build_report(&edges, node_count, queries)?;
    trace_time!(start, "solve_computed", nodes = node_count);

    render(&report, cli)
}

/// Smallest node count that covers every endpoint in the list
fn infer_node_count(edges: &[Edge]) -> usize {
    edges
        .iter()
        .map(|edge| edge.from.max(edge.to) + 1)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_node_count() {
        let edges = vec![Edge::new(0, 1, 4), Edge::new(3, 2, 1)];
        assert_eq!(infer_node_count(&edges), 4);
        assert_eq!(infer_node_count(&[]), 0);
    }
}
