//! Pipeline execution and result rendering shared by `demo` and `solve`
//!
//! The pipeline owns the composition the core crates stay out of: edges
//! go into the ordered store keyed by weight, come back out in ascending
//! weight order, get their endpoints unpacked, and feed the distance
//! matrix.

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use densepath_core::edge::{decode_endpoints, encode_endpoints, Edge};
use densepath_core::error::Result;
use densepath_core::graph::{DistanceMatrix, NO_PATH};
use densepath_core::store::OrderedStore;

/// A resolved point query
#[derive(Debug, Serialize)]
pub struct QueryResult {
    pub from: usize,
    pub to: usize,
    pub distance: i64,
}

/// Everything a command prints: the weight-sorted edges, the computed
/// matrix (unreachable already translated to -1), and any point queries
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub nodes: usize,
    pub edges: Vec<Edge>,
    pub distances: Vec<Vec<i64>>,
    pub queries: Vec<QueryResult>,
}

/// Run the full pipeline over `edges` and resolve `queries`
pub fn build_report(
    edges: &[Edge],
    node_count: usize,
    queries: &[(usize, usize)],
) -> Result<PathReport> {
    let mut store = OrderedStore::new();
    for edge in edges {
        store.insert(edge.weight, encode_endpoints(edge.from, edge.to)?);
    }
    tracing::debug!(edges = store.len(), "edges_stored");

    let mut matrix = DistanceMatrix::new(node_count);
    let mut sorted = Vec::with_capacity(store.len());
    for (weight, payload) in store.iter() {
        let (from, to) = decode_endpoints(payload);
        matrix.add_edge(from, to, weight)?;
        sorted.push(Edge::new(from, to, weight));
    }

    matrix.compute();

    let queries = queries
        .iter()
        .map(|&(from, to)| {
            Ok(QueryResult {
                from,
                to,
                distance: matrix.distance(from, to)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PathReport {
        nodes: node_count,
        edges: sorted,
        distances: matrix.rows(),
        queries,
    })
}

/// Render a report in the requested output format
pub fn render(report: &PathReport, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Human => render_human(report, cli.quiet),
    }
    Ok(())
}

fn render_human(report: &PathReport, quiet: bool) {
    if !quiet {
        println!("Edges by weight:");
        for edge in &report.edges {
            println!("  weight {}: {} -> {}", edge.weight, edge.from, edge.to);
        }
        println!();
        println!("Shortest path matrix:");
    }

    for row in &report.distances {
        let cells: Vec<String> = row
            .iter()
            .map(|&cell| {
                if cell == NO_PATH {
                    "INF".to_string()
                } else {
                    cell.to_string()
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }

    for query in &report.queries {
        if query.distance == NO_PATH {
            println!("shortest distance {} -> {}: no path", query.from, query.to);
        } else {
            println!(
                "shortest distance {} -> {}: {}",
                query.from, query.to, query.distance
            );
        }
    }
}
