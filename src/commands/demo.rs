//! Built-in example graph
//!
//! The 4-node, 5-edge graph the original program hard-coded, kept as a
//! quick self-check: `densepath demo` should report a 0 -> 3 distance
//! of 3 via the weight-2 and weight-1 edges.

use std::time::Instant;

use crate::cli::Cli;
use crate::commands::report::{build_report, render};
use densepath_core::edge::Edge;
use densepath_core::error::Result;
use densepath_core::trace_time;

const DEMO_NODES: usize = 4;

const DEMO_EDGES: [(usize, usize, i64); 5] =
    [(0, 1, 4), (0, 2, 2), (1, 2, 3), (2, 3, 1), (1, 3, 5)];

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let edges: Vec<Edge> = DEMO_EDGES
        .iter()
        .map(|&(from, to, weight)| Edge::new(from, to, weight))
        .collect();

    let report = build_report(&edges, DEMO_NODES, &[(0, 3)])?;
    trace_time!(start, "demo_computed", nodes = DEMO_NODES);

    render(&report, cli)
}
