//! Weighted directed edges and endpoint packing
//!
//! Edge endpoints are packed into a single integer payload so an edge can
//! ride through the ordered store as a `(weight, payload)` pair: the high
//! 16 bits hold the source node, the low 16 bits the target node.

use serde::Serialize;

use crate::error::{DensepathError, Result};

/// Largest node index that fits in one 16-bit half of a packed payload
pub const MAX_ENDPOINT: usize = 0xFFFF;

/// A weighted directed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Edge { from, to, weight }
    }
}

impl std::str::FromStr for Edge {
    type Err = String;

    /// Parse a `from to weight` triple (whitespace separated)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(format!("expected 3 fields, got {}", fields.len()));
        }
        let from = fields[0]
            .parse::<usize>()
            .map_err(|_| format!("invalid source node '{}'", fields[0]))?;
        let to = fields[1]
            .parse::<usize>()
            .map_err(|_| format!("invalid target node '{}'", fields[1]))?;
        let weight = fields[2]
            .parse::<i64>()
            .map_err(|_| format!("invalid weight '{}'", fields[2]))?;
        Ok(Edge { from, to, weight })
    }
}

/// Parse an edge list, one `from to weight` triple per line.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_edge_list(input: &str) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let edge = line.parse::<Edge>().map_err(|reason| {
            DensepathError::InvalidEdge {
                line: idx + 1,
                reason,
            }
        })?;
        edges.push(edge);
    }
    if edges.is_empty() {
        return Err(DensepathError::EmptyEdgeList);
    }
    Ok(edges)
}

/// Pack two edge endpoints into a single payload integer: `(u << 16) | v`.
/// Endpoints above [`MAX_ENDPOINT`] are rejected rather than truncated.
pub fn encode_endpoints(u: usize, v: usize) -> Result<i64> {
    for value in [u, v] {
        if value > MAX_ENDPOINT {
            return Err(DensepathError::EndpointOutOfRange {
                value,
                max: MAX_ENDPOINT,
            });
        }
    }
    Ok(((u as i64) << 16) | v as i64)
}

/// Unpack a payload integer into `(source, target)` endpoints.
/// Total for any input: only the low 32 bits are read.
pub fn decode_endpoints(code: i64) -> (usize, usize) {
    (((code >> 16) & 0xFFFF) as usize, (code & 0xFFFF) as usize)
}
