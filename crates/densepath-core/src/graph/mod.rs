//! Dense all-pairs shortest path engine
//!
//! A square distance matrix over node indices `[0, n)` relaxed with the
//! Floyd-Warshall triple loop. Dense by design: memory is O(n²) and the
//! computation O(n³) regardless of how many edges exist.

use crate::error::{DensepathError, Result};

/// Reserved distance standing in for "no path exists".
///
/// Half the representable maximum so two unreachable cells can be summed
/// during relaxation without overflowing.
pub const UNREACHABLE: i64 = i64::MAX / 2;

/// Distance reported for unreachable pairs at the query boundary
pub const NO_PATH: i64 = -1;

/// Dense n×n directed-graph distance matrix.
///
/// Construct, assign direct edges, call [`compute`](Self::compute) once,
/// then query. Mutating the edge set after a compute requires another
/// compute for the queries to reflect it.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    /// Row-major n×n cells
    dist: Vec<i64>,
}

impl DistanceMatrix {
    /// Create an n-node matrix: diagonal 0, everything else unreachable
    pub fn new(n: usize) -> Self {
        let mut dist = vec![UNREACHABLE; n * n];
        for i in 0..n {
            dist[i * n + i] = 0;
        }
        DistanceMatrix { n, dist }
    }

    /// Number of nodes the matrix was constructed with
    pub fn node_count(&self) -> usize {
        self.n
    }

    fn check_node(&self, index: usize) -> Result<()> {
        if index >= self.n {
            return Err(DensepathError::NodeOutOfRange {
                index,
                count: self.n,
            });
        }
        Ok(())
    }

    /// Set the direct distance for the ordered pair `(u, v)`.
    ///
    /// Last write wins: repeated assignments to the same pair overwrite,
    /// parallel edges are not merged or minimized.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.dist[u * self.n + v] = weight;
        Ok(())
    }

    /// Relax every pair through every intermediate node.
    ///
    /// `k` must be the outermost loop: an intermediate node has to be
    /// fully settled before later pairs route through it. Negative
    /// cycles are not detected and yield meaningless distances.
    #[tracing::instrument(skip(self), fields(n = self.n))]
    pub fn compute(&mut self) {
        let n = self.n;
        for k in 0..n {
            for i in 0..n {
                let ik = self.dist[i * n + k];
                for j in 0..n {
                    let through = ik + self.dist[k * n + j];
                    if through < self.dist[i * n + j] {
                        self.dist[i * n + j] = through;
                    }
                }
            }
        }
    }

    /// Distance from `u` to `v`, or [`NO_PATH`] if `v` is unreachable
    pub fn distance(&self, u: usize, v: usize) -> Result<i64> {
        self.check_node(u)?;
        self.check_node(v)?;
        let cell = self.dist[u * self.n + v];
        Ok(if cell >= UNREACHABLE { NO_PATH } else { cell })
    }

    /// Full matrix with unreachable cells already translated to [`NO_PATH`]
    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.dist
            .chunks(self.n.max(1))
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell >= UNREACHABLE { NO_PATH } else { cell })
                    .collect()
            })
            .collect()
    }
}
