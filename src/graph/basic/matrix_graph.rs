//! An immutable adjacency-multiplicity graph.
//!
//! `m[i][j]` counts the edges from vertex `i` to vertex `j`. Undirected graphs
//! carry a symmetric matrix and count each edge once (the `j >= i` half);
//! a loop on `i` is a single unit of `m[i][i]`.
//!
//! The matrix is validated once at construction and never handed out by
//! reference. The only mutable part of a [`Graph`] is its visitation scratch,
//! which every traversal resets before use.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::access::visited::VisitState;
use crate::graph::GraphError;

/// Whether edges have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// `m[i][j]` edges run from `i` to `j` only.
    Directed,
    /// `m[i][j] == m[j][i]` edges join `i` and `j`.
    Undirected,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Directed`].
    #[inline]
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// A graph stored as a dense, row-major multiplicity matrix.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n^2)\) | validation and edge counting |
/// | `edge_count_between` | \(O(1)\) | |
/// | `is_connected` | \(O(n^2)\) | matrix-scan DFS with explicit stack |
/// | `edge_matrix_copy` | \(O(n^2)\) | |
pub struct Graph {
    orientation: Orientation,
    vertex_count: usize,
    edge_count: u64,
    edges: Vec<u64>,
    errors: Vec<GraphError>,
    pub(crate) scratch: VisitState,
}

impl Graph {
    /// Largest edge count a graph may hold.
    ///
    /// Keeps every undirected degree (a loop counts twice) within `u64`.
    pub const MAX_EDGES: u64 = i64::MAX.unsigned_abs();

    /// Builds a graph with `vertex_count` vertices from a square matrix.
    ///
    /// Construction never fails. Any defect (zero vertices, a non-square
    /// matrix, a negative entry, asymmetry in an undirected graph, or more
    /// than [`Graph::MAX_EDGES`] edges) is recorded in [`Graph::errors`] and
    /// the result is an invalid, empty graph.
    pub fn new(orientation: Orientation, vertex_count: usize, matrix: Vec<Vec<i64>>) -> Self {
        let errors = validate(orientation, vertex_count, &matrix);
        if !errors.is_empty() {
            return Self::rejected(orientation, errors);
        }
        let Some(edge_count) = count_edges(orientation, &matrix) else {
            let limit = Self::MAX_EDGES;
            return Self::rejected(orientation, vec![GraphError::TooManyEdges { limit }]);
        };

        // validated non-negative above
        let edges = matrix.into_iter().flatten().map(i64::unsigned_abs).collect();
        Self {
            orientation,
            vertex_count,
            edge_count,
            edges,
            errors,
            scratch: VisitState::new(vertex_count),
        }
    }

    /// Builds a graph whose vertex count is the number of rows of `matrix`.
    pub fn from_matrix(orientation: Orientation, matrix: Vec<Vec<i64>>) -> Self {
        let n = matrix.len();
        Self::new(orientation, n, matrix)
    }

    fn rejected(orientation: Orientation, errors: Vec<GraphError>) -> Self {
        #[cfg(feature = "tracing")]
        for err in &errors {
            tracing::warn!(%err, "rejecting graph input");
        }
        Self {
            orientation,
            vertex_count: 0,
            edge_count: 0,
            edges: Vec::new(),
            errors,
            scratch: VisitState::new(0),
        }
    }

    /// Returns `true` if construction found no defects.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Defects found at construction; empty for a valid graph.
    #[inline]
    pub fn errors(&self) -> &[GraphError] {
        &self.errors
    }

    /// Returns the graph's orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the number of vertices (0 for an invalid graph).
    #[inline]
    pub fn total_vertices(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges, fixed at construction.
    #[inline]
    pub fn total_edges(&self) -> u64 {
        self.edge_count
    }

    /// Number of edges from `source` to `dest`; 0 for out-of-range indices.
    #[inline]
    pub fn edge_count_between(&self, source: usize, dest: usize) -> u64 {
        if source < self.vertex_count && dest < self.vertex_count {
            self.edges[source * self.vertex_count + dest]
        } else {
            0
        }
    }

    /// Returns an owned copy of the adjacency matrix.
    pub fn edge_matrix_copy(&self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }

    #[inline]
    pub(crate) fn row(&self, v: usize) -> &[u64] {
        let n = self.vertex_count;
        &self.edges[v * n..(v + 1) * n]
    }

    fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        // `chunks_exact(0)` panics, and an invalid graph has no rows anyway.
        self.edges.chunks_exact(self.vertex_count.max(1))
    }

    /// Degree of `v`: out-degree for directed graphs, endpoint count otherwise.
    ///
    /// A loop contributes 2 to the degree of an undirected vertex.
    pub fn degree(&self, v: usize) -> u64 {
        if v >= self.vertex_count {
            return 0;
        }
        let row = self.row(v);
        let sum: u64 = row.iter().sum();
        if self.orientation.is_directed() {
            sum
        } else {
            sum + row[v]
        }
    }

    fn in_degree(&self, v: usize) -> u64 {
        (0..self.vertex_count).map(|u| self.edge_count_between(u, v)).sum()
    }

    /// Necessary degree condition for an Euler circuit.
    ///
    /// Undirected: every vertex has even degree. Directed: every vertex has
    /// equal in- and out-degree.
    pub fn satisfies_degree_condition(&self) -> bool {
        (0..self.vertex_count).all(|v| {
            if self.orientation.is_directed() {
                self.degree(v) == self.in_degree(v)
            } else {
                self.degree(v) % 2 == 0
            }
        })
    }

    /// Returns `true` iff a DFS from vertex 0 reaches every vertex.
    ///
    /// Edges are followed in the direction they are stored, ties broken by
    /// ascending vertex index. An empty graph is vacuously connected.
    pub fn is_connected(&mut self) -> bool {
        if self.vertex_count == 0 {
            return true;
        }
        self.visit_from(0);
        self.scratch.all_visited()
    }

    /// Resets the scratch state and marks every vertex reachable from `start`.
    pub(crate) fn visit_from(&mut self, start: usize) {
        self.scratch.reset(&self.edges);
        let n = self.vertex_count;

        // (vertex, next column to inspect)
        let mut stack = vec![(start, 0usize)];
        self.scratch.try_visit(start);

        while let Some(frame) = stack.last_mut() {
            let (u, next) = *frame;
            let row = &self.edges[u * n..(u + 1) * n];
            let found = (next..n).find(|&v| row[v] != 0 && !self.scratch.is_visited(v));
            match found {
                Some(v) => {
                    frame.1 = v + 1;
                    self.scratch.try_visit(v);
                    stack.push((v, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

/// Sums the counted half of a validated matrix, or `None` past [`Graph::MAX_EDGES`].
fn count_edges(orientation: Orientation, matrix: &[Vec<i64>]) -> Option<u64> {
    let mut total = 0u64;
    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if orientation.is_directed() || j >= i {
                total = total
                    .checked_add(value.unsigned_abs())
                    .filter(|&t| t <= Graph::MAX_EDGES)?;
            }
        }
    }
    Some(total)
}

fn validate(orientation: Orientation, n: usize, matrix: &[Vec<i64>]) -> Vec<GraphError> {
    if n == 0 {
        return vec![GraphError::NoVertices];
    }
    if matrix.len() != n {
        return vec![GraphError::NotSquare { expected: n, row: None }];
    }
    if let Some(row) = matrix.iter().position(|r| r.len() != n) {
        return vec![GraphError::NotSquare { expected: n, row: Some(row) }];
    }

    let mut errors = Vec::new();
    for (row, entries) in matrix.iter().enumerate() {
        for (col, &value) in entries.iter().enumerate() {
            if value < 0 {
                errors.push(GraphError::NegativeMultiplicity { row, col, value });
            }
        }
    }
    if !orientation.is_directed() {
        for row in 0..n {
            for col in row + 1..n {
                if matrix[row][col] != matrix[col][row] {
                    errors.push(GraphError::Asymmetric { row, col });
                }
            }
        }
    }
    errors
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("orientation", &self.orientation)
            .field("vertex_count", &self.vertex_count)
            .field("edge_count", &self.edge_count)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Graph {
    /// One matrix row per line, entries separated by single blanks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertex_count == 0 {
            return Ok(());
        }
        for row in self.rows() {
            let mut first = true;
            for value in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
