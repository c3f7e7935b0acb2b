//! Construction-time defects of a [`Graph`](crate::graph::Graph).
//!
//! None of these abort construction. A graph that collected at least one
//! defect is *invalid* and behaves as an empty graph; callers loading many
//! graphs can inspect [`Graph::errors`](crate::graph::Graph::errors) and skip it.

use core::fmt;

/// A structural problem found while building a graph from a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The requested vertex count was zero.
    NoVertices,
    /// The matrix does not have `expected` rows of `expected` entries.
    NotSquare {
        /// The declared vertex count.
        expected: usize,
        /// First row whose length differs, or `None` if the row count differs.
        row: Option<usize>,
    },
    /// An entry was negative.
    NegativeMultiplicity {
        /// Source vertex.
        row: usize,
        /// Destination vertex.
        col: usize,
        /// The offending entry.
        value: i64,
    },
    /// `m[row][col] != m[col][row]` in an undirected graph.
    Asymmetric {
        /// Source vertex.
        row: usize,
        /// Destination vertex.
        col: usize,
    },
    /// The matrix holds more edges than a graph can count.
    TooManyEdges {
        /// The largest edge count accepted.
        limit: u64,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NoVertices => f.write_str("number of vertices must be positive"),
            Self::NotSquare { expected, row: None } => {
                write!(f, "adjacency matrix must have {expected} rows")
            }
            Self::NotSquare { expected, row: Some(row) } => {
                write!(f, "row {row} of adjacency matrix must have {expected} entries")
            }
            Self::NegativeMultiplicity { row, col, value } => {
                write!(f, "number of edges cannot be negative ({value} at [{row}][{col}])")
            }
            Self::Asymmetric { row, col } => {
                write!(f, "adjacency matrix is not symmetric at [{row}][{col}]")
            }
            Self::TooManyEdges { limit } => {
                write!(f, "graph has more than {limit} edges")
            }
        }
    }
}

impl std::error::Error for GraphError {}
