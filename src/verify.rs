//! Checking a walk against a graph, and scoring searches over batches.
//!
//! [`validate_circuit`] is the authority on whether a walk is an Euler
//! circuit: it replays the walk over a copy of the adjacency matrix and
//! requires every unit of edge multiplicity to be used exactly once.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::collections::Walk;
use crate::graph::Graph;

/// Why a walk is not an Euler circuit of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircuitDefect {
    /// The walk does not end where it started.
    NotCircuit,
    /// The walk has fewer edges than the graph.
    MissingEdges {
        /// Edges in the walk.
        walked: usize,
        /// Edges in the graph.
        total: u64,
    },
    /// The walk has more edges than the graph.
    TooManyEdges {
        /// Edges in the walk.
        walked: usize,
        /// Edges in the graph.
        total: u64,
    },
    /// A step uses an edge that does not exist or was already used up.
    Exhausted {
        /// Step source.
        from: usize,
        /// Step destination.
        to: usize,
    },
}

impl fmt::Display for CircuitDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NotCircuit => f.write_str("path returned is not a circuit"),
            Self::MissingEdges { walked, total } => {
                write!(f, "some edges have not been visited ({walked} of {total})")
            }
            Self::TooManyEdges { walked, total } => {
                write!(f, "too many edges in circuit ({walked} for {total})")
            }
            Self::Exhausted { from, to } => write!(
                f,
                "the graph does not have enough edges between {from} and {to} to support the circuit"
            ),
        }
    }
}

impl std::error::Error for CircuitDefect {}

/// Checks that `walk` is an Euler circuit of `graph`.
///
/// # Errors
/// Returns the first [`CircuitDefect`] found: shape first, then edge
/// count, then each step in order.
pub fn validate_circuit(graph: &Graph, walk: &Walk) -> Result<(), CircuitDefect> {
    if !walk.is_circuit() {
        return Err(CircuitDefect::NotCircuit);
    }

    let walked = walk.length();
    let total = graph.total_edges();
    match (walked as u64).cmp(&total) {
        core::cmp::Ordering::Less => return Err(CircuitDefect::MissingEdges { walked, total }),
        core::cmp::Ordering::Greater => return Err(CircuitDefect::TooManyEdges { walked, total }),
        core::cmp::Ordering::Equal => {}
    }

    let mut edges = graph.edge_matrix_copy();
    let directed = graph.orientation().is_directed();
    for (from, to) in walk.steps() {
        let available = edges.get(from).and_then(|row| row.get(to)).copied().unwrap_or(0);
        if available == 0 {
            return Err(CircuitDefect::Exhausted { from, to });
        }
        edges[from][to] -= 1;
        if !directed && from != to {
            edges[to][from] -= 1;
        }
    }
    Ok(())
}

/// Which search produces the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// [`Graph::find_euler_circuit`].
    #[default]
    Backtracking,
    /// [`Graph::hierholzer_circuit`].
    Hierholzer,
}

impl Strategy {
    /// Runs this strategy on `graph`.
    pub fn run(self, graph: &mut Graph) -> Option<Walk> {
        match self {
            Self::Backtracking => graph.find_euler_circuit(),
            Self::Hierholzer => graph.hierholzer_circuit(),
        }
    }
}

/// Result of searching one graph and validating the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The search reported that no circuit exists.
    NoCircuit,
    /// The search returned a valid Euler circuit.
    Valid(Walk),
    /// The search returned a walk that fails validation.
    Invalid(CircuitDefect),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Searches `graph` with `strategy` and validates whatever it returns.
pub fn evaluate(graph: &mut Graph, strategy: Strategy) -> Outcome {
    let outcome = match strategy.run(graph) {
        None => Outcome::NoCircuit,
        Some(walk) => match validate_circuit(graph, &walk) {
            Ok(()) => Outcome::Valid(walk),
            Err(defect) => Outcome::Invalid(defect),
        },
    };

    #[cfg(feature = "tracing")]
    match &outcome {
        Outcome::Invalid(defect) => tracing::warn!(%defect, ?strategy, "invalid euler circuit"),
        _ => tracing::debug!(valid = outcome.is_valid(), ?strategy, "evaluated graph"),
    }

    outcome
}

/// Evaluates every graph in `graphs`, preserving order.
///
/// With the `parallel` feature the graphs are processed on the rayon pool;
/// each graph is only ever touched by one worker.
pub fn evaluate_all(graphs: &mut [Graph], strategy: Strategy) -> Vec<Outcome> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        graphs.par_iter_mut().map(|g| evaluate(g, strategy)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        graphs.iter_mut().map(|g| evaluate(g, strategy)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Orientation;

    fn walk(vertices: &[usize]) -> Walk {
        let mut w = Walk::with_capacity(vertices.len());
        for &v in vertices {
            assert!(w.append_vertex(v));
        }
        w
    }

    fn triangle() -> Graph {
        Graph::from_matrix(
            Orientation::Undirected,
            vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]],
        )
    }

    #[test]
    fn accepts_euler_circuit() {
        assert_eq!(validate_circuit(&triangle(), &walk(&[0, 2, 1, 0])), Ok(()));
    }

    #[test]
    fn rejects_open_walk() {
        assert_eq!(
            validate_circuit(&triangle(), &walk(&[0, 1, 2])),
            Err(CircuitDefect::NotCircuit)
        );
        assert_eq!(
            validate_circuit(&triangle(), &Walk::with_capacity(0)),
            Err(CircuitDefect::NotCircuit)
        );
    }

    #[test]
    fn rejects_wrong_edge_count() {
        assert_eq!(
            validate_circuit(&triangle(), &walk(&[0, 1, 0])),
            Err(CircuitDefect::MissingEdges { walked: 2, total: 3 })
        );
        assert_eq!(
            validate_circuit(&triangle(), &walk(&[0, 1, 2, 0, 1])),
            Err(CircuitDefect::NotCircuit)
        );
        assert_eq!(
            validate_circuit(&triangle(), &walk(&[0, 1, 2, 1, 0])),
            Err(CircuitDefect::TooManyEdges { walked: 4, total: 3 })
        );
    }

    #[test]
    fn rejects_reused_edge() {
        // right length, but 0-1 is walked twice and 1-2 never
        let g = Graph::from_matrix(
            Orientation::Undirected,
            vec![vec![0, 1, 1, 0], vec![1, 0, 1, 0], vec![1, 1, 0, 0], vec![0, 0, 0, 0]],
        );
        assert_eq!(
            validate_circuit(&g, &walk(&[0, 1, 0, 0])),
            Err(CircuitDefect::Exhausted { from: 1, to: 0 })
        );
    }

    #[test]
    fn checks_the_closing_step() {
        let g = Graph::from_matrix(Orientation::Directed, vec![vec![0, 1], vec![0, 1]]);
        assert_eq!(
            validate_circuit(&g, &walk(&[1, 1, 1])),
            Err(CircuitDefect::Exhausted { from: 1, to: 1 })
        );
        assert_eq!(
            validate_circuit(&g, &walk(&[0, 1, 0])),
            Err(CircuitDefect::Exhausted { from: 1, to: 0 })
        );
    }

    #[test]
    fn evaluate_reports_outcomes() {
        let mut g = triangle();
        assert!(evaluate(&mut g, Strategy::Backtracking).is_valid());
        assert!(evaluate(&mut g, Strategy::Hierholzer).is_valid());

        let mut bowtie = Graph::from_matrix(
            Orientation::Undirected,
            vec![
                vec![0, 1, 1, 1, 1],
                vec![1, 0, 1, 0, 0],
                vec![1, 1, 0, 0, 0],
                vec![1, 0, 0, 0, 1],
                vec![1, 0, 0, 1, 0],
            ],
        );
        assert_eq!(evaluate(&mut bowtie, Strategy::Backtracking), Outcome::NoCircuit);
        assert!(evaluate(&mut bowtie, Strategy::Hierholzer).is_valid());
    }

    #[test]
    fn backtracking_walk_can_miss_edges() {
        // K5 has a Hamiltonian cycle but ten edges
        let mut m = vec![vec![1i64; 5]; 5];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 0;
        }
        let mut k5 = Graph::from_matrix(Orientation::Undirected, m);
        assert_eq!(
            evaluate(&mut k5, Strategy::Backtracking),
            Outcome::Invalid(CircuitDefect::MissingEdges { walked: 5, total: 10 })
        );
        assert!(evaluate(&mut k5, Strategy::Hierholzer).is_valid());
    }

    #[test]
    fn evaluate_all_keeps_order() {
        let mut graphs = vec![
            triangle(),
            Graph::from_matrix(Orientation::Undirected, vec![vec![0, 1], vec![1, 0]]),
        ];
        let outcomes = evaluate_all(&mut graphs, Strategy::Backtracking);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_valid());
        assert_eq!(outcomes[1], Outcome::NoCircuit);
    }
}
