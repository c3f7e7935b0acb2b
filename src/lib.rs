//! # `eulerian` - Euler circuits over adjacency-multiplicity graphs
//!
//! Graphs are given as square matrices where entry `[i][j]` counts the edges
//! from vertex `i` to vertex `j`. A [`Graph`] validates its matrix once,
//! derives its vertex and edge counts, and answers structural queries. Two
//! searches build circuits into a bounded [`Walk`]:
//!
//! - [`Graph::find_euler_circuit`]: try/undo backtracking over vertex
//!   choices, closing a cycle through every vertex back to vertex 0.
//! - [`Graph::hierholzer_circuit`]: edge-based construction that covers
//!   every unit of edge multiplicity.
//!
//! [`verify::validate_circuit`] replays a walk against the matrix and is the
//! final word on whether it is an Euler circuit.
//!
//! ## Failure model
//!
//! Nothing in this crate panics on bad input:
//! - malformed matrices produce an *invalid* graph carrying its
//!   [`GraphError`]s, which behaves as an empty graph;
//! - out-of-range lookups return `0` or `None`;
//! - a full or empty [`Walk`] rejects `append_vertex`/`remove_last_vertex`
//!   with `false`;
//! - a graph without a circuit yields `None`.
//!
//! Both searches and the connectivity check drive explicit stacks, so
//! thousands of vertices never deepen the call stack.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for rejected input and search results.
//! - `parallel`: run [`verify::evaluate_all`] on the rayon thread pool.
//!
//! ## Example
//!
//! ```rust
//! use eulerian::{Graph, Orientation};
//!
//! let mut square = Graph::from_matrix(
//!     Orientation::Undirected,
//!     vec![
//!         vec![0, 1, 0, 1],
//!         vec![1, 0, 1, 0],
//!         vec![0, 1, 0, 1],
//!         vec![1, 0, 1, 0],
//!     ],
//! );
//!
//! let circuit = square.find_euler_circuit().expect("4-cycle is Eulerian");
//! assert_eq!(circuit.to_string(), "0 1 2 3 0");
//! assert!(eulerian::verify::validate_circuit(&square, &circuit).is_ok());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;
pub mod input;
pub mod verify;

pub use collections::Walk;
pub use graph::{Graph, GraphError, Orientation};
pub use input::{parse_graphs, random_simple, read_graphs, GraphFile};
pub use verify::{evaluate, evaluate_all, validate_circuit, CircuitDefect, Outcome, Strategy};
