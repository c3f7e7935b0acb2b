//! Basic graph implementations.
//!
//! `matrix_graph` holds the representation and structural queries;
//! `euler` adds the circuit searches as further `impl Graph` blocks.

pub mod euler;
pub mod matrix_graph;

pub use matrix_graph::{Graph, Orientation};
