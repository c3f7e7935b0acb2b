//! Adjacency-multiplicity graphs and Euler circuit construction.
//!
//! - `basic`: the dense matrix representation and its searches
//! - `access`: crate-private visitation scratch shared by traversals

pub mod basic;
pub mod error;
pub(crate) mod access;

pub use basic::{Graph, Orientation};
pub use error::GraphError;
