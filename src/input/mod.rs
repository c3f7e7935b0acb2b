//! Producers of graphs: a line-oriented text format and a seeded random
//! generator of simple graphs.

pub mod random;
pub mod text;

pub use random::{random_simple, GenerateError};
pub use text::{parse_graphs, read_graphs, GraphFile, ParseError, ParseErrorKind};
