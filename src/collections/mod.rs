//! Collections used to accumulate search results.

pub mod walk;

pub use walk::Walk;
