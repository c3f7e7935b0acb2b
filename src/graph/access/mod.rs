//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so graph queries can share
//! visitation scratch space without exposing it as part of the public API.

pub(crate) mod visited;
