//! `Walk`: a bounded, stack-disciplined sequence of vertex indices.
//!
//! A walk only records *which* vertices are visited and in what order; it has
//! no knowledge of the graph it was built from and never checks that
//! consecutive vertices are adjacent. Edge bookkeeping belongs to
//! [`crate::verify`].
//!
//! Mutation is restricted to the tail: [`Walk::append_vertex`] and
//! [`Walk::remove_last_vertex`] report failure through their `bool` result
//! instead of growing past the capacity or underflowing.

use core::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// An ordered, capacity-bounded list of vertices describing a path or circuit.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `append_vertex` | \(O(1)\) | amortized; storage grows on demand |
/// | `remove_last_vertex` | \(O(1)\) | |
/// | `vertex_at` | \(O(1)\) | |
/// | `vertices` | \(O(n)\) | returns a copy |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    capacity: usize,
    vertices: Vec<usize>,
}

impl Walk {
    /// Largest number of vertices a walk can actually store.
    pub const MAX_CAPACITY: usize = isize::MAX.unsigned_abs() / core::mem::size_of::<usize>();

    /// Creates an empty walk that can hold at most `capacity` vertices.
    ///
    /// Nothing is allocated until the first append.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::new(),
        }
    }

    /// Maximum number of vertices this walk accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the walk has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the walk is a single vertex.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }

    /// Returns `true` if the walk is non-empty and ends where it started.
    pub fn is_circuit(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Number of edges implied by the walk.
    ///
    /// Empty and single-vertex walks both have length 0.
    #[inline]
    pub fn length(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Number of vertices currently in the walk, counting a closing repeat.
    #[inline]
    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the `n`th vertex, or `None` past the end of the walk.
    #[inline]
    pub fn vertex_at(&self, n: usize) -> Option<usize> {
        self.vertices.get(n).copied()
    }

    /// Returns the last vertex of the walk.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Returns a copy of the vertex sequence.
    pub fn vertices(&self) -> Vec<usize> {
        self.vertices.clone()
    }

    /// Iterates over consecutive `(from, to)` steps of the walk.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Appends `vertex` to the end of the walk.
    ///
    /// Returns `false` and leaves the walk untouched when it is already full.
    #[must_use]
    pub fn append_vertex(&mut self, vertex: usize) -> bool {
        if self.vertices.len() >= self.capacity {
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    /// Removes the most recently appended vertex.
    ///
    /// Returns `false` if the walk was already empty.
    #[must_use]
    pub fn remove_last_vertex(&mut self) -> bool {
        self.vertices.pop().is_some()
    }

    /// Reverses the vertex order in place.
    pub(crate) fn reverse(&mut self) {
        self.vertices.reverse();
    }
}

impl<'de> Deserialize<'de> for Walk {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            capacity: usize,
            vertices: Vec<usize>,
        }

        let Raw { capacity, vertices } = Raw::deserialize(deserializer)?;
        if vertices.len() > capacity {
            return Err(de::Error::custom(format_args!(
                "walk holds {} vertices but its capacity is {capacity}",
                vertices.len()
            )));
        }
        Ok(Self { capacity, vertices })
    }
}

impl fmt::Display for Walk {
    /// Vertices separated by single blanks; an empty walk renders as "".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.vertices.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for v in iter {
                write!(f, " {v}")?;
            }
        }
        Ok(())
    }
}
