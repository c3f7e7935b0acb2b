//! Reusable visitation scratch space for graph queries.
//!
//! Every traversal on [`crate::graph::Graph`] starts by calling
//! [`VisitState::reset`], so the flags and counters here never carry state
//! from one query into the next. The state is crate-private: graphs hand out
//! results, never references into their scratch.

/// Per-vertex visited flags plus visited/unvisited edge counters.
///
/// Edge counters are stored row-major, `n * n` entries.
pub(crate) struct VisitState {
    n: usize,
    vertices: Vec<bool>,
    visited_edges: Vec<u64>,
    unvisited_edges: Vec<u64>,
}

impl VisitState {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            vertices: vec![false; n],
            visited_edges: vec![0; n * n],
            unvisited_edges: vec![0; n * n],
        }
    }

    /// Clears all flags and reloads the unvisited counters from `edges`.
    ///
    /// `edges` must be the owning graph's row-major matrix.
    pub(crate) fn reset(&mut self, edges: &[u64]) {
        debug_assert_eq!(edges.len(), self.n * self.n);
        self.vertices.fill(false);
        self.visited_edges.fill(0);
        self.unvisited_edges.copy_from_slice(edges);
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, v: usize) -> bool {
        self.vertices[v]
    }

    /// Returns `true` iff `v` was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, v: usize) -> bool {
        !core::mem::replace(&mut self.vertices[v], true)
    }

    #[inline(always)]
    pub(crate) fn all_visited(&self) -> bool {
        self.vertices.iter().all(|&seen| seen)
    }

    #[inline(always)]
    pub(crate) fn remaining(&self, from: usize, to: usize) -> u64 {
        self.unvisited_edges[from * self.n + to]
    }

    /// Moves one unit of multiplicity `from -> to` from unvisited to visited.
    ///
    /// Undirected graphs pass `mirror = true` so the reverse entry is consumed
    /// too; loops are consumed once.
    pub(crate) fn traverse(&mut self, from: usize, to: usize, mirror: bool) {
        let fwd = from * self.n + to;
        debug_assert!(self.unvisited_edges[fwd] > 0);
        self.unvisited_edges[fwd] -= 1;
        self.visited_edges[fwd] += 1;
        if mirror && from != to {
            let back = to * self.n + from;
            self.unvisited_edges[back] -= 1;
            self.visited_edges[back] += 1;
        }
    }

    /// Edges traversed since the last reset, counted the way
    /// [`crate::graph::Graph::total_edges`] counts them.
    pub(crate) fn visited_total(&self, directed: bool) -> u64 {
        let mut total = 0;
        for i in 0..self.n {
            let start = if directed { 0 } else { i };
            let row = &self.visited_edges[i * self.n..(i + 1) * self.n];
            total += row[start..].iter().sum::<u64>();
        }
        total
    }
}
