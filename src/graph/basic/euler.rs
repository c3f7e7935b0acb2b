//! Euler circuit construction on [`Graph`].
//!
//! Two searches share the graph's scratch state:
//!
//! - [`Graph::find_euler_circuit`]: backtracking over *vertex* choices. It
//!   places every vertex exactly once and closes back to vertex 0, so it can
//!   only succeed when the Euler circuit is a single cycle through all
//!   vertices. Worst case is exponential in the vertex count.
//! - [`Graph::hierholzer_circuit`]: Hierholzer's algorithm over *edge*
//!   multiplicities. Linear in the number of edges (plus a row scan per step)
//!   and covers every edge of any Eulerian multigraph.
//!
//! Neither search recurses; both drive an explicit stack so deep graphs
//! cannot exhaust the call stack.

use crate::collections::Walk;
use crate::graph::Graph;

impl Graph {
    /// Searches for an Euler circuit starting and ending at vertex 0.
    ///
    /// On success the walk is a circuit of `total_vertices() + 1` vertices
    /// (a single vertex for a one-vertex graph) that only steps along
    /// existing edges. It is not checked here that every unit of edge
    /// multiplicity was consumed; see [`crate::verify::validate_circuit`].
    ///
    /// Returns `None` for invalid graphs, graphs that fail the degree
    /// condition or are disconnected, and when the search is exhausted.
    pub fn find_euler_circuit(&mut self) -> Option<Walk> {
        let n = self.total_vertices();
        if n == 0 {
            return None;
        }
        if n == 1 {
            let mut walk = Walk::with_capacity(1);
            let placed = walk.append_vertex(0);
            debug_assert!(placed);
            return Some(walk);
        }
        if !self.satisfies_degree_condition() || !self.is_connected() {
            #[cfg(feature = "tracing")]
            tracing::debug!(vertices = n, "euler preconditions failed");
            return None;
        }

        let found = self.backtrack(n);

        #[cfg(feature = "tracing")]
        tracing::debug!(vertices = n, found = found.is_some(), "euler backtracking finished");

        found
    }

    /// Try/undo search with one frame per placed vertex.
    ///
    /// `next[d]` is the first candidate not yet tried after the vertex at walk
    /// position `d`. Vertex 0 is pinned at position 0 and never reconsidered.
    fn backtrack(&self, n: usize) -> Option<Walk> {
        let mut walk = Walk::with_capacity(n + 1);
        let mut seen = vec![false; n];
        let mut next: Vec<usize> = Vec::with_capacity(n);

        let placed = walk.append_vertex(0);
        debug_assert!(placed);
        seen[0] = true;
        next.push(1);

        loop {
            let tail = walk.last()?;

            if walk.total_vertices() == n {
                if self.edge_count_between(tail, 0) >= 1 {
                    // capacity n + 1 leaves room for the closing vertex
                    let closed = walk.append_vertex(0);
                    debug_assert!(closed);
                    return Some(walk);
                }
            } else if let Some(cursor) = next.last_mut() {
                let row = self.row(tail);
                let candidate = (*cursor..n).find(|&v| row[v] != 0 && !seen[v]);
                if let Some(v) = candidate {
                    *cursor = v + 1;
                    let placed = walk.append_vertex(v);
                    debug_assert!(placed);
                    seen[v] = true;
                    next.push(1);
                    continue;
                }
            }

            // this frame is exhausted: undo the vertex that opened it
            next.pop();
            if walk.total_vertices() == 1 {
                return None;
            }
            seen[tail] = false;
            let removed = walk.remove_last_vertex();
            debug_assert!(removed);
        }
    }

    /// Builds an Euler circuit that covers every edge exactly once.
    ///
    /// The circuit starts at the lowest-numbered vertex with an edge and has
    /// `total_edges() + 1` vertices. An edgeless valid graph yields the
    /// trivial walk `[0]`.
    ///
    /// Returns `None` for invalid graphs, graphs failing the degree
    /// condition, graphs whose edges are not all reachable, and graphs with
    /// more edges than a [`Walk`] can store ([`Walk::MAX_CAPACITY`]).
    pub fn hierholzer_circuit(&mut self) -> Option<Walk> {
        let n = self.total_vertices();
        if n == 0 || !self.satisfies_degree_condition() {
            return None;
        }
        let start = (0..n).find(|&v| self.row(v).iter().any(|&m| m != 0)).unwrap_or(0);
        let capacity = usize::try_from(self.total_edges())
            .ok()
            .and_then(|total| total.checked_add(1))
            .filter(|&c| c <= Walk::MAX_CAPACITY);
        let Some(capacity) = capacity else {
            #[cfg(feature = "tracing")]
            tracing::debug!(edges = self.total_edges(), "circuit too long to store");
            return None;
        };
        let mirror = !self.orientation().is_directed();

        self.visit_from(start);
        let mut walk = Walk::with_capacity(capacity);
        let mut stack = vec![start];
        // next column worth scanning in each row
        let mut cursor = vec![0usize; n];

        while let Some(&u) = stack.last() {
            let scratch = &self.scratch;
            let v = (cursor[u]..n).find(|&v| scratch.remaining(u, v) > 0);
            match v {
                Some(v) => {
                    cursor[u] = v;
                    self.scratch.traverse(u, v, mirror);
                    stack.push(v);
                }
                None => {
                    cursor[u] = n;
                    stack.pop();
                    if !walk.append_vertex(u) {
                        return None;
                    }
                }
            }
        }

        if self.scratch.visited_total(!mirror) != self.total_edges() {
            #[cfg(feature = "tracing")]
            tracing::debug!(vertices = n, "hierholzer left edges unreachable");
            return None;
        }

        // vertices were emitted in reverse; reverse again for directed edges
        walk.reverse();
        Some(walk)
    }
}
