//! Seeded random simple graphs.

use core::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, Orientation};

/// Rejected parameters for [`random_simple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// `vertices` was zero.
    NoVertices,
    /// `density` was not greater than 1.
    Density(u32),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVertices => f.write_str("number of vertices must be positive"),
            Self::Density(d) => write!(f, "density must be greater than 1, got {d}"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generates an undirected simple graph (no loops, no parallel edges).
///
/// Each unordered pair of distinct vertices is joined with probability
/// `1 / density`. The same `seed` always yields the same graph.
///
/// # Errors
/// Returns [`GenerateError`] if `vertices == 0` or `density <= 1`.
pub fn random_simple(seed: u64, vertices: usize, density: u32) -> Result<Graph, GenerateError> {
    if vertices == 0 {
        return Err(GenerateError::NoVertices);
    }
    if density <= 1 {
        return Err(GenerateError::Density(density));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = vec![vec![0i64; vertices]; vertices];
    for i in 0..vertices {
        for j in i + 1..vertices {
            if rng.gen_range(0..density) == density - 1 {
                matrix[i][j] = 1;
                matrix[j][i] = 1;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(seed, vertices, density, "generated random simple graph");

    Ok(Graph::new(Orientation::Undirected, vertices, matrix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(random_simple(1, 0, 3).unwrap_err(), GenerateError::NoVertices);
        assert_eq!(random_simple(1, 4, 1).unwrap_err(), GenerateError::Density(1));
    }

    #[test]
    fn same_seed_same_graph() {
        let a = random_simple(42, 12, 3).unwrap();
        let b = random_simple(42, 12, 3).unwrap();
        assert_eq!(a.edge_matrix_copy(), b.edge_matrix_copy());
    }

    #[test]
    fn output_is_simple_and_undirected() {
        let g = random_simple(7, 20, 2).unwrap();
        assert!(g.is_valid());
        assert_eq!(g.orientation(), Orientation::Undirected);
        for i in 0..20 {
            assert_eq!(g.edge_count_between(i, i), 0);
            for j in 0..20 {
                assert!(g.edge_count_between(i, j) <= 1);
            }
        }
    }
}
