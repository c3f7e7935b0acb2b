use eulerian::{validate_circuit, Graph, Orientation};
use proptest::prelude::*;

/// Symmetric matrices with an empty diagonal and small multiplicities.
fn symmetric_matrix(max_n: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
    (1..=max_n).prop_flat_map(|n| {
        proptest::collection::vec(0i64..3, n * (n - 1) / 2).prop_map(move |upper| {
            let mut m = vec![vec![0i64; n]; n];
            let mut it = upper.into_iter();
            for i in 0..n {
                for j in i + 1..n {
                    let v = it.next().unwrap_or(0);
                    m[i][j] = v;
                    m[j][i] = v;
                }
            }
            m
        })
    })
}

fn petgraph_is_connected(m: &[Vec<i64>]) -> bool {
    let mut pg = petgraph::Graph::<(), (), petgraph::Undirected>::new_undirected();
    let nodes: Vec<_> = (0..m.len()).map(|_| pg.add_node(())).collect();
    for i in 0..m.len() {
        for j in i + 1..m.len() {
            if m[i][j] != 0 {
                pg.add_edge(nodes[i], nodes[j], ());
            }
        }
    }
    petgraph::algo::connected_components(&pg) == 1
}

proptest! {
    #[test]
    fn undirected_edge_count_is_half_the_matrix_sum(m in symmetric_matrix(8)) {
        let sum: i64 = m.iter().flatten().sum();
        let g = Graph::from_matrix(Orientation::Undirected, m);
        prop_assert!(g.is_valid());
        prop_assert_eq!(g.total_edges() as i64 * 2, sum);
    }

    #[test]
    fn connectivity_matches_petgraph(m in symmetric_matrix(9)) {
        let expected = petgraph_is_connected(&m);
        let mut g = Graph::from_matrix(Orientation::Undirected, m);
        prop_assert_eq!(g.is_connected(), expected);
    }

    #[test]
    fn out_of_range_edge_count_is_zero(m in symmetric_matrix(6), extra in 0usize..100) {
        let n = m.len();
        let g = Graph::from_matrix(Orientation::Undirected, m);
        prop_assert_eq!(g.edge_count_between(n + extra, 0), 0);
        prop_assert_eq!(g.edge_count_between(0, n + extra), 0);
    }

    #[test]
    fn found_circuits_are_closed_and_follow_edges(m in symmetric_matrix(7)) {
        let mut g = Graph::from_matrix(Orientation::Undirected, m);
        if let Some(walk) = g.find_euler_circuit() {
            prop_assert!(walk.is_circuit());
            if g.total_vertices() > 1 {
                prop_assert_eq!(walk.total_vertices(), g.total_vertices() + 1);
                for (a, b) in walk.steps() {
                    prop_assert!(g.edge_count_between(a, b) >= 1);
                }
            }
        }
    }

    #[test]
    fn hierholzer_is_exact_on_eulerian_graphs(m in symmetric_matrix(7)) {
        let mut g = Graph::from_matrix(Orientation::Undirected, m);
        let eulerian = g.satisfies_degree_condition() && g.is_connected();
        match g.hierholzer_circuit() {
            Some(walk) => prop_assert_eq!(validate_circuit(&g, &walk), Ok(())),
            None => prop_assert!(!eulerian),
        }
    }

    #[test]
    fn every_hamiltonian_cycle_is_found(
        order in (3usize..12).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
    ) {
        let n = order.len();
        let mut m = vec![vec![0i64; n]; n];
        for k in 0..n {
            let (a, b) = (order[k], order[(k + 1) % n]);
            m[a][b] = 1;
            m[b][a] = 1;
        }
        let mut g = Graph::from_matrix(Orientation::Undirected, m);
        let walk = g.find_euler_circuit();
        prop_assert!(walk.is_some());
        let walk = walk.unwrap();
        prop_assert_eq!(validate_circuit(&g, &walk), Ok(()));
    }
}
