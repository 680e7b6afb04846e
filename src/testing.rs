/// Every graph should implement `GraphNodeOrder` and `GraphEdgeOrder`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, Edge, NodeBitSet, NumEdges, NumNodes};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` distinct random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected {
                        Edge(u, v).normalized()
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges).into_iter();

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        let mut edges: Vec<Edge> = edges.map(|e| {
                            let Edge(u, v) = e.into();
                            adj_matrix[u as usize].set_bit(v);

                            if $undirected {
                                adj_matrix[v as usize].set_bit(u);
                            }

                            Edge(u, v)
                        }).collect_vec();

                        let graph = <$graph>::from_edges(n, edges.clone().into_iter());

                        if $undirected {
                            edges.iter_mut().for_each(|e| {
                                *e = e.normalized();
                            });
                        }

                        edges.sort_unstable();
                        edges.dedup();

                        let m = edges.len() as NumEdges;

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                        assert_eq!(edges, graph.ordered_edges($undirected).collect_vec());

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges).into_iter();

                        let mut adj_matrix_in: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];

                        let graph = <$graph>::from_edges(n, edges.map(|e| {
                            let Edge(u, v) = e.into();
                            adj_matrix_in[v as usize].set_bit(u);

                            Edge(u, v)
                        }));

                        for u in 0..n {
                            let in_nbs = NodeBitSet::new_with_bits_set(n, graph.in_neighbors_of(u));
                            assert_eq!(in_nbs, adj_matrix_in[u as usize]);
                            assert_eq!(graph.in_degree_of(u), adj_matrix_in[u as usize].cardinality());
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);

                        let mut m = 0;
                        for &Edge(u, v) in &edges {
                            assert!(!graph.try_add_edge(u, v));
                            m += 1;
                            assert_eq!(graph.number_of_edges(), m);

                            // inserting again must not create a parallel edge
                            assert!(graph.try_add_edge(u, v));
                            if $undirected {
                                assert!(graph.try_add_edge(v, u));
                            }
                            assert_eq!(graph.number_of_edges(), m);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyTest) => {
        #[test]
        fn test_adjacency_test() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [10 as NumNodes, 20, 50] {
                let edges = random_edges(rng, n, 5 * n as NumEdges);
                let graph = <$graph>::from_edges(n, edges.clone().into_iter());

                let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                for &Edge(u, v) in &edges {
                    adj_matrix[u as usize].set_bit(v);
                    if $undirected {
                        adj_matrix[v as usize].set_bit(u);
                    }
                }

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize].get_bit(v));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
