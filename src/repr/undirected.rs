use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph representation.
/// Every edge `{u, v}` is mirrored into both neighborhoods but counted once.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

/// Representation using an Adjacency-Matrix
pub type AdjMatrixUndir = UndirectedGraph<BitNeighborhood>;

impl_common_graph_ops!(UndirectedGraph => nbs, Undirected);

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }
}

test_graph_ops!(
    test_adj_array_undir,
    AdjArrayUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, AdjacencyTest)
);
test_graph_ops!(
    test_sparse_adj_array_undir,
    SparseAdjArrayUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, AdjacencyTest)
);
test_graph_ops!(
    test_adj_matrix_undir,
    AdjMatrixUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, AdjacencyTest)
);
