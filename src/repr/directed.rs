/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] with a
[`Neighborhood`] type, which controls how adjacency information is stored.

## Provided Representations

- [`AdjArray`] — adjacency arrays for outgoing neighbors.
- [`SparseAdjArray`] — sparse adjacency arrays using inline small vectors.
- [`AdjMatrix`] — bitset-based adjacency matrices with constant-time edge tests.

## Design
[`DirectedGraph`] stores **only outgoing neighborhoods** and derives incoming
neighborhoods by scanning all vertices (costly). Algorithms that need
in-degrees in bulk compute them with a single pass over all edges instead.
*/

use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Clone)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays (`Vec<Node>`).
pub type AdjArray = DirectedGraph<ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[Node; N]>`).
pub type SparseAdjArray = DirectedGraph<SparseNeighborhood>;

/// Directed graph using a bitset-based adjacency matrix (`NodeBitSet`).
pub type AdjMatrix = DirectedGraph<BitNeighborhood>;

impl_common_graph_ops!(DirectedGraph => out_nbs, Directed);

impl<OutNbs: Neighborhood> GraphEdgeEditing for DirectedGraph<OutNbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        if self.out_nbs[u as usize].try_add_neighbor(v) {
            true
        } else {
            self.num_edges += 1;
            false
        }
    }
}

impl<OutNbs: Neighborhood> DirectedAdjacencyList for DirectedGraph<OutNbs> {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        assert!(u < self.number_of_nodes());
        self.vertices()
            .filter(move |&v| self.out_nbs[v as usize].has_neighbor(u))
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        // Should be avoided as this is very costly
        self.in_neighbors_of(u).count() as NumNodes
    }
}

test_graph_ops!(
    test_adj_array,
    AdjArray,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        AdjacencyTest
    )
);
test_graph_ops!(
    test_sparse_adj_array,
    SparseAdjArray,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        AdjacencyTest
    )
);
test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        AdjacencyTest
    )
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transposed() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 0), (3, 0)].iter());
        let transposed = graph.transposed();

        assert_eq!(transposed.number_of_edges(), 4);
        for Edge(u, v) in graph.edges(false) {
            assert!(transposed.has_edge(v, u));
        }
    }
}
