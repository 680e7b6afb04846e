use std::{cmp::Reverse, collections::BinaryHeap};

use num::Zero;

use super::*;

/// Edges and total weight of a minimum spanning forest.
#[derive(Debug, Clone)]
pub struct MstResult<W> {
    /// Normalized tree edges. A connected graph on `n` nodes yields `n - 1` edges.
    pub edges: Vec<Edge>,
    /// Sum of the tree edge weights.
    pub total_weight: W,
}

impl<W: Weight> MstResult<W> {
    /// Returns *true* if the forest spans a connected graph on `n` nodes.
    pub fn spans(&self, n: NumNodes) -> bool {
        self.edges.len() as NumNodes + 1 == n
    }
}

/// Minimum spanning tree computation on weighted undirected graphs.
pub trait MinimumSpanningTree<W: Weight>:
    WeightedEdges<W> + GraphType<Dir = Undirected> + Sized
{
    /// Computes a minimum spanning forest with Prim's algorithm.
    ///
    /// On a disconnected graph every connected component contributes its own
    /// spanning tree; use [`MstResult::spans`] to check connectivity.
    fn minimum_spanning_tree(&self) -> MstResult<W> {
        let mut in_tree = NodeBitSet::new(self.number_of_nodes());
        let mut result = MstResult {
            edges: Vec::with_capacity(self.len().saturating_sub(1)),
            total_weight: W::zero(),
        };

        // (weight, endpoint outside the tree, endpoint inside the tree);
        // entries are not removed on update, stale ones are skipped on pop
        let mut heap: BinaryHeap<Reverse<(W, Node, Node)>> = BinaryHeap::new();

        for root in self.vertices() {
            if in_tree.set_bit(root) {
                continue;
            }

            for (v, w) in self.weighted_edges_of(root) {
                heap.push(Reverse((w, v, root)));
            }

            while let Some(Reverse((weight, v, u))) = heap.pop() {
                if in_tree.set_bit(v) {
                    continue;
                }

                result.edges.push(Edge(u, v).normalized());
                result.total_weight = result.total_weight.saturating_add_weight(weight);

                for (x, w) in self.weighted_edges_of(v) {
                    if !in_tree.get_bit(x) {
                        heap.push(Reverse((w, x, v)));
                    }
                }
            }
        }

        result
    }
}

impl<W, G> MinimumSpanningTree<W> for G
where
    W: Weight,
    G: WeightedEdges<W> + GraphType<Dir = Undirected> + Sized,
{
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn triangle() {
        let graph =
            WeightedAdjArrayUndir::<u32>::from_weighted_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)]);

        let mst = graph.minimum_spanning_tree();
        assert!(mst.spans(3));
        assert_eq!(mst.total_weight, 3);
        assert_eq!(
            mst.edges.iter().copied().sorted().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2)]
        );
    }

    #[test]
    fn classic_example() {
        let graph = WeightedAdjArrayUndir::<u32>::from_weighted_edges(
            6,
            [
                (0, 1, 4),
                (0, 2, 4),
                (1, 2, 2),
                (2, 3, 3),
                (2, 4, 2),
                (2, 5, 4),
                (3, 5, 3),
                (4, 5, 3),
            ],
        );

        let mst = graph.minimum_spanning_tree();
        assert!(mst.spans(6));
        assert_eq!(mst.total_weight, 14);
        assert_eq!(mst.edges.len(), 5);
    }

    #[test]
    fn spanning_forest_on_disconnected() {
        let graph = WeightedAdjArrayUndir::<u32>::from_weighted_edges(
            5,
            [(0, 1, 1), (1, 2, 2), (0, 2, 5), (3, 4, 7)],
        );

        let mst = graph.minimum_spanning_tree();
        assert!(!mst.spans(5));
        assert_eq!(mst.edges.len(), 3);
        assert_eq!(mst.total_weight, 10);
    }

    #[test]
    fn parallel_insert_keeps_cheaper_edge() {
        let mut graph = WeightedAdjArrayUndir::<u32>::new(2);
        graph.add_weighted_edge(0, 1, 9);
        graph.add_weighted_edge(1, 0, 2);

        let mst = graph.minimum_spanning_tree();
        assert_eq!(mst.total_weight, 2);
    }

    #[test]
    fn tree_edges_are_graph_edges() {
        let graph = WeightedAdjArrayUndir::<u32>::from_weighted_edges(
            4,
            [(0, 1, 3), (1, 2, 1), (2, 3, 4), (3, 0, 1), (0, 2, 2)],
        );

        let mst = graph.minimum_spanning_tree();
        assert!(mst.spans(4));
        for Edge(u, v) in mst.edges.iter().copied() {
            assert!(graph.has_edge(u, v));
        }
        assert_eq!(mst.total_weight, 4);
    }
}
