/*!
# Weighted Shortest Paths

Single-source shortest paths via Dijkstra (non-negative weights) and
Bellman-Ford (arbitrary weights, with negative cycle extraction), plus
all-pairs distances via Floyd-Warshall.

All routines treat [`Weight::infinity`] as "unreachable" and never relax
an edge out of an unreachable node. This matters for Bellman-Ford and
Floyd-Warshall where adding a negative weight to the sentinel would
produce bogus finite distances.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;
use num::Zero;

use super::*;

/// Distances and predecessors of a single-source shortest path computation.
pub struct ShortestPathTree<W> {
    source: Node,
    distances: Vec<W>,
    parents: Vec<Option<OptionalNode>>,
}

impl<W: Weight> ShortestPathTree<W> {
    /// Returns the source node of the computation.
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the distance from the source to `u`, or `None` if `u` is unreachable.
    pub fn distance(&self, u: Node) -> Option<W> {
        let d = self.distances[u as usize];
        (!d.is_infinite()).then_some(d)
    }

    /// Returns the raw distance array where unreachable nodes hold [`Weight::infinity`].
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Returns the predecessor of `u` in the shortest path tree.
    /// The source and unreachable nodes have no predecessor.
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parents[u as usize].map(|p| p.get())
    }

    /// Returns a shortest path from the source to `target` including both
    /// endpoints, or `None` if `target` is unreachable.
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        if self.distances[target as usize].is_infinite() {
            return None;
        }

        let mut path = vec![target];
        let mut node = target;
        while let Some(p) = self.parents[node as usize] {
            node = p.get();
            path.push(node);
        }
        debug_assert_eq!(node, self.source);

        path.reverse();
        Some(path)
    }
}

/// Result of a Bellman-Ford computation.
pub enum BellmanFordOutcome<W> {
    /// No negative cycle is reachable from the source.
    Distances(ShortestPathTree<W>),
    /// The nodes of a reachable negative cycle in edge order.
    NegativeCycle(Vec<Node>),
}

impl<W: Weight> BellmanFordOutcome<W> {
    /// Returns the shortest path tree or `None` if a negative cycle was found.
    pub fn tree(self) -> Option<ShortestPathTree<W>> {
        match self {
            BellmanFordOutcome::Distances(tree) => Some(tree),
            BellmanFordOutcome::NegativeCycle(_) => None,
        }
    }

    /// Returns *true* if a negative cycle reachable from the source exists.
    pub fn has_negative_cycle(&self) -> bool {
        matches!(self, BellmanFordOutcome::NegativeCycle(_))
    }
}

/// All-pairs distances as a dense `n * n` matrix.
pub struct DistanceMatrix<W> {
    n: NumNodes,
    distances: Vec<W>,
}

impl<W: Weight> DistanceMatrix<W> {
    /// Returns the distance from `u` to `v`, or `None` if `v` is unreachable from `u`.
    pub fn distance(&self, u: Node, v: Node) -> Option<W> {
        let d = self.distances[self.index_of(u, v)];
        (!d.is_infinite()).then_some(d)
    }

    /// Returns *true* if some node can reach itself with negative total weight.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.n).any(|u| self.distances[self.index_of(u, u)] < W::zero())
    }

    fn index_of(&self, u: Node, v: Node) -> usize {
        debug_assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }
}

/// Shortest path computations on weighted graphs.
pub trait ShortestPaths<W: Weight>: WeightedEdges<W> + Sized {
    /// Computes single-source shortest paths with Dijkstra's algorithm.
    ///
    /// All edge weights must be non-negative; negative weights silently
    /// produce wrong results (use [`ShortestPaths::bellman_ford`] instead).
    /// ** Panics if `source >= n` **
    fn dijkstra(&self, source: Node) -> ShortestPathTree<W> {
        let n = self.len();
        let mut distances = vec![W::infinity(); n];
        let mut parents: Vec<Option<OptionalNode>> = vec![None; n];

        distances[source as usize] = W::zero();

        // lazy deletion: outdated entries stay in the heap and are skipped on pop
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((W::zero(), source)));

        while let Some(Reverse((dist, u))) = heap.pop() {
            if dist > distances[u as usize] {
                continue;
            }

            for (v, weight) in self.weighted_edges_of(u) {
                let candidate = dist.saturating_add_weight(weight);
                if candidate < distances[v as usize] {
                    distances[v as usize] = candidate;
                    parents[v as usize] = OptionalNode::new(u);
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        ShortestPathTree {
            source,
            distances,
            parents,
        }
    }

    /// Computes single-source shortest paths with Bellman-Ford, supporting
    /// negative edge weights. If a negative cycle is reachable from the
    /// source, its nodes are returned instead of distances.
    /// ** Panics if `source >= n` **
    fn bellman_ford(&self, source: Node) -> BellmanFordOutcome<W> {
        let n = self.number_of_nodes();
        let mut distances = vec![W::infinity(); n as usize];
        let mut parents: Vec<Option<OptionalNode>> = vec![None; n as usize];

        distances[source as usize] = W::zero();

        let edges = self.weighted_edges().collect_vec();

        let mut relax_round = |distances: &mut [W], parents: &mut [Option<OptionalNode>]| {
            let mut last_relaxed = None;
            for &(Edge(u, v), weight) in &edges {
                if distances[u as usize].is_infinite() {
                    continue;
                }

                let candidate = distances[u as usize].saturating_add_weight(weight);
                if candidate < distances[v as usize] {
                    distances[v as usize] = candidate;
                    parents[v as usize] = OptionalNode::new(u);
                    last_relaxed = Some(v);
                }
            }
            last_relaxed
        };

        for _ in 1..n {
            if relax_round(&mut distances, &mut parents).is_none() {
                break;
            }
        }

        if let Some(witness) = relax_round(&mut distances, &mut parents) {
            // a relaxation in round n proves a negative cycle; walking n parent
            // steps from the witness is guaranteed to land on it
            let mut on_cycle = witness;
            for _ in 0..n {
                on_cycle = parents[on_cycle as usize].unwrap().get();
            }

            let mut cycle = vec![on_cycle];
            let mut node = parents[on_cycle as usize].unwrap().get();
            while node != on_cycle {
                cycle.push(node);
                node = parents[node as usize].unwrap().get();
            }

            // parents point against the edge direction
            cycle.reverse();
            return BellmanFordOutcome::NegativeCycle(cycle);
        }

        BellmanFordOutcome::Distances(ShortestPathTree {
            source,
            distances,
            parents,
        })
    }

    /// Computes all-pairs shortest distances with Floyd-Warshall.
    /// Runs in `O(n^3)` time and `O(n^2)` space.
    fn floyd_warshall(&self) -> DistanceMatrix<W> {
        let n = self.number_of_nodes();
        let mut matrix = DistanceMatrix {
            n,
            distances: vec![W::infinity(); n as usize * n as usize],
        };

        for u in self.vertices() {
            let idx = matrix.index_of(u, u);
            matrix.distances[idx] = W::zero();
        }

        for (Edge(u, v), weight) in self.weighted_edges() {
            let idx = matrix.index_of(u, v);
            matrix.distances[idx] = matrix.distances[idx].min(weight);
        }

        for k in 0..n {
            for u in 0..n {
                let d_uk = matrix.distances[matrix.index_of(u, k)];
                if d_uk.is_infinite() {
                    continue;
                }

                for v in 0..n {
                    let d_kv = matrix.distances[matrix.index_of(k, v)];
                    if d_kv.is_infinite() {
                        continue;
                    }

                    let candidate = d_uk.saturating_add_weight(d_kv);
                    let idx = matrix.index_of(u, v);
                    if candidate < matrix.distances[idx] {
                        matrix.distances[idx] = candidate;
                    }
                }
            }
        }

        matrix
    }
}

impl<W, G> ShortestPaths<W> for G
where
    W: Weight,
    G: WeightedEdges<W> + Sized,
{
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> WeightedAdjArray<u32> {
        WeightedAdjArray::from_weighted_edges(
            5,
            [
                (0, 1, 10),
                (0, 2, 3),
                (1, 3, 2),
                (2, 1, 4),
                (2, 3, 8),
                (2, 4, 2),
                (3, 4, 5),
            ],
        )
    }

    #[test]
    fn dijkstra_distances() {
        let graph = example();
        let tree = graph.dijkstra(0);

        assert_eq!(tree.source(), 0);
        assert_eq!(tree.distances(), &[0, 7, 3, 9, 5]);
        assert_eq!(tree.distance(3), Some(9));
    }

    #[test]
    fn dijkstra_paths_include_endpoints() {
        let graph = example();
        let tree = graph.dijkstra(0);

        assert_eq!(tree.path_to(0), Some(vec![0]));
        assert_eq!(tree.path_to(3), Some(vec![0, 2, 1, 3]));
        assert_eq!(tree.path_to(4), Some(vec![0, 2, 4]));
    }

    #[test]
    fn dijkstra_agrees_across_representations() {
        let sparse = example();
        let dense = WeightedAdjMatrix::<u32>::from_weighted_edges(
            5,
            sparse.weighted_edges().map(|(Edge(u, v), w)| (u, v, w)),
        );

        for u in sparse.vertices_range() {
            let sparse_tree = sparse.dijkstra(u);
            let dense_tree = dense.dijkstra(u);

            assert_eq!(sparse_tree.distances(), dense_tree.distances());
            for v in sparse.vertices_range() {
                assert_eq!(sparse_tree.path_to(v), dense_tree.path_to(v));
            }
        }
    }

    #[test]
    fn dijkstra_unreachable() {
        let graph = WeightedAdjArray::<u32>::from_weighted_edges(3, [(0, 1, 1)]);
        let tree = graph.dijkstra(0);

        assert_eq!(tree.distance(2), None);
        assert_eq!(tree.path_to(2), None);
        assert_eq!(tree.parent_of(2), None);
    }

    #[test]
    fn dijkstra_keeps_minimum_parallel_weight() {
        let mut graph = WeightedAdjArray::<u32>::new(2);
        graph.add_weighted_edge(0, 1, 7);
        graph.add_weighted_edge(0, 1, 3);

        assert_eq!(graph.dijkstra(0).distance(1), Some(3));
    }

    #[test]
    fn dijkstra_undirected() {
        let graph = WeightedAdjArrayUndir::<u32>::from_weighted_edges(
            4,
            [(0, 1, 1), (1, 2, 2), (2, 3, 1), (0, 3, 10)],
        );
        let tree = graph.dijkstra(3);

        assert_eq!(tree.distances(), &[4, 3, 1, 0]);
        assert_eq!(tree.path_to(0), Some(vec![3, 2, 1, 0]));
    }

    #[test]
    fn bellman_ford_matches_dijkstra_on_non_negative() {
        let graph = WeightedAdjArray::<i64>::from_weighted_edges(
            5,
            [
                (0, 1, 10),
                (0, 2, 3),
                (1, 3, 2),
                (2, 1, 4),
                (2, 3, 8),
                (2, 4, 2),
                (3, 4, 5),
            ],
        );

        let bf = graph.bellman_ford(0).tree().unwrap();
        let dij = graph.dijkstra(0);
        assert_eq!(bf.distances(), dij.distances());
    }

    #[test]
    fn bellman_ford_negative_edges() {
        let graph = WeightedAdjArray::<i32>::from_weighted_edges(
            4,
            [(0, 1, 4), (0, 2, 5), (1, 3, -3), (2, 3, -1), (3, 1, 1)],
        );

        let tree = graph.bellman_ford(0).tree().unwrap();
        assert_eq!(tree.distances(), &[0, 4, 5, 1]);
    }

    #[test]
    fn bellman_ford_negative_cycle() {
        let graph = WeightedAdjArray::<i32>::from_weighted_edges(
            5,
            [(0, 1, 1), (1, 2, -2), (2, 3, -3), (3, 1, 2), (3, 4, 1)],
        );

        let outcome = graph.bellman_ford(0);
        assert!(outcome.has_negative_cycle());

        let BellmanFordOutcome::NegativeCycle(cycle) = outcome else {
            unreachable!()
        };

        // witness must be a closed walk of negative total weight
        let mut total = 0;
        for (&u, &v) in cycle.iter().circular_tuple_windows() {
            total += graph.edge_weight(u, v).unwrap();
        }
        assert!(total < 0);
        assert_eq!(cycle.iter().copied().sorted().collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn bellman_ford_ignores_unreachable_negative_cycle() {
        let graph =
            WeightedAdjArray::<i32>::from_weighted_edges(4, [(0, 1, 5), (2, 3, -2), (3, 2, -2)]);

        let tree = graph.bellman_ford(0).tree().unwrap();
        assert_eq!(tree.distance(1), Some(5));
        assert_eq!(tree.distance(2), None);
    }

    #[test]
    fn dijkstra_on_unit_weights_matches_bfs() {
        use rand::SeedableRng;
        use rand_pcg::Pcg64Mcg;

        use crate::gens::RandomGraph;

        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for _ in 0..5 {
            let graph: AdjArray = AdjArray::gnp(rng, 40, 0.08);
            let weighted = WeightedAdjArray::<u32>::from_weighted_edges(
                graph.number_of_nodes(),
                graph.edges(false).map(|Edge(u, v)| (u, v, 1)),
            );

            let hops = graph.bfs_distances([0]);
            let tree = weighted.dijkstra(0);

            for u in graph.vertices() {
                match tree.distance(u) {
                    Some(d) => assert_eq!(d, hops[u as usize]),
                    None => assert_eq!(hops[u as usize], INVALID_NODE),
                }
            }
        }
    }

    #[test]
    fn floyd_warshall_matches_dijkstra() {
        let graph = example();
        let matrix = graph.floyd_warshall();

        for u in graph.vertices() {
            let tree = graph.dijkstra(u);
            for v in graph.vertices() {
                assert_eq!(matrix.distance(u, v), tree.distance(v));
            }
        }

        assert!(!matrix.has_negative_cycle());
    }

    #[test]
    fn floyd_warshall_negative_cycle() {
        let graph =
            WeightedAdjArray::<i32>::from_weighted_edges(3, [(0, 1, 1), (1, 2, -3), (2, 1, 1)]);

        assert!(graph.floyd_warshall().has_negative_cycle());
    }
}
