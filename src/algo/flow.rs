/*!
# Maximum Flow

s-t maximum flow on directed graphs whose edge weights act as capacities.

The flow solvers operate on a [`ResidualNetwork`] copied out of the input
graph. Arcs are stored in pairs where arc `a ^ 1` is the reverse of arc `a`,
so pushing flow over an arc and undoing it later are both O(1).

Both solvers are iterators: each call to `next` searches one augmenting
path and yields its bottleneck capacity. [`MaxFlow::max_flow`] simply sums
the bottlenecks.
*/

use std::collections::VecDeque;

use num::Zero;

use super::*;

const NO_ARC: usize = usize::MAX;

/// Residual graph of a flow computation with paired forward/backward arcs.
pub struct ResidualNetwork<W> {
    heads: Vec<Node>,
    residual: Vec<W>,
    adj: Vec<Vec<usize>>,
}

impl<W: Weight> ResidualNetwork<W> {
    /// Copies the capacities of a weighted directed graph.
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedAdjacencyList + GraphEdgeOrder + WeightedEdges<W>,
    {
        let num_arcs = 2 * graph.number_of_edges() as usize;
        let mut network = Self {
            heads: Vec::with_capacity(num_arcs),
            residual: Vec::with_capacity(num_arcs),
            adj: vec![Vec::new(); graph.len()],
        };

        for (Edge(u, v), capacity) in graph.weighted_edges() {
            network.add_arc(u, v, capacity);
        }

        network
    }

    /// Returns the residual capacity of arc `a`.
    pub fn residual_capacity(&self, a: usize) -> W {
        self.residual[a]
    }

    fn add_arc(&mut self, u: Node, v: Node, capacity: W) {
        self.adj[u as usize].push(self.heads.len());
        self.heads.push(v);
        self.residual.push(capacity);

        self.adj[v as usize].push(self.heads.len());
        self.heads.push(u);
        self.residual.push(W::zero());
    }

    fn tail_of(&self, a: usize) -> Node {
        self.heads[a ^ 1]
    }

    /// Walks the predecessor arcs from `target` back to the search root,
    /// pushes the bottleneck capacity along the path and returns it.
    fn augment(&mut self, pred_arc: &[usize], source: Node, target: Node) -> W {
        let mut bottleneck = W::infinity();
        let mut node = target;
        while node != source {
            let a = pred_arc[node as usize];
            bottleneck = bottleneck.min(self.residual[a]);
            node = self.tail_of(a);
        }

        let mut node = target;
        while node != source {
            let a = pred_arc[node as usize];
            self.residual[a] = self.residual[a] - bottleneck;
            self.residual[a ^ 1] = self.residual[a ^ 1] + bottleneck;
            node = self.tail_of(a);
        }

        bottleneck
    }
}

/// Edmonds-Karp solver: augments along *shortest* residual paths (BFS).
/// Yields the bottleneck of one augmenting path per iteration.
pub struct EdmondsKarp<W> {
    network: ResidualNetwork<W>,
    source: Node,
    target: Node,
}

impl<W: Weight> Iterator for EdmondsKarp<W> {
    type Item = W;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.network.adj.len() as NumNodes;
        let mut pred_arc = vec![NO_ARC; n as usize];
        let mut visited = NodeBitSet::new(n);
        visited.set_bit(self.source);

        let mut queue = VecDeque::from(vec![self.source]);
        'bfs: while let Some(u) = queue.pop_front() {
            for &a in &self.network.adj[u as usize] {
                if self.network.residual[a] <= W::zero() {
                    continue;
                }

                let v = self.network.heads[a];
                if visited.set_bit(v) {
                    continue;
                }

                pred_arc[v as usize] = a;
                if v == self.target {
                    break 'bfs;
                }
                queue.push_back(v);
            }
        }

        if pred_arc[self.target as usize] == NO_ARC {
            return None;
        }

        Some(self.network.augment(&pred_arc, self.source, self.target))
    }
}

/// Ford-Fulkerson solver: augments along *arbitrary* residual paths (DFS).
/// Yields the bottleneck of one augmenting path per iteration.
pub struct FordFulkerson<W> {
    network: ResidualNetwork<W>,
    source: Node,
    target: Node,
}

impl<W: Weight> Iterator for FordFulkerson<W> {
    type Item = W;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.network.adj.len() as NumNodes;
        let mut pred_arc = vec![NO_ARC; n as usize];
        let mut visited = NodeBitSet::new(n);
        visited.set_bit(self.source);

        let mut stack = vec![self.source];
        'dfs: while let Some(u) = stack.pop() {
            for &a in &self.network.adj[u as usize] {
                if self.network.residual[a] <= W::zero() {
                    continue;
                }

                let v = self.network.heads[a];
                if visited.set_bit(v) {
                    continue;
                }

                pred_arc[v as usize] = a;
                if v == self.target {
                    break 'dfs;
                }
                stack.push(v);
            }
        }

        if pred_arc[self.target as usize] == NO_ARC {
            return None;
        }

        Some(self.network.augment(&pred_arc, self.source, self.target))
    }
}

/// s-t maximum flow on directed graphs with edge weights as capacities.
pub trait MaxFlow<W: Weight>:
    DirectedAdjacencyList + GraphEdgeOrder + WeightedEdges<W> + Sized
{
    /// Returns the Edmonds-Karp solver for the flow from `source` to `target`.
    /// ** Panics if `source == target` or either node is out of range **
    fn edmonds_karp(&self, source: Node, target: Node) -> EdmondsKarp<W> {
        assert_ne!(source, target);
        EdmondsKarp {
            network: ResidualNetwork::new(self),
            source,
            target,
        }
    }

    /// Returns the Ford-Fulkerson solver for the flow from `source` to `target`.
    /// ** Panics if `source == target` or either node is out of range **
    fn ford_fulkerson(&self, source: Node, target: Node) -> FordFulkerson<W> {
        assert_ne!(source, target);
        FordFulkerson {
            network: ResidualNetwork::new(self),
            source,
            target,
        }
    }

    /// Computes the value of a maximum flow from `source` to `target`
    /// using Edmonds-Karp.
    fn max_flow(&self, source: Node, target: Node) -> W {
        self.edmonds_karp(source, target)
            .fold(W::zero(), |flow, bottleneck| {
                flow.saturating_add_weight(bottleneck)
            })
    }
}

impl<W, G> MaxFlow<W> for G
where
    W: Weight,
    G: DirectedAdjacencyList + GraphEdgeOrder + WeightedEdges<W> + Sized,
{
}

#[cfg(test)]
mod test {
    use super::*;

    fn diamond() -> WeightedAdjArray<u32> {
        WeightedAdjArray::from_weighted_edges(
            4,
            [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (1, 2, 1)],
        )
    }

    #[test]
    fn unit_diamond() {
        let graph = diamond();
        assert_eq!(graph.max_flow(0, 3), 2);
    }

    #[test]
    fn solvers_agree() {
        let graph = diamond();

        let ek: u32 = graph.edmonds_karp(0, 3).sum();
        let ff: u32 = graph.ford_fulkerson(0, 3).sum();
        assert_eq!(ek, 2);
        assert_eq!(ff, 2);
    }

    #[test]
    fn max_flow_agrees_across_representations() {
        let sparse = diamond();
        let dense = WeightedAdjMatrix::<u32>::from_weighted_edges(
            4,
            sparse.weighted_edges().map(|(Edge(u, v), w)| (u, v, w)),
        );

        assert_eq!(sparse.max_flow(0, 3), dense.max_flow(0, 3));
        assert_eq!(dense.max_flow(0, 3), 2);
    }

    #[test]
    fn clrs_network() {
        let graph = WeightedAdjArray::<u32>::from_weighted_edges(
            6,
            [
                (0, 1, 16),
                (0, 2, 13),
                (1, 3, 12),
                (2, 1, 4),
                (2, 4, 14),
                (3, 2, 9),
                (3, 5, 20),
                (4, 3, 7),
                (4, 5, 4),
            ],
        );

        assert_eq!(graph.max_flow(0, 5), 23);

        let ff: u32 = graph.ford_fulkerson(0, 5).sum();
        assert_eq!(ff, 23);
    }

    #[test]
    fn disconnected_target() {
        let graph = WeightedAdjArray::<u32>::from_weighted_edges(3, [(0, 1, 5)]);

        assert_eq!(graph.max_flow(0, 2), 0);
        assert_eq!(graph.edmonds_karp(0, 2).next(), None);
    }

    #[test]
    fn flow_respects_bottleneck() {
        // serial path: the smallest capacity bounds the flow
        let graph =
            WeightedAdjArray::<u32>::from_weighted_edges(4, [(0, 1, 8), (1, 2, 3), (2, 3, 6)]);

        assert_eq!(graph.max_flow(0, 3), 3);
    }

    #[test]
    fn backward_arcs_enable_rerouting() {
        // the greedy DFS path 0-1-2-3 must be partially undone via the
        // residual arc to reach the optimum
        let graph = WeightedAdjArray::<u32>::from_weighted_edges(
            4,
            [(0, 1, 2), (0, 2, 1), (1, 2, 1), (1, 3, 1), (2, 3, 2)],
        );

        let ff: u32 = graph.ford_fulkerson(0, 3).sum();
        assert_eq!(ff, 3);
    }

    #[test]
    #[should_panic]
    fn source_equals_target() {
        let _ = diamond().max_flow(1, 1);
    }
}
