use itertools::Itertools;

use super::*;

/// Articulation points and bridges of an undirected graph.
#[derive(Debug, Clone)]
pub struct CutPoints {
    /// Nodes whose removal increases the number of connected components.
    pub articulation_points: NodeBitSet,
    /// Normalized edges whose removal increases the number of connected components.
    pub bridges: Vec<Edge>,
}

/// Computes articulation points and bridges of an undirected graph.
pub trait CutVertices: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Computes articulation points and bridges in a single DFS sweep.
    fn compute_cut_points(&self) -> CutPoints {
        CutSearch::new(self).compute()
    }

    /// Returns the set of articulation points.
    fn compute_articulation_points(&self) -> NodeBitSet {
        self.compute_cut_points().articulation_points
    }

    /// Returns all bridges as normalized edges.
    fn compute_bridges(&self) -> Vec<Edge> {
        self.compute_cut_points().bridges
    }
}

impl<G> CutVertices for G where G: AdjacencyList + GraphType<Dir = Undirected> + Sized {}

struct CutSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    discovery: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    call_stack: Vec<Frame>,
    result: CutPoints,
}

struct Frame {
    node: Node,
    parent: Node,
    root_children: NumNodes,
    neighbors: std::vec::IntoIter<Node>,
}

impl<'a, G> CutSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            discovery: vec![INVALID_NODE; n as usize],
            low: vec![INVALID_NODE; n as usize],
            time: 0,
            call_stack: Vec::with_capacity(32),
            result: CutPoints {
                articulation_points: NodeBitSet::new(n),
                bridges: Vec::new(),
            },
        }
    }

    /// Uses an explicit call stack as the low-link computation is a DFS and
    /// would otherwise overflow the thread stack on long paths.
    fn compute(mut self) -> CutPoints {
        for root in self.graph.vertices_with_neighbors() {
            if self.discovery[root as usize] != INVALID_NODE {
                continue;
            }

            self.push_node(root, root);

            'recurse: while let Some(frame) = self.call_stack.last_mut() {
                let u = frame.node;

                for v in frame.neighbors.by_ref() {
                    if self.discovery[v as usize] == INVALID_NODE {
                        self.push_node(v, u);
                        continue 'recurse;
                    }

                    if v != frame.parent {
                        // back edge
                        self.low[u as usize] =
                            self.low[u as usize].min(self.discovery[v as usize]);
                    }
                }

                let frame = self.call_stack.pop().unwrap();
                self.retreat(frame);
            }
        }

        self.result.bridges.sort_unstable();
        self.result
    }

    fn push_node(&mut self, node: Node, parent: Node) {
        self.discovery[node as usize] = self.time;
        self.low[node as usize] = self.time;
        self.time += 1;

        self.call_stack.push(Frame {
            node,
            parent,
            root_children: 0,
            neighbors: self.graph.neighbors_of(node).collect_vec().into_iter(),
        });
    }

    /// Propagates the low value of a finished node to its parent frame and
    /// applies the articulation point and bridge conditions.
    fn retreat(&mut self, finished: Frame) {
        let u = finished.node;

        let Some(parent_frame) = self.call_stack.last_mut() else {
            // u is a DFS root
            if finished.root_children >= 2 {
                self.result.articulation_points.set_bit(u);
            }
            return;
        };

        let p = parent_frame.node;
        self.low[p as usize] = self.low[p as usize].min(self.low[u as usize]);

        if self.low[u as usize] > self.discovery[p as usize] {
            self.result.bridges.push(Edge(p, u).normalized());
        }

        if parent_frame.parent == p {
            // p is the DFS root, the articulation condition is having two children
            parent_frame.root_children += 1;
        } else if self.low[u as usize] >= self.discovery[p as usize] {
            self.result.articulation_points.set_bit(p);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn points(graph: &AdjArrayUndir) -> Vec<Node> {
        graph.compute_articulation_points().iter_set_bits().collect_vec()
    }

    #[test]
    fn path() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);

        assert_eq!(points(&graph), vec![1, 2, 3]);
        assert_eq!(
            graph.compute_bridges(),
            graph.ordered_edges(true).collect_vec()
        );
    }

    #[test]
    fn cycle() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);

        assert!(points(&graph).is_empty());
        assert!(graph.compute_bridges().is_empty());
    }

    #[test]
    fn star() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4)]);

        assert_eq!(points(&graph), vec![0]);
        assert_eq!(graph.compute_bridges().len(), 4);
    }

    #[test]
    fn two_triangles_joined_by_bridge() {
        let mut graph = AdjArrayUndir::new(6);
        graph.add_edges([(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)]);

        assert_eq!(graph.compute_bridges(), vec![Edge(1, 3)]);
        assert_eq!(points(&graph), vec![1, 3]);
    }

    #[test]
    fn removing_a_bridge_disconnects() {
        let graph = AdjArrayUndir::from_edges(7, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (5, 6)]);
        let components = graph.number_of_connected_components();

        for bridge in graph.compute_bridges() {
            let without = AdjArrayUndir::from_edges(
                graph.number_of_nodes(),
                graph.ordered_edges(true).filter(|&e| e != bridge),
            );
            assert_eq!(
                without.number_of_connected_components(),
                components + 1,
                "removing bridge {bridge} must split a component"
            );
        }
    }

    #[test]
    fn isolated_nodes_are_ignored() {
        let mut graph = AdjArrayUndir::new(4);
        graph.add_edge(1, 2);

        assert!(points(&graph).is_empty());
        assert_eq!(graph.compute_bridges(), vec![Edge(1, 2)]);
    }
}
