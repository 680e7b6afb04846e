/*!
# Weighted Graph Representations

A weighted graph composes an unweighted topology representation with a
[`WeightStore`] keeping one weight per edge:

- [`MapWeights`] keeps a hash map keyed by edge and suits sparse graphs.
  Looking up an absent edge reports [`GraphError::MissingEdge`](crate::error::GraphError).
- [`MatrixWeights`] keeps a dense `n * n` matrix where absent edges hold the
  infinity sentinel. Lookups of absent edges report `Ok(W::infinity())`.

Inserting an edge that is already present never duplicates it; instead the
stored weight becomes the minimum of the old and the new weight. This makes
repeated inserts of parallel edges equivalent to keeping the cheapest one,
which is what all distance-based algorithms want.
*/

use fxhash::FxHashMap;

use crate::{error::GraphError, weight::Weight};

use super::*;

/// Storage backend for per-edge weights.
///
/// Undirected graphs store each edge under its normalized key, so both
/// directions resolve to the same weight.
pub trait WeightStore: Clone {
    type Weight: Weight;

    /// Creates an empty store for graphs on `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the stored weight of `edge` if present
    fn get(&self, edge: Edge) -> Option<Self::Weight>;

    /// Overwrites the weight of `edge`
    fn insert(&mut self, edge: Edge, weight: Self::Weight);

    /// Stores `min(old, weight)`, or `weight` if the edge had none yet
    fn insert_min(&mut self, edge: Edge, weight: Self::Weight) {
        let weight = self.get(edge).map_or(weight, |old| old.min(weight));
        self.insert(edge, weight);
    }

    /// What a lookup of an absent edge reports: `None` becomes a
    /// `MissingEdge` error, `Some(w)` is passed through as a valid answer.
    fn missing(&self) -> Option<Self::Weight> {
        None
    }
}

/// Sparse weight storage using a hash map
#[derive(Clone)]
pub struct MapWeights<W: Weight>(FxHashMap<Edge, W>);

impl<W: Weight> WeightStore for MapWeights<W> {
    type Weight = W;

    fn new(_n: NumNodes) -> Self {
        Self(FxHashMap::default())
    }

    fn get(&self, edge: Edge) -> Option<W> {
        self.0.get(&edge).copied()
    }

    fn insert(&mut self, edge: Edge, weight: W) {
        self.0.insert(edge, weight);
    }
}

/// Dense weight storage using a flat `n * n` matrix.
/// Cells of absent edges hold `W::infinity()`.
#[derive(Clone)]
pub struct MatrixWeights<W: Weight> {
    weights: Vec<W>,
    n: NumNodes,
}

impl<W: Weight> MatrixWeights<W> {
    fn index_of(&self, edge: Edge) -> usize {
        edge.0 as usize * self.n as usize + edge.1 as usize
    }
}

impl<W: Weight> WeightStore for MatrixWeights<W> {
    type Weight = W;

    fn new(n: NumNodes) -> Self {
        Self {
            weights: vec![W::infinity(); n as usize * n as usize],
            n,
        }
    }

    fn get(&self, edge: Edge) -> Option<W> {
        let weight = self.weights[self.index_of(edge)];
        (!weight.is_infinite()).then_some(weight)
    }

    fn insert(&mut self, edge: Edge, weight: W) {
        let index = self.index_of(edge);
        self.weights[index] = weight;
    }

    fn missing(&self) -> Option<W> {
        Some(W::infinity())
    }
}

/// A graph representation carrying a weight on every edge.
///
/// The topology (including deduping and directedness) lives in `G`; the
/// weights live in `S`. All unweighted accessors forward to `G`.
#[derive(Clone)]
pub struct WeightedGraph<G, S> {
    graph: G,
    weights: S,
}

/// Weighted directed graph with adjacency arrays and sparse weights
pub type WeightedAdjArray<W> = WeightedGraph<AdjArray, MapWeights<W>>;

/// Weighted directed graph with an adjacency matrix and dense weights
pub type WeightedAdjMatrix<W> = WeightedGraph<AdjMatrix, MatrixWeights<W>>;

/// Weighted undirected graph with adjacency arrays and sparse weights
pub type WeightedAdjArrayUndir<W> = WeightedGraph<AdjArrayUndir, MapWeights<W>>;

/// Weighted undirected graph with an adjacency matrix and dense weights
pub type WeightedAdjMatrixUndir<W> = WeightedGraph<AdjMatrixUndir, MatrixWeights<W>>;

impl<G: GraphType, S> WeightedGraph<G, S> {
    /// Undirected graphs store both orientations under one key
    fn key(edge: Edge) -> Edge {
        if G::is_undirected() {
            edge.normalized()
        } else {
            edge
        }
    }

    /// Read access to the underlying unweighted topology
    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: GraphType, S> GraphType for WeightedGraph<G, S> {
    type Dir = G::Dir;
}

impl<G: GraphNodeOrder, S> GraphNodeOrder for WeightedGraph<G, S> {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.vertices()
    }
}

impl<G: GraphEdgeOrder, S> GraphEdgeOrder for WeightedGraph<G, S> {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl<G: AdjacencyList, S> AdjacencyList for WeightedGraph<G, S> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.graph.degree_of(u)
    }
}

impl<G: AdjacencyTest, S> AdjacencyTest for WeightedGraph<G, S> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }
}

impl<G: DirectedAdjacencyList, S> DirectedAdjacencyList for WeightedGraph<G, S> {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.in_neighbors_of(u)
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.graph.in_degree_of(u)
    }
}

impl<G: GraphNew, S: WeightStore> GraphNew for WeightedGraph<G, S> {
    fn new(n: NumNodes) -> Self {
        Self {
            graph: G::new(n),
            weights: S::new(n),
        }
    }
}

impl<W, G, S> WeightedEdges<W> for WeightedGraph<G, S>
where
    W: Weight,
    G: AdjacencyList + AdjacencyTest + GraphEdgeEditing + GraphType,
    S: WeightStore<Weight = W>,
{
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: W) -> bool {
        let existed = self.graph.try_add_edge(u, v);
        self.weights.insert_min(Self::key(Edge(u, v)), weight);
        existed
    }

    fn edge_weight(&self, u: Node, v: Node) -> Result<W, GraphError> {
        self.check_node(u)?;
        self.check_node(v)?;

        let edge = Edge(u, v);
        if let Some(weight) = self.weights.get(Self::key(edge)) {
            return Ok(weight);
        }
        self.weights
            .missing()
            .ok_or(GraphError::MissingEdge { edge })
    }

    fn set_edge_weight(&mut self, u: Node, v: Node, weight: W) -> Result<(), GraphError> {
        self.check_node(u)?;
        self.check_node(v)?;

        let edge = Edge(u, v);
        if !self.graph.has_edge(u, v) {
            return Err(GraphError::MissingEdge { edge });
        }
        self.weights.insert(Self::key(edge), weight);
        Ok(())
    }

    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.graph.neighbors_of(u).map(move |v| {
            // every edge of the topology has a weight entry, except dense
            // storage which encodes the weight `infinity` as absent
            let weight = self
                .weights
                .get(Self::key(Edge(u, v)))
                .unwrap_or_else(W::infinity);
            (v, weight)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn keeps_minimum_weight() {
        let mut graph = WeightedAdjArray::<u32>::new(3);

        assert!(!graph.add_weighted_edge(0, 1, 10));
        assert!(graph.add_weighted_edge(0, 1, 4));
        assert!(graph.add_weighted_edge(0, 1, 7));

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edge_weight(0, 1), Ok(4));
    }

    #[test]
    fn missing_edge_policies() {
        let sparse = WeightedAdjArray::<u32>::from_weighted_edges(3, [(0, 1, 5)]);
        assert_eq!(
            sparse.edge_weight(1, 2),
            Err(GraphError::MissingEdge { edge: Edge(1, 2) })
        );

        let dense = WeightedAdjMatrix::<u32>::from_weighted_edges(3, [(0, 1, 5)]);
        assert_eq!(dense.edge_weight(1, 2), Ok(u32::infinity()));
        assert_eq!(dense.edge_weight(0, 1), Ok(5));
    }

    #[test]
    fn out_of_range_nodes() {
        let graph = WeightedAdjArray::<u32>::from_weighted_edges(3, [(0, 1, 5)]);
        assert_eq!(
            graph.edge_weight(0, 9),
            Err(GraphError::NodeOutOfRange {
                node: 9,
                number_of_nodes: 3
            })
        );
    }

    #[test]
    fn set_edge_weight_requires_edge() {
        let mut graph = WeightedAdjMatrixUndir::<u32>::from_weighted_edges(3, [(0, 1, 5)]);

        assert_eq!(graph.set_edge_weight(1, 0, 2), Ok(()));
        assert_eq!(graph.edge_weight(0, 1), Ok(2));

        assert_eq!(
            graph.set_edge_weight(1, 2, 3),
            Err(GraphError::MissingEdge { edge: Edge(1, 2) })
        );
    }

    #[test]
    fn undirected_weights_are_symmetric() {
        let graph = WeightedAdjArrayUndir::<u32>::from_weighted_edges(4, [(0, 1, 3), (2, 1, 8)]);

        assert_eq!(graph.edge_weight(1, 0), Ok(3));
        assert_eq!(graph.edge_weight(1, 2), Ok(8));
        assert_eq!(graph.number_of_edges(), 2);

        let mut edges = graph
            .weighted_edges()
            .filter(|(e, _)| e.is_normalized())
            .collect_vec();
        edges.sort_unstable_by_key(|(e, _)| *e);
        assert_eq!(edges, vec![(Edge(0, 1), 3), (Edge(1, 2), 8)]);
    }
}
