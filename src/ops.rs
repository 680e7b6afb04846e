use std::ops::Range;

use itertools::Itertools;
use stream_bitset::prelude::*;

use crate::{error::GraphError, weight::Weight, *};

/// Marker for the directedness of a graph type
pub trait Direction {
    const DIRECTED: bool;
}

/// All edges `(u, v)` only go from `u` to `v`
#[derive(Debug, Clone, Copy)]
pub struct Directed {}

/// An edge `{u, v}` connects `u` and `v` in both directions
#[derive(Debug, Clone, Copy)]
pub struct Undirected {}

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
}

/// Ties a graph representation to its directedness
pub trait GraphType {
    type Dir: Direction;

    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    fn is_undirected() -> bool {
        !Self::Dir::DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }

    /// Returns the range of valid node ids.
    /// In contrast to `self.vertices()`, the returned range does not borrow
    /// self and hence may be used where mutable references of self are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Ok(())` exactly if `u` is a valid node id of this graph
    fn check_node(&self, u: Node) -> Result<(), GraphError> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of distinct edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

macro_rules! node_iterator {
    ($iter : ident, $single : ident, $type : ty) => {
        fn $iter(&self) -> impl Iterator<Item = $type> + '_ {
            self.vertices().map(|u| self.$single(u))
        }
    };
}

macro_rules! node_bitset_of {
    ($bitset : ident, $slice : ident) => {
        fn $bitset(&self, node: Node) -> NodeBitSet {
            NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.$slice(node))
        }
    };
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, this is equivalent to `out_neighbors_of`
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the closed neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn closed_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::once(u).chain(self.neighbors_of(u))
    }

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.degrees()
            .enumerate()
            .filter_map(|(u, d)| (d > 0).then_some(u as Node))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    node_iterator!(degrees, degree_of, NumNodes);
    node_iterator!(neighbors, neighbors_of, impl Iterator<Item = Node> + '_);
    node_bitset_of!(neighbors_of_as_bitset, neighbors_of);

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over outgoing edges of a given vertex in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn ordered_edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges_of(u, only_normalized).collect_vec();
        edges.sort();
        edges.into_iter()
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.ordered_edges_of(u, only_normalized))
    }
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

pub trait DirectedAdjacencyList: AdjacencyList + GraphType<Dir = Directed> {
    propagate!(out_neighbors_of => neighbors_of(u : Node) -> impl Iterator<Item = Node> + '_);
    propagate!(out_degree_of => degree_of(u : Node) -> NumNodes);
    propagate!(max_out_degree => max_degree() -> NumNodes);

    node_iterator!(out_degrees, out_degree_of, NumNodes);
    node_bitset_of!(out_neighbors_of_as_bitset, out_neighbors_of);

    #[inline]
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.edges_of(u, false)
    }

    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    node_iterator!(in_degrees, in_degree_of, NumNodes);

    /// Returns the out-degree plus in-degree of a given vertex
    /// ** Panics if `u >= n` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns the graph with every edge reversed
    fn transposed(&self) -> Self
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        let mut transposed = Self::new(self.number_of_nodes());
        transposed.add_edges(self.edges(false).map(|e| e.reverse()));
        transposed
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Allows multiple edge-queries for a single node
    fn has_neighbors<const N: usize>(&self, u: Node, neighbors: [Node; N]) -> [bool; N] {
        neighbors.map(|v| self.has_edge(u, v))
    }

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// Note that for undirected graphs with edge {u,v} this function always returns *true*.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges.
/// All representations dedupe: inserting a present edge is a no-op.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v))
    }

    /// Adds the edge `(u, v)` to the graph unless already present.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Accessors and editing for graphs that carry a weight on every edge.
///
/// Inserting an edge that is already present keeps the *minimum* of the old
/// and new weight; the edge itself stays deduped.
pub trait WeightedEdges<W: Weight>: AdjacencyList + GraphType {
    /// Adds the edge `(u, v)` with weight `w`.
    /// If the edge is already present, its weight becomes `min(old, w)`.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: W) -> bool;

    /// Adds all weighted edges in the collection
    fn add_weighted_edges(&mut self, edges: impl IntoIterator<Item = (Node, Node, W)>) {
        for (u, v, w) in edges {
            self.add_weighted_edge(u, v, w);
        }
    }

    /// Returns the weight of edge `(u, v)`.
    /// Sparse storages report a missing edge as [`GraphError::MissingEdge`];
    /// dense storages report it as `Ok(W::infinity())`.
    /// Out-of-range endpoints are reported as [`GraphError::NodeOutOfRange`].
    fn edge_weight(&self, u: Node, v: Node) -> Result<W, GraphError>;

    /// Overwrites the weight of the existing edge `(u, v)`.
    /// Out-of-range endpoints are reported as [`GraphError::NodeOutOfRange`].
    fn set_edge_weight(&mut self, u: Node, v: Node, weight: W) -> Result<(), GraphError>;

    /// Returns an iterator over the neighbors of `u` paired with the
    /// respective edge weights.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_;

    /// Returns an iterator over all edges paired with their weights.
    /// Undirected graphs yield each edge in both directions.
    fn weighted_edges(&self) -> impl Iterator<Item = (Edge, W)> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.weighted_edges_of(u).map(move |(v, w)| (Edge(u, v), w))
        })
    }

    /// Create a weighted graph from a number of nodes and `(u, v, weight)` triples
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = (Node, Node, W)>,
    ) -> Self
    where
        Self: GraphNew,
    {
        let mut graph = Self::new(n);
        graph.add_weighted_edges(edges);
        graph
    }
}
