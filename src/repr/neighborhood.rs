use smallvec::{Array, SmallVec};
use stream_bitset::prelude::*;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `u` is in the Neighborhood
    fn has_neighbor(&self, u: Node) -> bool {
        self.neighbors().any(|v| v == u)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// For some implementations, this might lead to Multi-Edges
    fn add_neighbor(&mut self, u: Node);
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $nbs:ident, $dir:ident) => {
            impl<Nbs: Neighborhood> GraphType for $struct<Nbs> {
                type Dir = $dir;
            }

            impl<Nbs: Neighborhood> GraphNodeOrder for $struct<Nbs> {
                fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
                    self.vertices_range()
                }

                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<Nbs: Neighborhood> GraphEdgeOrder for $struct<Nbs> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<Nbs: Neighborhood> AdjacencyList for $struct<Nbs> {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$nbs[u as usize].neighbors()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_neighbors()
                }
            }

            impl<Nbs: Neighborhood> GraphNew for $struct<Nbs> {
                fn new(n: NumNodes) -> Self {
                    assert!(n > 0);
                    Self {
                        num_edges: 0,
                        $nbs: vec![Nbs::new(n); n as usize],
                    }
                }
            }

            impl<Nbs: Neighborhood> AdjacencyTest for $struct<Nbs> {
                fn has_edge(&self, u: Node, v: Node) -> bool {
                    assert!(v < self.number_of_nodes());
                    self.$nbs[u as usize].has_neighbor(v)
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}

/// A Neighborhood represented by a NodeBitSet.
/// Adjacency tests run in constant time and neighbors come out sorted.
#[derive(Default, Clone)]
pub struct BitNeighborhood(pub NodeBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(NodeBitSet::new(n))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.cardinality()
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.bitmask_stream().iter_set_bits()
    }

    fn has_neighbor(&self, u: Node) -> bool {
        self.0.get_bit(u)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        self.0.set_bit(u)
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.set_bit(u);
    }
}
