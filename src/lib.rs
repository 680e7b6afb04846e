/*!
`wgraphs` is a graph data structure & algorithms library for graphs that are
- **unlabelled** : Nodes are numbered `0` to `n - 1`
- **w**eighted *on demand* : Every representation exists in a plain and a
  weighted variant where each edge carries an integer weight

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)` (although we normalize edges often).
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are considered distinct.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjArray`](crate::repr::AdjArray) / [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`AdjMatrix`](crate::repr::AdjMatrix) / [`AdjMatrixUndir`](crate::repr::AdjMatrixUndir)
- [`SparseAdjArray`](crate::repr::SparseAdjArray) / [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)

Each representation makes different trade-offs in terms of memory usage and lookup/iteration performance.
Wrapping any of them in [`WeightedGraph`](crate::repr::WeightedGraph) (or using the
[`WeightedAdjArray`](crate::repr::WeightedAdjArray)-style aliases) attaches edge weights,
which are the capacities/distances consumed by the shortest path, spanning tree, and flow algorithms.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
Alternatively, most important and commonly used functionalities should already be implemented via traits on the graph itself, making them usable without configuring the algorithm beforehand.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, basic graph operations, and all standard graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`), Connected Component Iterators, Shortest Paths, Minimum Spanning Trees, Maximum Flow, Bipartite- and Cut-Vertex-Checks, ...
- [`gens`] includes random graph generators to generate random graphs (and deterministic substructures such as paths/cycles/cliques) at runtime,
- [`utils`] includes helper traits such as generalized `Set` and `Map` abstractions used throughout the algorithms.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use
You should only use this library if the following apply:
- Your graphs are unlabelled
- You want to work in *Rust*
- You require only basic functionality for graphs.
- Performance is important

In all other cases, it might make sense for you to check out [petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for general graphs in *Rust* or [NetworKit](https://networkit.github.io/) who provide high-performance graph algorithms in *C++* and *Python*.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod weight;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}

pub use prelude::*;
