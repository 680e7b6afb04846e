/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, connectivity, shortest-path, spanning-tree, and flow routines.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod bipartite;
mod connectivity;
mod cut_points;
mod cycle;
mod flow;
mod mst;
mod shortest_path;
pub mod traversal;

use crate::{prelude::*, utils::*};

pub use bipartite::*;
pub use connectivity::*;
pub use cut_points::*;
pub use cycle::*;
pub use flow::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;

/// Implemented by algorithm structs that borrow the graph they operate on.
pub trait WithGraphRef<G> {
    /// Returns a reference to the underlying graph.
    fn graph_ref(&self) -> &G;
}
