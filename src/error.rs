use thiserror::Error;

use crate::{Edge, Node, NumNodes};

/// Errors reported by fallible graph operations.
///
/// Most accessors panic on out-of-range nodes like slice indexing does; only
/// operations where failure is a meaningful outcome (weight lookups on sparse
/// storage, explicit range checks) return a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The queried edge is not present in the graph
    #[error("edge {edge} is not present in the graph")]
    MissingEdge { edge: Edge },

    /// A node id at or beyond `number_of_nodes` was passed in
    #[error("node {node} is out of range for a graph on {number_of_nodes} nodes")]
    NodeOutOfRange { node: Node, number_of_nodes: NumNodes },
}
