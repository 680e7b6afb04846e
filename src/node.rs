/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve far fewer than `2^32` nodes.
This (1) saves space compared to `usize` or `u64` and (2) lets us manipulate node
values directly without abstracting over them.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need `Vec<Option<Node>>`, for instance as predecessor arrays.
/// This instead uses the `NonZero`-Wrapper to assign a constant `None`-Value,
/// so `Option<OptionalNodeImpl<N>>` is exactly four bytes wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_packing() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );

        assert!(OptionalNode::new(INVALID_NODE).is_none());
        for n in [0, 1, 42, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(n).unwrap().get(), n);
        }
    }
}
