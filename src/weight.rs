/*!
# Edge Weights

Weights are primitive integers. We reserve `W::max_value()` as the infinity
sentinel: it encodes both "no such edge" in dense storage and "unreachable" in
distance arrays. Relaxation steps therefore either guard against infinite
operands or use [`Weight::saturating_add_weight`] which clamps at the sentinel.
*/

use std::fmt::Debug;

use num::PrimInt;

/// Anything that can act as an edge weight or distance value.
///
/// Blanket-implemented for all primitive integers. Signed types allow negative
/// weights, which Bellman-Ford and Floyd-Warshall support.
pub trait Weight: PrimInt + Default + Debug {
    /// Sentinel for "unreachable" / "no edge present"
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns true if this value is the infinity sentinel
    fn is_infinite(self) -> bool {
        self == Self::infinity()
    }

    /// Addition that clamps at [`Weight::infinity`] instead of wrapping
    fn saturating_add_weight(self, rhs: Self) -> Self {
        self.checked_add(&rhs).unwrap_or_else(Self::max_value)
    }
}

impl<T: PrimInt + Default + Debug> Weight for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_sentinel() {
        assert_eq!(u32::infinity(), u32::MAX);
        assert_eq!(i64::infinity(), i64::MAX);
        assert!(u32::infinity().is_infinite());
        assert!(!5u32.is_infinite());
    }

    #[test]
    fn saturating_addition() {
        assert_eq!(3u32.saturating_add_weight(4), 7);
        assert_eq!(u32::infinity().saturating_add_weight(1), u32::infinity());
        assert_eq!(i32::infinity().saturating_add_weight(i32::infinity()), i32::infinity());
    }
}
