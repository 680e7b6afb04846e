/*!
# Generalized Sets

This module provides abstractions over `Set` data structures, allowing algorithms
to choose the most efficient implementation based on context.

Examples:
- Sparse sets -> `HashSet`
- Dense sets -> `BitSetImpl`

The module includes:
- [`Set<T>`]: trait for generic set-like operations
- Concrete implementations: `HashSet`, `BitSetImpl`.
*/

use std::{
    collections::{HashSet, hash_set::Iter},
    hash::{BuildHasher, Hash},
    iter::Cloned,
};

use num::ToPrimitive;
use stream_bitset::{
    PrimIndex,
    bitset::BitSetImpl,
    prelude::{BitmaskSliceStream, BitmaskStreamConsumer, BitmaskStreamToIndices, ToBitmaskStream},
};

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries, iteration, and bulk operations.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    ///
    /// Returned by [`Set::iter`].
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set.
    /// May clone elements depending on the underlying data structure.
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<I> Set<I> for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn insert(&mut self, value: I) -> bool {
        self.set_bit(value)
    }

    fn remove(&mut self, value: &I) -> bool {
        self.clear_bit(*value)
    }

    type SetIter<'a>
        = BitmaskStreamToIndices<BitmaskSliceStream<'a>, I, true>
    where
        Self: 'a,
        I: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        self.bitmask_stream().iter_set_bits()
    }

    fn contains(&self, value: &I) -> bool {
        self.get_bit(*value)
    }

    fn clear(&mut self) {
        self.clear_all();
    }

    fn len(&self) -> usize {
        self.cardinality().to_usize().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeBitSet};
    use fxhash::FxHashSet;
    use itertools::Itertools;

    fn check_set<S: Set<Node>>(mut set: S) {
        assert!(set.is_empty());

        assert!(!set.insert(3));
        assert!(set.insert(3));
        set.insert_multiple([1, 4, 4]);

        assert_eq!(set.len(), 3);
        assert!(set.contains(&4));
        assert!(!set.contains(&0));
        assert_eq!(set.iter().sorted().collect_vec(), vec![1, 3, 4]);

        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert_eq!(set.len(), 2);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn hash_set() {
        check_set(FxHashSet::default());
    }

    #[test]
    fn bit_set() {
        check_set(NodeBitSet::new(8));
    }
}
