use super::BSTreeSet;
use crate::raw::RawBSTree;

impl<T> BSTreeSet<T> {
    /// Creates an empty set with room for at least `capacity` nodes before the node storage
    /// reallocates.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let set: BSTreeSet<i32> = BSTreeSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) apart from the allocation itself.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BSTreeSet {
            tree: RawBSTree::with_capacity(capacity),
        }
    }

    /// Returns how many nodes the set can hold without reallocating.
    ///
    /// Removing elements does not shrink the capacity; freed nodes are reused by later
    /// insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::with_capacity(32);
    /// set.insert(1);
    /// set.remove(&1);
    /// assert!(set.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }
}
