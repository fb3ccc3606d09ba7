use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::raw::{InOrder, RawBSTree};

mod capacity;

/// An ordered multiset based on a plain, unbalanced binary search tree.
///
/// Every inserted value gets its own node, so equal values may be stored any number of times.
/// Values smaller than a node live in its left subtree; values greater than *or equal to* it live
/// in its right subtree. The tree is never rebalanced: its depth depends only on insertion order
/// and degrades to `n` for sorted input, in which case every lookup and update is linear. All
/// traversals are iterative, so even fully degenerate trees are safe to walk, sort and drop.
///
/// Nodes are kept in an arena and linked by index. Removing a value unlinks exactly one node and
/// reuses its slot for a later insertion.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `BSTreeSet` that observed the logic error and not result in undefined behavior.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use ubst::BSTreeSet;
///
/// let mut set = BSTreeSet::new();
/// set.insert(5);
/// set.insert(3);
/// set.insert(8);
/// set.insert(3);
///
/// assert_eq!(set.len(), 4);
/// assert_eq!(set.to_sorted_vec(), [3, 3, 5, 8]);
///
/// // Removing takes away a single copy.
/// set.remove(&3);
/// assert_eq!(set.to_sorted_vec(), [3, 5, 8]);
///
/// // Removing a value that is not there changes nothing.
/// set.remove(&100);
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&8));
/// assert!(!set.contains(&100));
/// ```
pub struct BSTreeSet<T> {
    tree: RawBSTree<T>,
}

/// An iterator over the items of a `BSTreeSet`, in non-decreasing order.
///
/// This `struct` is created by the [`iter`] method on [`BSTreeSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use ubst::BSTreeSet;
///
/// let set = BSTreeSet::from([3, 1, 2, 1]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.len(), 2);
/// ```
///
/// [`iter`]: BSTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: InOrder<'a, T>,
}

impl<T> BSTreeSet<T> {
    /// Makes a new, empty `BSTreeSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> BSTreeSet<T> {
        BSTreeSet {
            tree: RawBSTree::new(),
        }
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut v = BSTreeSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n), independent of the tree's shape.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns `true` if the set contains at least one copy of `value`.
    ///
    /// The value may be any borrowed form of the set's element type, but the
    /// ordering on the borrowed form *must* match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let set = BSTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.contains(value)
    }

    /// Returns how many copies of `value` the set holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let set = BSTreeSet::from([2, 7, 2, 2]);
    /// assert_eq!(set.count(&2), 3);
    /// assert_eq!(set.count(&7), 1);
    /// assert_eq!(set.count(&9), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.count(value)
    }

    /// Returns the first element in the set, if any.
    /// This is the minimum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&2));
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the last element in the set, if any.
    /// This is the maximum element in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    /// assert_eq!(set.last(), None);
    /// set.insert(1);
    /// assert_eq!(set.last(), Some(&1));
    /// set.insert(2);
    /// assert_eq!(set.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Adds a value to the set.
    ///
    /// Unlike `BTreeSet::insert`, this never rejects a value: if equal values are already
    /// present, another copy is stored alongside them and the length always grows by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    ///
    /// set.insert(2);
    /// set.insert(2);
    /// assert_eq!(set.len(), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the set already holds `u32::MAX` elements.
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.tree.insert(value);
    }

    /// Removes one copy of `value` from the set. Returns whether a copy was present.
    ///
    /// When several copies are stored, the one nearest the root is removed. The rest keep their
    /// relative order, so which copy goes is only observable through the structure, never through
    /// the set's contents.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::from([2, 2]);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value).is_some()
    }

    /// Removes one copy of `value` from the set and returns it, if any.
    ///
    /// The copy removed is the same one [`remove`](BSTreeSet::remove) would pick.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut set = BSTreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth)
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.tree.remove(value)
    }

    /// Gets an iterator that visits the elements in the `BSTreeSet` in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let set = BSTreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(depth) to create the iterator; O(1) amortized per step.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.tree.in_order(),
        }
    }

    /// Copies the elements out into a `Vec`, in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let set = BSTreeSet::from([4, -1, 4, 0]);
    /// assert_eq!(set.to_sorted_vec(), [-1, 0, 4, 4]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.tree.to_sorted_vec()
    }

    /// Returns the number of elements in the set, counting every copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut a = BSTreeSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// a.insert(1);
    /// assert_eq!(a.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let mut a = BSTreeSet::new();
    /// assert!(a.is_empty());
    /// a.insert(1);
    /// assert!(!a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T: Hash> Hash for BSTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

// Two sets are equal when they hold the same values with the same multiplicities, whatever
// their shapes.
impl<T: PartialEq> PartialEq for BSTreeSet<T> {
    fn eq(&self, other: &BSTreeSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BSTreeSet<T> {}

impl<T: Clone> Clone for BSTreeSet<T> {
    fn clone(&self) -> Self {
        BSTreeSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BSTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for BSTreeSet<T> {
    fn default() -> Self {
        BSTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for BSTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BSTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BSTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for BSTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BSTreeSet<T> {
    /// Builds the set by inserting the array's elements in order, so the tree's shape follows the
    /// array order.
    ///
    /// ```
    /// use ubst::BSTreeSet;
    ///
    /// let set = BSTreeSet::from([2, 1, 2]);
    /// assert_eq!(set.to_sorted_vec(), [1, 2, 2]);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a BSTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn min(mut self) -> Option<&'a T>
    where
        &'a T: Ord,
    {
        self.next()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}
