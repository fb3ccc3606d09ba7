use core::borrow::Borrow;

use log::{debug, trace};
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// Depth of the traversal stack kept inline before spilling to the heap.
const INLINE_DEPTH: usize = 32;

/// The unbalanced binary search tree backing `BSTreeSet`.
///
/// Ordering: every value in a node's left subtree is `<` the node's value and every value in its
/// right subtree is `>=` it. Equal values always descend right, so duplicates form a chain of
/// right-subtree descendants below their shallowest copy.
#[derive(Clone)]
pub(crate) struct RawBSTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of nodes reachable from `root`.
    len: usize,
}

impl<T> RawBSTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Releases every node. The arena drops its slots in one pass, so a degenerate tree of any
    /// depth is freed without recursion.
    pub(crate) fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len);
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Follows left links from `from` until none remain.
    fn leftmost(&self, from: Handle) -> Handle {
        let mut current = from;
        while let Some(left) = self.nodes.get(current).left() {
            current = left;
        }
        current
    }

    /// Follows right links from `from` until none remain.
    fn rightmost(&self, from: Handle) -> Handle {
        let mut current = from;
        while let Some(right) = self.nodes.get(current).right() {
            current = right;
        }
        current
    }

    pub(crate) fn first(&self) -> Option<&T> {
        let root = self.root?;
        Some(self.nodes.get(self.leftmost(root)).value())
    }

    pub(crate) fn last(&self) -> Option<&T> {
        let root = self.root?;
        Some(self.nodes.get(self.rightmost(root)).value())
    }

    /// Returns an in-order iterator over the values.
    pub(crate) fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder {
            nodes: &self.nodes,
            stack: SmallVec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Copies the values out in non-decreasing order.
    pub(crate) fn to_sorted_vec(&self) -> alloc::vec::Vec<T>
    where
        T: Clone,
    {
        let mut sorted = alloc::vec::Vec::with_capacity(self.len);
        sorted.extend(self.in_order().cloned());
        sorted
    }

    /// Points `host`'s empty `side` slot at `subtree` and fixes the subtree's back link.
    fn graft(&mut self, host: Handle, side: Side, subtree: Option<Handle>) {
        let host_node = self.nodes.get_mut(host);
        debug_assert!(host_node.child(side).is_none(), "`RawBSTree::graft()` - slot is already taken!");
        host_node.set_child(side, subtree);
        if let Some(subtree) = subtree {
            self.nodes.get_mut(subtree).set_parent(Some(host));
        }
    }
}

impl<T: Ord> RawBSTree<T> {
    /// Descends from the root and returns the first node holding `value`. When the value occurs
    /// more than once this is the shallowest copy, which is an ancestor of every other copy.
    pub(crate) fn find<Q>(&self, value: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let pivot = node.value().borrow();
            if value == pivot {
                return Some(handle);
            }
            current = node.child(Side::of(value, pivot));
        }
        None
    }

    pub(crate) fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(value).is_some()
    }

    /// Counts the copies of `value`. Every copy lies on the descent path of `value`, so one walk
    /// to the bottom of the tree sees all of them.
    pub(crate) fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut count = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let pivot = node.value().borrow();
            if value == pivot {
                count += 1;
            }
            current = node.child(Side::of(value, pivot));
        }
        count
    }

    /// Attaches a new node for `value` at the empty slot its descent ends in. Duplicates are
    /// never merged.
    pub(crate) fn insert(&mut self, value: T) -> Handle {
        let Some(mut parent) = self.root else {
            let handle = self.nodes.insert(Node::new(value, None));
            self.root = Some(handle);
            self.len += 1;
            return handle;
        };

        let side = loop {
            let node = self.nodes.get(parent);
            let side = Side::of(&value, node.value());
            match node.child(side) {
                Some(child) => parent = child,
                None => break side,
            }
        };

        let handle = self.nodes.insert(Node::new(value, Some(parent)));
        self.nodes.get_mut(parent).set_child(side, Some(handle));
        self.len += 1;
        handle
    }

    /// Removes the shallowest copy of `value` and returns it.
    pub(crate) fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.find(value)?;
        self.detach(target);
        self.len -= 1;
        let node = self.nodes.remove(target);
        debug_assert_eq!(self.nodes.len(), self.len, "`RawBSTree::remove()` - arena and tree disagree on size!");
        Some(node.into_value())
    }

    /// Unlinks `target` from the tree while keeping every other node reachable and ordered.
    ///
    /// A leaf is simply cut from its parent. Otherwise one child subtree is hung off the in-order
    /// neighbour found inside the other, and that other subtree takes `target`'s place:
    ///
    /// - with a right child, the left subtree goes under the leftmost node of the right subtree
    ///   (the successor) and the right child moves up;
    /// - with only a left child, the (empty) right subtree goes under the rightmost node of the
    ///   left subtree (the predecessor) and the left child moves up.
    ///
    /// On return `target` has no links left and can be released on its own.
    fn detach(&mut self, target: Handle) {
        let node = self.nodes.get(target);
        let (parent, left, right) = (node.parent(), node.left(), node.right());

        let replacement = match (left, right) {
            (None, None) => {
                trace!("detach {target:?}: leaf");
                None
            }
            (_, Some(right)) => {
                let successor = self.leftmost(right);
                trace!("detach {target:?}: left subtree under successor {successor:?}, {right:?} moves up");
                self.graft(successor, Side::Left, left);
                Some(right)
            }
            (Some(left), None) => {
                let predecessor = self.rightmost(left);
                trace!("detach {target:?}: predecessor {predecessor:?}, {left:?} moves up");
                self.graft(predecessor, Side::Right, right);
                Some(left)
            }
        };

        if let Some(replacement) = replacement {
            self.nodes.get_mut(replacement).set_parent(parent);
        }

        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let side = self.side_in_parent(target, parent);
                self.nodes.get_mut(parent).set_child(side, replacement);
            }
        }

        self.nodes.get_mut(target).unlink();
    }

    /// The slot of `parent` that holds `child`.
    fn side_in_parent(&self, child: Handle, parent: Handle) -> Side {
        let parent_node = self.nodes.get(parent);
        let side = parent_node.side_of(child).expect("`RawBSTree::side_in_parent()` - parent does not link to child!");
        debug_assert_eq!(
            side,
            Side::of(self.nodes.get(child).value(), parent_node.value()),
            "`RawBSTree::side_in_parent()` - child hangs on the wrong side of its parent!"
        );
        side
    }
}

/// In-order walk over a [`RawBSTree`], driven by an explicit stack of pending ancestors.
pub(crate) struct InOrder<'a, T> {
    nodes: &'a Arena<Node<T>>,
    stack: SmallVec<[Handle; INLINE_DEPTH]>,
    remaining: usize,
}

impl<T> InOrder<'_, T> {
    fn push_left_spine(&mut self, from: Option<Handle>) {
        let mut current = from;
        while let Some(handle) = current {
            self.stack.push(handle);
            current = self.nodes.get(handle).left();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let handle = self.stack.pop()?;
        let node = nodes.get(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        InOrder {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
