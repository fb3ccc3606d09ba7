//! An ordered multiset on a plain, unbalanced binary search tree.
//!
//! [`BSTreeSet`] stores every inserted value in its own tree node, duplicates included, and
//! supports membership tests, insertion, removal of a single copy, length, and in-order
//! extraction:
//!
//! ```
//! use ubst::BSTreeSet;
//!
//! let mut set = BSTreeSet::new();
//! for value in [5, 3, 8, 3] {
//!     set.insert(value);
//! }
//!
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.to_sorted_vec(), [3, 3, 5, 8]);
//!
//! set.remove(&3);
//! assert_eq!(set.to_sorted_vec(), [3, 5, 8]);
//! assert_eq!(set.count(&3), 1);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Duplicates** - Equal values are kept side by side; removal takes away one copy
//! - **No rebalancing** - Depth follows insertion order, so sorted input yields a linear chain
//! - **Depth-safe** - Lookups, traversal and teardown are iterative and never recurse
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their parent and children by index. Left subtrees hold
//! strictly smaller values and right subtrees hold greater or equal ones. Removing a node with
//! children hangs one child subtree off its in-order neighbour inside the other and lifts that
//! other subtree into the freed position.
//!
//! Structural events (which removal case ran, clearing) are reported through the [`log`] facade
//! at `trace`/`debug` level; no logger is installed by this crate.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod bstree_set;

pub use bstree_set::BSTreeSet;
