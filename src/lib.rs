//! A textbook Binary Search Tree (BST) supporting insertion, lookup,
//! depth-first and breadth-first traversal, and removal with the classic
//! three-case deletion policy.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! Internally the nodes live in an arena indexed by handles rather than
//! behind individually owned pointers. Children are optional handles, so
//! the splicing done during removal is plain index reassignment and the
//! whole crate stays in safe Rust. Traversals use an explicit stack (DFS)
//! or queue (BFS) so degenerate, chain-like trees cannot overflow the call
//! stack.
//!
//! # Examples
//!
//! ```
//! use bstree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&10), None);
//!
//! // `insert` returns the tree so calls can be chained.
//! tree.insert(10).insert(5).insert(15).insert(3).insert(7);
//!
//! assert_eq!(tree.find(&7), Some(&7));
//!
//! // In-order traversal yields the values in ascending order.
//! let sorted: Vec<i32> = tree.dfs_in_order().copied().collect();
//! assert_eq!(sorted, [3, 5, 7, 10, 15]);
//!
//! // Removing a value returns it; removing it again is an error.
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert_eq!(tree.remove(&5), Err(bstree::Error::ValueNotFound));
//! ```

#![deny(missing_docs)]

mod arena;
pub mod error;
pub mod iter;
mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use tree::BinarySearchTree;
