//! The tree itself: insertion, lookup, and the three-case removal policy.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};
use crate::iter::{Bfs, Dfs, DfsOrder};

/// A Binary Search Tree storing a set of ordered values.
///
/// Values are compared with strict `<`/`>` during descent; inserting a
/// value already in the tree is a silent no-op, so the tree never stores
/// duplicates. Mutating operations take `&mut self` and the tree is meant
/// for single-owner, single-threaded use.
///
/// # Examples
///
/// ```
/// use bstree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(2).insert(1).insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.find(&1), Some(&1));
/// assert_eq!(tree.remove(&1), Ok(1));
/// assert_eq!(tree.find(&1), None);
/// ```
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    arena: Arena<T>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value, walking down from the root. Returns the
    /// tree so calls can be chained.
    ///
    /// Inserting a value equal to one already stored silently drops the
    /// new value; the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5).insert(3).insert(7);
    ///
    /// assert_eq!(tree.len(), 3);
    ///
    /// // Duplicates are a no-op.
    /// tree.insert(3);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.alloc(value));
            return self;
        };
        loop {
            let node = &self.arena[current];
            match value.cmp(&node.value) {
                Ordering::Greater => match node.right {
                    Some(right) => current = right,
                    None => {
                        let id = self.alloc(value);
                        self.arena[current].right = Some(id);
                        return self;
                    }
                },
                Ordering::Less => match node.left {
                    Some(left) => current = left,
                    None => {
                        let id = self.alloc(value);
                        self.arena[current].left = Some(id);
                        return self;
                    }
                },
                Ordering::Equal => return self,
            }
        }
    }

    /// Inserts the given value using recursion instead of iteration. The
    /// externally observable behavior is identical to [`insert`].
    ///
    /// [`insert`]: BinarySearchTree::insert
    pub fn insert_recursive(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        match self.root {
            Some(root) => self.insert_below(root, value),
            None => self.root = Some(self.alloc(value)),
        }
        self
    }

    fn insert_below(&mut self, current: NodeId, value: T)
    where
        T: Ord,
    {
        match value.cmp(&self.arena[current].value) {
            Ordering::Greater => match self.arena[current].right {
                Some(right) => self.insert_below(right, value),
                None => {
                    let id = self.alloc(value);
                    self.arena[current].right = Some(id);
                }
            },
            Ordering::Less => match self.arena[current].left {
                Some(left) => self.insert_below(left, value),
                None => {
                    let id = self.alloc(value);
                    self.arena[current].left = Some(id);
                }
            },
            Ordering::Equal => {}
        }
    }

    fn alloc(&mut self, value: T) -> NodeId {
        self.len += 1;
        self.arena.alloc(value)
    }

    /// Searches the tree for the given value, walking down from the root.
    /// Returns `None` if the value is absent or the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Searches the tree for the given value using recursion instead of
    /// iteration. The contract is identical to [`find`].
    ///
    /// [`find`]: BinarySearchTree::find
    pub fn find_recursive(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.find_below(self.root, value)
    }

    fn find_below(&self, current: Option<NodeId>, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let node = &self.arena[current?];
        match value.cmp(&node.value) {
            Ordering::Less => self.find_below(node.left, value),
            Ordering::Equal => Some(&node.value),
            Ordering::Greater => self.find_below(node.right, value),
        }
    }

    /// Whether the given value is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Traverses the tree depth-first in pre-order (root, left, right).
    ///
    /// The iterator borrows the tree; calling this method again restarts
    /// the traversal. An empty tree yields an empty sequence.
    pub fn dfs_pre_order(&self) -> Dfs<'_, T> {
        Dfs::new(&self.arena, self.root, DfsOrder::Pre)
    }

    /// Traverses the tree depth-first in in-order (left, root, right).
    ///
    /// Because of the BST invariants this yields the stored values in
    /// ascending order. An empty tree yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [10, 5, 15, 3, 7, 12, 20].into_iter().collect();
    /// let sorted: Vec<i32> = tree.dfs_in_order().copied().collect();
    ///
    /// assert_eq!(sorted, [3, 5, 7, 10, 12, 15, 20]);
    /// ```
    pub fn dfs_in_order(&self) -> Dfs<'_, T> {
        Dfs::new(&self.arena, self.root, DfsOrder::In)
    }

    /// Traverses the tree depth-first in post-order (left, right, root).
    ///
    /// An empty tree yields an empty sequence.
    pub fn dfs_post_order(&self) -> Dfs<'_, T> {
        Dfs::new(&self.arena, self.root, DfsOrder::Post)
    }

    /// Traverses the tree breadth-first (level order), visiting each
    /// level from left to right before descending.
    ///
    /// An empty tree yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [10, 5, 15, 3, 7, 12, 20].into_iter().collect();
    /// let levels: Vec<i32> = tree.bfs().copied().collect();
    ///
    /// assert_eq!(levels, [10, 5, 15, 3, 7, 12, 20]);
    /// ```
    pub fn bfs(&self) -> Bfs<'_, T> {
        Bfs::new(&self.arena, self.root)
    }

    /// Removes the given value from the tree and returns it, using the
    /// classic three-case deletion policy:
    ///
    /// - a leaf is detached from its parent;
    /// - a node with a single child takes over its child's value and
    ///   children (a value-copy-up: the node keeps its place in the tree
    ///   but its value changes);
    /// - a node with two children takes over the value of its in-order
    ///   successor, which is then spliced out of the right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueNotFound`] if the value is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, Error};
    ///
    /// let mut tree: BinarySearchTree<i32> = [10, 5, 15, 3, 7, 12, 20].into_iter().collect();
    ///
    /// // 5 has two children; its successor 7 takes its place.
    /// assert_eq!(tree.remove(&5), Ok(5));
    ///
    /// let sorted: Vec<i32> = tree.dfs_in_order().copied().collect();
    /// assert_eq!(sorted, [3, 7, 10, 12, 15, 20]);
    ///
    /// assert_eq!(tree.remove(&5), Err(Error::ValueNotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: Ord,
    {
        // Locate the target, remembering its parent so a leaf can be
        // detached.
        let mut parent = None;
        let mut target = self.root.ok_or(Error::ValueNotFound)?;
        loop {
            let node = &self.arena[target];
            let next = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => break,
            };
            parent = Some(target);
            target = next.ok_or(Error::ValueNotFound)?;
        }

        self.len -= 1;
        let removed = match (self.arena[target].left, self.arena[target].right) {
            (None, None) => {
                self.unlink_child(parent, target);
                self.arena.free(target).value
            }
            (Some(child), None) | (None, Some(child)) => {
                // Value-copy-up: the child's value moves into the target
                // and the target adopts the child's children. External
                // observers see the target's value change rather than a
                // node disappear.
                let child_node = self.arena.free(child);
                let node = &mut self.arena[target];
                node.left = child_node.left;
                node.right = child_node.right;
                mem::replace(&mut node.value, child_node.value)
            }
            (Some(_), Some(right)) => {
                // The in-order successor is the leftmost node of the right
                // subtree. It has no left child, so its right child (if
                // any) takes its place and its value moves into the target.
                let mut succ_parent = target;
                let mut succ = right;
                while let Some(left) = self.arena[succ].left {
                    succ_parent = succ;
                    succ = left;
                }
                let succ_node = self.arena.free(succ);
                if succ_parent == target {
                    self.arena[target].right = succ_node.right;
                } else {
                    self.arena[succ_parent].left = succ_node.right;
                }
                mem::replace(&mut self.arena[target].value, succ_node.value)
            }
        };
        Ok(removed)
    }

    fn unlink_child(&mut self, parent: Option<NodeId>, child: NodeId) {
        match parent {
            None => self.root = None,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == Some(child) {
                    node.left = None;
                } else {
                    node.right = None;
                }
            }
        }
    }

    /// Builds a brand-new tree containing every value of this tree except
    /// the given one. This tree is left unmodified.
    ///
    /// The new tree is built by inserting the in-order sequence, which is
    /// sorted, so it comes out as a right-leaning chain. Prefer this over
    /// [`remove`] when keeping the original tree (or simplicity) matters
    /// more than the shape of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
    /// let without_two = tree.without(&2);
    ///
    /// assert_eq!(without_two.find(&2), None);
    /// assert_eq!(tree.find(&2), Some(&2));
    /// ```
    ///
    /// [`remove`]: BinarySearchTree::remove
    pub fn without(&self, value: &T) -> Self
    where
        T: Ord + Clone,
    {
        let mut tree = Self::new();
        for v in self.dfs_in_order() {
            if v != value {
                tree.insert(v.clone());
            }
        }
        tree
    }

    /// The smallest value in the tree, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(left) = self.arena[current].left {
            current = left;
        }
        Some(&self.arena[current].value)
    }

    /// The largest value in the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(right) = self.arena[current].right {
            current = right;
        }
        Some(&self.arena[current].value)
    }

    /// The second-to-last value of the in-order sequence: the largest
    /// value with the true maximum excluded. Returns `None` when the tree
    /// holds fewer than two values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32> = [10, 5, 15, 3, 7, 12, 20].into_iter().collect();
    /// assert_eq!(tree.second_highest(), Some(&15));
    ///
    /// let empty: BinarySearchTree<i32> = BinarySearchTree::new();
    /// assert_eq!(empty.second_highest(), None);
    /// ```
    pub fn second_highest(&self) -> Option<&T> {
        let mut parent = None;
        let mut current = self.root?;
        while let Some(right) = self.arena[current].right {
            parent = Some(current);
            current = right;
        }
        // `current` is the maximum. Its in-order predecessor is the
        // largest node of its left subtree, or failing that its parent.
        match self.arena[current].left {
            Some(left) => {
                let mut pred = left;
                while let Some(right) = self.arena[pred].right {
                    pred = right;
                }
                Some(&self.arena[pred].value)
            }
            None => parent.map(|id| &self.arena[id].value),
        }
    }

    /// The number of nodes on the longest path from the root to a leaf.
    /// An empty tree has height 0.
    pub fn height(&self) -> usize {
        self.height_below(self.root)
    }

    fn height_below(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = &self.arena[id];
                1 + self.height_below(node.left).max(self.height_below(node.right))
            }
        }
    }

    /// Whether every node's left and right subtrees differ in height by
    /// at most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let bushy: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert!(bushy.is_balanced());
    ///
    /// // Sorted insertion builds a chain.
    /// let chain: BinarySearchTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.balanced_height(self.root).is_some()
    }

    /// The height of the subtree at `id`, or `None` if any node below it
    /// violates the balance condition.
    fn balanced_height(&self, id: Option<NodeId>) -> Option<usize> {
        let Some(id) = id else {
            return Some(0);
        };
        let node = &self.arena[id];
        let left = self.balanced_height(node.left)?;
        let right = self.balanced_height(node.right)?;
        (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Dfs<'a, T>;

    fn into_iter(self) -> Dfs<'a, T> {
        self.dfs_in_order()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field(
                "root",
                &DebugNode {
                    arena: &self.arena,
                    id: self.root,
                },
            )
            .finish()
    }
}

/// Renders a subtree recursively for `Debug` output.
struct DebugNode<'a, T> {
    arena: &'a Arena<T>,
    id: Option<NodeId>,
}

impl<T: fmt::Debug> fmt::Debug for DebugNode<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            None => f.write_str("Leaf"),
            Some(id) => {
                let node = &self.arena[id];
                f.debug_struct("Node")
                    .field("value", &node.value)
                    .field(
                        "left",
                        &DebugNode {
                            arena: self.arena,
                            id: node.left,
                        },
                    )
                    .field(
                        "right",
                        &DebugNode {
                            arena: self.arena,
                            id: node.right,
                        },
                    )
                    .finish()
            }
        }
    }
}
