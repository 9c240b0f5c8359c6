//! Traversal iterators.
//!
//! All traversals are iterative: depth-first orders share one explicit
//! stack machine and the level order uses a FIFO queue. This keeps
//! degenerate, chain-like trees from overflowing the call stack. Every
//! iterator borrows the tree, so calling the corresponding tree method
//! again restarts the walk from scratch.

use std::collections::VecDeque;

use crate::arena::{Arena, NodeId};

/// Which depth-first order a [`Dfs`] iterator produces.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DfsOrder {
    /// Root, left subtree, right subtree.
    Pre,
    /// Left subtree, root, right subtree.
    In,
    /// Left subtree, right subtree, root.
    Post,
}

enum Step {
    /// Expand this node's subtree onto the stack.
    Descend(NodeId),
    /// Yield this node's value.
    Visit(NodeId),
}

/// A depth-first traversal over the values of a tree.
///
/// Created by [`dfs_pre_order`], [`dfs_in_order`], and [`dfs_post_order`]
/// on [`BinarySearchTree`].
///
/// [`dfs_pre_order`]: crate::BinarySearchTree::dfs_pre_order
/// [`dfs_in_order`]: crate::BinarySearchTree::dfs_in_order
/// [`dfs_post_order`]: crate::BinarySearchTree::dfs_post_order
/// [`BinarySearchTree`]: crate::BinarySearchTree
pub struct Dfs<'a, T> {
    arena: &'a Arena<T>,
    order: DfsOrder,
    stack: Vec<Step>,
}

impl<'a, T> Dfs<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>, order: DfsOrder) -> Self {
        let stack = root.map(Step::Descend).into_iter().collect();
        Self {
            arena,
            order,
            stack,
        }
    }
}

impl<'a, T> Iterator for Dfs<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            match self.stack.pop()? {
                Step::Visit(id) => return Some(&self.arena[id].value),
                Step::Descend(id) => {
                    let node = &self.arena[id];
                    // The stack pops in reverse, so steps are pushed in the
                    // opposite of the order they should happen.
                    match self.order {
                        DfsOrder::Pre => {
                            if let Some(right) = node.right {
                                self.stack.push(Step::Descend(right));
                            }
                            if let Some(left) = node.left {
                                self.stack.push(Step::Descend(left));
                            }
                            self.stack.push(Step::Visit(id));
                        }
                        DfsOrder::In => {
                            if let Some(right) = node.right {
                                self.stack.push(Step::Descend(right));
                            }
                            self.stack.push(Step::Visit(id));
                            if let Some(left) = node.left {
                                self.stack.push(Step::Descend(left));
                            }
                        }
                        DfsOrder::Post => {
                            self.stack.push(Step::Visit(id));
                            if let Some(right) = node.right {
                                self.stack.push(Step::Descend(right));
                            }
                            if let Some(left) = node.left {
                                self.stack.push(Step::Descend(left));
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A breadth-first (level-order) traversal over the values of a tree.
///
/// Created by [`bfs`] on [`BinarySearchTree`]. Each dequeued node yields
/// its value and enqueues its left child followed by its right child, so
/// shallower values always appear before deeper ones.
///
/// [`bfs`]: crate::BinarySearchTree::bfs
/// [`BinarySearchTree`]: crate::BinarySearchTree
pub struct Bfs<'a, T> {
    arena: &'a Arena<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> Bfs<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Bfs<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.arena[self.queue.pop_front()?];
        if let Some(left) = node.left {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right {
            self.queue.push_back(right);
        }
        Some(&node.value)
    }
}
