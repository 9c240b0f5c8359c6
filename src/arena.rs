//! Handle-indexed node storage.
//!
//! Nodes are kept in a `Vec` of slots and referred to by [`NodeId`]. The
//! tree only ever hands out values, never handles, so a live `NodeId`
//! always points at an occupied slot. Freed slots are recycled through a
//! free list before the `Vec` grows again.

use std::ops::{Index, IndexMut};

/// A handle to a node in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// A single tree node: a value plus optional handles to its children.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores a new childless node and returns its handle.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        let node = Node {
            value,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Releases the node behind `id` and returns it. The caller must have
    /// already unlinked `id` from its parent.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0].take().expect("freeing an occupied slot");
        self.free.push(id);
        node
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.slots[id.0].as_ref().expect("handle to occupied slot")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id.0].as_mut().expect("handle to occupied slot")
    }
}
