// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::ops::{
    Index,
    IndexMut,
};

/// A stable handle to a slot in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// Slot-vector storage for skip list nodes.
///
/// Links between nodes are expressed as [`NodeId`]s into this arena rather
/// than as owning or aliasable references. A freed slot goes onto a free list
/// and is recycled by the next allocation, so an id handed out by [`alloc`]
/// stays valid until the matching [`free`].
///
/// [`alloc`]: Arena::alloc
/// [`free`]: Arena::free
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Stores `item` in a vacant slot, recycling a freed one when available.
    pub(crate) fn alloc(&mut self, item: T) -> NodeId {
        match self.free_list.pop() {
            | Some(id) => {
                self.slots[id.0] = Some(item);
                id
            },
            | None => {
                self.slots.push(Some(item));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    /// Vacates a slot and returns its contents.
    ///
    /// # Panics
    ///
    /// Panics when `id` names a slot that is already vacant.
    pub(crate) fn free(&mut self, id: NodeId) -> T {
        let item = self.slots[id.0].take().expect("freeing a vacant arena slot");
        self.free_list.push(id);
        item
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        self.slots[id.0]
            .as_ref()
            .expect("indexing a vacant arena slot")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.0]
            .as_mut()
            .expect("indexing a vacant arena slot")
    }
}
