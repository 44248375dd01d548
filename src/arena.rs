//! Slot storage for skip list nodes.
//!
//! Forward links are handles into this arena rather than owning pointers, so
//! the backward chain can point at predecessors without creating cycles.
//! Removed slots are recycled through a free list.

use std::ops::{Index, IndexMut};

use crate::node::{Node, NodeId, HEAD};

pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free_list: Vec<NodeId>,
}

impl NodeArena {
    /// Creates an arena whose slot 0 holds `header`.
    pub fn new(header: Node) -> NodeArena {
        NodeArena {
            slots: vec![Some(header)],
            free_list: Vec::new(),
        }
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none());
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Takes the node out of its slot. The caller must already have unlinked
    /// it. Returns `None` for the header or a slot that is already free.
    pub fn release(&mut self, id: NodeId) -> Option<Node> {
        if id == HEAD {
            return None;
        }

        let node = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id);
        Some(node)
    }

    /// Drops every node but the header.
    pub fn truncate(&mut self) {
        self.slots.truncate(1);
        self.free_list.clear();
    }

    /// Number of live nodes, header included.
    #[cfg(test)]
    pub fn live(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Node {
        match self.slots[id.0] {
            Some(ref node) => node,
            None => panic!("dangling node handle {:?}", id),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots[id.0] {
            Some(ref mut node) => node,
            None => panic!("dangling node handle {:?}", id),
        }
    }
}
