use crate::node::{Node, NodeId};
use crate::skiplist::SkipList;

/// Level 0 walk over a [`SkipList`], ascending by `(score, element)`.
/// Walking from the back follows the backward chain from the tail.
pub struct Iter<'a> {
    list: &'a SkipList,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(list: &'a SkipList) -> Iter<'a> {
        Iter {
            list,
            front: list.first_id(),
            back: list.last_id(),
            remaining: list.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.front?);
        self.front = node.next(0);
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.back?);
        self.back = node.backward_;
        self.remaining -= 1;
        Some(node)
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl SkipList {
    pub fn iter(&self) -> Iter {
        Iter::new(self)
    }
}

impl<'a> IntoIterator for &'a SkipList {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
