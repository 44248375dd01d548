use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::arena::NodeArena;
use crate::error::{Error, Result};
use crate::height_control::{GeometricalGenerator, HeightControl};
use crate::node::{Level, Node, NodeId, HEAD};
use crate::MAX_HEIGHT;

/// Per-level predecessors of a search key, together with the rank of each
/// predecessor.
struct Path {
    updates: [NodeId; MAX_HEIGHT],
    ranks: [u64; MAX_HEIGHT],
}

pub struct SkipList {
    /// Node storage. Slot 0 is the header: a "ghost" node created within
    /// `SkipList::new` that is never removed, has `MAX_HEIGHT` levels and an
    /// empty element. Every search begins there; its level 0 successor is the
    /// first real node, if any.
    arena_: NodeArena,

    /// Last node at level 0, if any.
    tail_: Option<NodeId>,

    /// Number of elements in the SkipList
    length_: usize,

    /// Number of header levels currently in use. Never below 1.
    height_: usize,

    /// Maximum height the `controller_` can generate, capped at `MAX_HEIGHT`.
    /// Stored here so that heights coming back from the controller can be
    /// clamped without a virtual call.
    max_height_: usize,

    /// Used to generate the height for any given node when inserting data.
    controller_: Box<dyn HeightControl>,
}

impl SkipList {
    /// Creates an empty list whose node heights come from an entropy-seeded
    /// geometric generator.
    pub fn new() -> SkipList {
        SkipList::with_height_control(Box::new(GeometricalGenerator::new()))
    }

    /// Creates an empty list with a reproducible node layout.
    pub fn with_seed(seed: u64) -> SkipList {
        SkipList::with_height_control(Box::new(GeometricalGenerator::with_seed(seed)))
    }

    pub fn with_height_control(controller: Box<dyn HeightControl>) -> SkipList {
        let max_height = controller.max_height().clamp(1, MAX_HEIGHT);

        SkipList {
            arena_: NodeArena::new(Node::header(MAX_HEIGHT)),
            tail_: None,
            length_: 0,
            height_: 1,
            max_height_: max_height,
            // The only direct call to controller_ should be done in the
            // `SkipList::insert` function.
            controller_: controller,
        }
    }

    /// Returns the number of nodes stored in the structure.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.length_
    }

    /// Returns `true` if there are no nodes stored within the structure.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.length_ == 0
    }

    /// Number of levels currently in use, which is the height of the tallest
    /// node (or 1 for an empty list).
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height_
    }

    pub fn first(&self) -> Option<&Node> {
        self.arena_[HEAD].next(0).map(|id| &self.arena_[id])
    }

    pub fn last(&self) -> Option<&Node> {
        self.tail_.map(|id| &self.arena_[id])
    }

    /// Removes all nodes.
    pub fn clear(&mut self) {
        self.arena_.truncate();
        for level in self.arena_[HEAD].levels_.iter_mut() {
            *level = Level::default();
        }
        self.tail_ = None;
        self.length_ = 0;
        self.height_ = 1;
        debug!("skiplist cleared");
    }

    #[inline(always)]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.arena_[id]
    }

    #[inline(always)]
    pub(crate) fn first_id(&self) -> Option<NodeId> {
        self.arena_[HEAD].next(0)
    }

    #[inline(always)]
    pub(crate) fn last_id(&self) -> Option<NodeId> {
        self.tail_
    }

    /// Finds, for every level in use, the last node whose key is strictly
    /// below `(score, element)` and its rank.
    fn find_lower_bound_with_updates(&self, score: f64, element: &str) -> Path {
        let mut path = Path {
            updates: [HEAD; MAX_HEIGHT],
            ranks: [0; MAX_HEIGHT],
        };

        let mut current = HEAD;
        for height in (0..self.height_).rev() {
            path.ranks[height] = if height + 1 == self.height_ {
                0
            } else {
                path.ranks[height + 1]
            };

            while let Some(next) = self.arena_[current].next(height) {
                if self.arena_[next].cmp_key(score, element) == Ordering::Less {
                    path.ranks[height] += self.arena_[current].span(height);
                    current = next;
                } else {
                    break;
                }
            }

            path.updates[height] = current;
        }

        path
    }

    /// Inserts `(score, element)` and returns the new node.
    ///
    /// The element must be non-empty and the score must not be NaN; otherwise
    /// `Error::InvalidArgument` is returned and the list is left untouched.
    /// Inserting a key that is already present adds a second node with the
    /// same key: keeping keys unique is up to the caller.
    pub fn insert<E: Into<String>>(&mut self, score: f64, element: E) -> Result<&Node> {
        let element = element.into();
        if element.is_empty() {
            return Err(Error::InvalidArgument("element must not be empty"));
        }
        if score.is_nan() {
            return Err(Error::InvalidArgument("score must not be NaN"));
        }

        let mut path = self.find_lower_bound_with_updates(score, &element);

        let height = self.controller_.get_height(&element).clamp(1, self.max_height_);
        if height > self.height_ {
            // Nothing lived above the old height, so the header is the
            // predecessor there and its span covers the whole list.
            for h in self.height_..height {
                path.ranks[h] = 0;
                path.updates[h] = HEAD;
                self.arena_[HEAD].levels_[h].span = self.length_ as u64;
            }
            debug!("skiplist height grows from {} to {}", self.height_, height);
            self.height_ = height;
        }

        let id = self.arena_.alloc(Node::new(score, element, height));
        for h in 0..height {
            let update = path.updates[h];
            let Level { forward, span } = self.arena_[update].levels_[h];
            // Level 0 hops between the predecessor at this level and the one
            // at level 0.
            let behind = path.ranks[0] - path.ranks[h];

            self.arena_[id].levels_[h] = Level {
                forward,
                span: span - behind,
            };
            self.arena_[update].levels_[h] = Level {
                forward: Some(id),
                span: behind + 1,
            };
        }

        // Links above the new node now jump over one more node.
        for h in height..self.height_ {
            self.arena_[path.updates[h]].levels_[h].span += 1;
        }

        self.arena_[id].backward_ = if path.updates[0] == HEAD {
            None
        } else {
            Some(path.updates[0])
        };
        match self.arena_[id].next(0) {
            Some(next) => self.arena_[next].backward_ = Some(id),
            None => self.tail_ = Some(id),
        }

        self.length_ += 1;
        trace!(
            "inserted {} at rank {} with height {}",
            self.arena_[id],
            path.ranks[0] + 1,
            height
        );
        Ok(&self.arena_[id])
    }

    /// Removes the node with exactly `(score, element)` and hands it back.
    /// Returns `Error::NotFound`, without touching the list, if there is none.
    pub fn delete(&mut self, score: f64, element: &str) -> Result<Node> {
        let path = self.find_lower_bound_with_updates(score, element);

        let target = match self.arena_[path.updates[0]].next(0) {
            Some(next) if self.arena_[next].is_key(score, element) => next,
            _ => return Err(Error::NotFound),
        };

        self.unlink(target, &path.updates);
        let node = self.arena_.release(target).ok_or(Error::NotFound)?;
        trace!("deleted {}", node);
        Ok(node)
    }

    fn unlink(&mut self, target: NodeId, updates: &[NodeId; MAX_HEIGHT]) {
        for h in 0..self.height_ {
            let update = updates[h];
            if self.arena_[update].next(h) == Some(target) {
                let Level { forward, span } = self.arena_[target].levels_[h];
                let level = &mut self.arena_[update].levels_[h];
                level.span = level.span + span - 1;
                level.forward = forward;
            } else {
                // This link passed over the target.
                self.arena_[update].levels_[h].span -= 1;
            }
        }

        let backward = self.arena_[target].backward_;
        match self.arena_[target].next(0) {
            Some(next) => self.arena_[next].backward_ = backward,
            None => self.tail_ = backward,
        }

        let height = self.height_;
        while self.height_ > 1 && self.arena_[HEAD].next(self.height_ - 1).is_none() {
            self.height_ -= 1;
        }
        if height != self.height_ {
            debug!("skiplist height shrinks from {} to {}", height, self.height_);
        }

        self.length_ -= 1;
    }

    /// 1-based rank of `(score, element)`, or `0` if it is not present.
    pub fn rank(&self, score: f64, element: &str) -> u64 {
        let mut rank = 0;
        let mut current = HEAD;

        for height in (0..self.height_).rev() {
            while let Some(next) = self.arena_[current].next(height) {
                let node = &self.arena_[next];
                // Equal scores advance while the element is <= the query so
                // that the walk stops on the exact match.
                if node.score() < score || (node.score() == score && node.element() <= element) {
                    rank += self.arena_[current].span(height);
                    current = next;
                } else {
                    break;
                }
            }

            if current != HEAD && self.arena_[current].is_key(score, element) {
                return rank;
            }
        }

        0
    }

    #[inline(always)]
    pub fn contains(&self, score: f64, element: &str) -> bool {
        self.rank(score, element) != 0
    }

    /// Node at the 1-based `rank`, or `None` if `rank` is 0 or past the end.
    pub fn get_by_rank(&self, rank: u64) -> Option<&Node> {
        if rank == 0 || rank > self.length_ as u64 {
            return None;
        }

        self.get_by_rank_from(HEAD, self.height_ - 1, rank)
            .map(|id| &self.arena_[id])
    }

    /// Walks `rank` level 0 hops from `start`, beginning at `start_height`.
    fn get_by_rank_from(&self, start: NodeId, start_height: usize, rank: u64) -> Option<NodeId> {
        let mut current = start;
        let mut traversed = 0;

        for height in (0..=start_height).rev() {
            while let Some(next) = self.arena_[current].next(height) {
                let span = self.arena_[current].span(height);
                if traversed + span <= rank {
                    traversed += span;
                    current = next;
                } else {
                    break;
                }
            }

            if traversed == rank {
                return Some(current);
            }
        }

        None
    }

    /// Locates the first node whose score is at least `low`. The element does
    /// not take part: ties on `low` are all at or after the returned node.
    pub(crate) fn find_first_at_least(&self, low: f64) -> Option<NodeId> {
        let mut current = HEAD;

        for height in (0..self.height_).rev() {
            while let Some(next) = self.arena_[current].next(height) {
                if self.arena_[next].score() < low {
                    current = next;
                } else {
                    break;
                }
            }
        }

        self.arena_[current].next(0)
    }
}

impl Default for SkipList {
    fn default() -> Self {
        SkipList::new()
    }
}

impl fmt::Display for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;

        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }

        write!(f, "]")
    }
}

impl fmt::Debug for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| (node.score(), node.element())))
            .finish()
    }
}
