use std::cmp::Ordering;
use std::fmt;

/// Handle to a node slot in the list's arena. Slot 0 is always the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

pub(crate) const HEAD: NodeId = NodeId(0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Level {
    /// Next node at this height, if any.
    pub(crate) forward: Option<NodeId>,
    /// Number of level 0 hops that `forward` jumps over. When `forward` is
    /// `None` this counts the hops to the end of the list.
    pub(crate) span: u64,
}

/// A `(score, element)` entry stored in a [`SkipList`](crate::SkipList).
#[derive(Debug, Clone)]
pub struct Node {
    element_: String,
    score_: f64,
    pub(crate) levels_: Vec<Level>,
    /// Previous node at level 0. `None` for the first node and the header.
    pub(crate) backward_: Option<NodeId>,
}

impl Node {
    // A node of height h owns the level slots 0..h.
    pub(crate) fn new(score: f64, element: String, height: usize) -> Node {
        debug_assert!(height >= 1);
        Node {
            element_: element,
            score_: score,
            levels_: vec![Level::default(); height],
            backward_: None,
        }
    }

    pub(crate) fn header(max_height: usize) -> Node {
        Node::new(0.0, String::new(), max_height)
    }

    pub fn element(&self) -> &str {
        &self.element_
    }

    pub fn score(&self) -> f64 {
        self.score_
    }

    /// Number of levels this node participates in.
    pub fn height(&self) -> usize {
        self.levels_.len()
    }

    pub(crate) fn next(&self, height: usize) -> Option<NodeId> {
        self.levels_.get(height).and_then(|level| level.forward)
    }

    pub(crate) fn span(&self, height: usize) -> u64 {
        self.levels_[height].span
    }

    /// Orders this node against a `(score, element)` key: score first, then
    /// element as tie-break.
    pub(crate) fn cmp_key(&self, score: f64, element: &str) -> Ordering {
        match self.score_.partial_cmp(&score) {
            Some(Ordering::Equal) | None => self.element_.as_str().cmp(element),
            Some(ordering) => ordering,
        }
    }

    pub(crate) fn is_key(&self, score: f64, element: &str) -> bool {
        self.score_ == score && self.element_ == element
    }

    pub fn into_element(self) -> String {
        self.element_
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:.2}", self.element_, self.score_)
    }
}
