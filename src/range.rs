use crate::node::NodeId;
use crate::skiplist::SkipList;

/// Elements whose score lies in `[low, high]`, in ascending order.
///
/// Created by [`SkipList::range_by_score`]. The lower bound is located by
/// score alone; from there the walk follows level 0 until a score exceeds
/// `high`. Each call to `range_by_score` starts a fresh walk.
pub struct RangeByScore<'a> {
    list_: &'a SkipList,
    next_: Option<NodeId>,
    high_: f64,
}

impl<'a> RangeByScore<'a> {
    pub(crate) fn new(list: &'a SkipList, low: f64, high: f64) -> RangeByScore<'a> {
        RangeByScore {
            list_: list,
            next_: list.find_first_at_least(low),
            high_: high,
        }
    }
}

impl<'a> Iterator for RangeByScore<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list_.node(self.next_?);
        if !(node.score() <= self.high_) {
            self.next_ = None;
            return None;
        }

        self.next_ = node.next(0);
        Some(node.element())
    }
}

impl SkipList {
    /// Lazily yields the elements with `low <= score <= high`. Empty when
    /// `low > high` or nothing qualifies.
    #[inline(always)]
    pub fn range_by_score(&self, low: f64, high: f64) -> RangeByScore {
        RangeByScore::new(self, low, high)
    }

    /// Same as `range_by_score`, collected into owned strings.
    pub fn elements_in_range(&self, low: f64, high: f64) -> Vec<String> {
        self.range_by_score(low, high).map(str::to_owned).collect()
    }
}
