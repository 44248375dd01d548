//! A ranked skip list ordered by `(score, element)`.
//!
//! This is the index that sits beneath a sorted set: every entry is a numeric
//! score paired with a string element, entries are kept sorted by score and
//! then by element, and each forward link carries a span so that ranks can be
//! computed and resolved in logarithmic expected time.
//!
//! The list does not keep an element -> score map and does not reject
//! duplicate keys. Callers that need set semantics keep that map themselves
//! and delete before re-inserting an element under a new score.

mod arena;
mod error;
mod height_control;
mod iter;
mod node;
mod range;
mod skiplist;

pub use error::{Error, Result};
pub use height_control::{GeometricalGenerator, HashCoinGenerator, HeightControl, SequenceGenerator};
pub use iter::Iter;
pub use node::Node;
pub use range::RangeByScore;
pub use skiplist::SkipList;

/// Maximum number of levels any node, including the header, can have.
pub const MAX_HEIGHT: usize = 32;

/// Probability of promoting a node one more level.
pub const UPGRADE_PROBABILITY: f64 = 0.25;
