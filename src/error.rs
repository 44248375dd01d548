use thiserror::Error;

/// Failures reported by the mutating operations of [`SkipList`](crate::SkipList).
///
/// Lookups never fail: `rank` answers `0` and `get_by_rank` answers `None`
/// when nothing matches.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("no node with the given score and element")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
