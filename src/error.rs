use grid_util::point::Point;
use thiserror::Error;

/// Rejected input. Failing to reach the goal is not an error, see
/// [SearchResult::found](crate::SearchResult::found).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{0} lies outside the {1}x{1} grid")]
    OutOfBounds(Point, usize),
    #[error("start and end are both {0}")]
    StartIsEnd(Point),
    #[error("{0} is a wall")]
    Blocked(Point),
    #[error("{0} holds the start or end marker")]
    RoleConflict(Point),
    #[error("no start cell has been marked")]
    MissingStart,
    #[error("no end cell has been marked")]
    MissingEnd,
    #[error("unknown search mode: {0}")]
    UnknownMode(String),
}
