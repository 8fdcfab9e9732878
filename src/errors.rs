use thiserror::Error;

use crate::geometry::Position;


/// Grid construction / parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {row} is empty")]
    EmptyRow { row: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("cell ({row}, {col}) has a negative cost")]
    NegativeCost { row: usize, col: usize },

    #[error("cell ({row}, {col}) is not a digit: {found:?}")]
    InvalidCell { row: usize, col: usize, found: char },
}


/// Search setup / execution failures
/// An unreachable goal is not an error, see `SearchOutcome::Unreachable`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathSearchError {
    #[error("{role} {position} is outside the {rows}x{cols} grid")]
    OutOfBounds { role: &'static str, position: Position, rows: usize, cols: usize },

    #[error("turn rule needs at least one straight move, got {0}")]
    InvalidTurnRule(usize),

    #[error("path cost overflowed entering {position}")]
    CostOverflow { position: Position },
}


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionParseError {
    #[error("expected `row,col`, got {0:?}")]
    Format(String),

    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
}
