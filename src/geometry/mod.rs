use std::{fmt, str::FromStr};

use crate::errors::PositionParseError;


/// Grid cell coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Adjacent position in `direction`
    /// None when the step would leave the non-negative quadrant
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (row, col) = match direction {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row.checked_add(1)?, self.col),
            Direction::East => (self.row, self.col.checked_add(1)?),
            Direction::West => (self.row, self.col.checked_sub(1)?),
        };
        Some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `row,col`
impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| PositionParseError::Format(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| PositionParseError::Coordinate(part.trim().to_string()))
        };

        Ok(Position { row: parse(row)?, col: parse(col)? })
    }
}


/// Direction of travel between two adjacent cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {

    /// Fixed expansion order - results must be reproducible
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Direction of the move a -> b
    /// Only axis-adjacent cells have a direction, anything else is None
    pub fn between(a: Position, b: Position) -> Option<Direction> {
        if a.manhattan(&b) != 1 {
            return None;
        }

        let direction = if b.row < a.row {
            Direction::North
        } else if b.row > a.row {
            Direction::South
        } else if b.col > a.col {
            Direction::East
        } else {
            Direction::West
        };
        Some(direction)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Arrow drawn on a cell entered by this move
    pub fn arrow(self) -> char {
        match self {
            Direction::North => '^',
            Direction::South => 'v',
            Direction::East => '>',
            Direction::West => '<',
        }
    }
}
