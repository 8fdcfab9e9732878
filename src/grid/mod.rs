use std::str::FromStr;

use num_traits::PrimInt;

use crate::errors::GridError;
use crate::geometry::{Direction, Position};


/// Rectangular matrix of non-negative traversal costs
/// Fixed at construction, read-only afterwards
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<C> {
    cells: Vec<C>, // row-major
    rows: usize,
    cols: usize,
}

impl<C> Grid<C>
where
    C: PrimInt,
    {

    /// Build a grid from its rows
    /// Fails on an empty grid, empty or ragged rows, or negative costs
    pub fn new(rows: Vec<Vec<C>>) -> Result<Self, GridError> {
        let cols = match rows.first() {
            None => return Err(GridError::EmptyGrid),
            Some(first) => first.len(),
        };

        // grows as rows pass validation, a malformed grid must not size the buffer
        let mut cells = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(GridError::EmptyRow { row: r });
            }
            if row.len() != cols {
                return Err(GridError::RaggedRow { row: r, expected: cols, found: row.len() });
            }
            if let Some(c) = row.iter().position(|cost| *cost < C::zero()) {
                return Err(GridError::NegativeCost { row: r, col: c });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { cells, rows: rows.len(), cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn top_left(&self) -> Position {
        Position::new(0, 0)
    }

    pub fn bottom_right(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }

    /// Cost of entering `pos`, None when out of bounds
    pub fn cost(&self, pos: Position) -> Option<C> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col).copied()
    }

    /// In-bounds axis-aligned neighbours, always in N, E, S, W order
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| pos.step(direction))
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Draw the grid with the moves of `path` overlaid as arrows
    /// The first position keeps its cost digit
    pub fn render_path(&self, path: &[Position]) -> String
    where
        C: std::fmt::Display,
    {
        let mut canvas: Vec<Vec<String>> = (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.cells[r * self.cols + c].to_string())
                    .collect()
            })
            .collect();

        for window in path.windows(2) {
            let (from, to) = (window[0], window[1]);
            if !self.contains(to) {
                continue;
            }
            if let Some(direction) = Direction::between(from, to) {
                canvas[to.row][to.col] = direction.arrow().to_string();
            }
        }

        canvas
            .iter()
            .map(|row| row.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }
}


/// One row per line, one decimal digit per cell
impl FromStr for Grid<u32> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim_end_matches(['\n', '\r']);
        if body.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        let rows = body
            .split('\n')
            .enumerate()
            .map(|(r, line)| {
                line.trim_end_matches('\r')
                    .chars()
                    .enumerate()
                    .map(|(c, ch)| {
                        ch.to_digit(10)
                            .ok_or(GridError::InvalidCell { row: r, col: c, found: ch })
                    })
                    .collect::<Result<Vec<u32>, GridError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Grid::new(rows)
    }
}
