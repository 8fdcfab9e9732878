//! Least-cost path search over a grid of cell costs under a turning constraint.
//!
//! A move may never reverse the previous one, and at most
//! [`DEFAULT_MAX_STRAIGHT`] moves in a row may share a direction. The search is
//! Dijkstra over `(position, incoming direction)` states; entering a cell costs
//! that cell's value.
//!
//! ```
//! use turnpath::{Grid, PathSearch};
//!
//! let grid: Grid<u32> = "199\n199\n111".parse().unwrap();
//! let outcome = PathSearch::new(&grid).run().unwrap();
//! assert_eq!(outcome.cost(), Some(4));
//! ```

pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
mod collections;

pub use errors::{GridError, PathSearchError, PositionParseError};
pub use geometry::{Direction, Position};
pub use graph_algos::{
    least_cost_path, PathSearch, SearchOutcome, SearchResult, TurnRule, DEFAULT_MAX_STRAIGHT,
};
pub use grid::Grid;
