pub mod priority_queue;
pub mod state_table;
pub mod turning;
mod path_search;

pub use path_search::{
    least_cost_path, Expansion, Finalized, PathSearch, SearchNode, SearchOutcome, SearchResult, SearchStats,
};
pub use priority_queue::PriorityQueue;
pub use state_table::{DistanceTable, StateKey, VisitedSet};
pub use turning::{TurnRule, DEFAULT_MAX_STRAIGHT};
