use std::fmt::Debug;

use log::{debug, trace};
use num_traits::PrimInt;

use crate::errors::PathSearchError;
use crate::geometry::{Direction, Position};
use crate::grid::Grid;
use super::priority_queue::PriorityQueue;
use super::state_table::{DistanceTable, StateKey, VisitedSet};
use super::turning::TurnRule;


/// Node in the search frontier
/// Carries the full path so the turn rule can look at the recent moves
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode<C> {
    pub position: Position,
    pub cost: C, // total cost from the source, source cell excluded
    pub path: Vec<Position>, // source .. position
    pub last_direction: Option<Direction>, // None only at the source
}

impl<C: Copy> SearchNode<C> {

    pub fn key(&self) -> StateKey {
        (self.position, self.last_direction)
    }

    fn origin(source: Position, zero: C) -> Self {
        Self {
            position: source,
            cost: zero,
            path: vec![source],
            last_direction: None,
        }
    }

    fn extend(&self, next: Position, direction: Direction, cost: C) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);

        Self { position: next, cost, path, last_direction: Some(direction) }
    }
}


/// A state whose minimum cost is now fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finalized<C> {
    pub position: Position,
    pub last_direction: Option<Direction>,
    pub cost: C,
}


/// Counters collected while expanding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub pushed: usize, // nodes inserted into the queue, seed included
    pub popped: usize,
    pub stale: usize, // popped after their state was already finalized
    pub finalized: usize,
}


/// Least-cost path to the goal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<C> {
    pub cost: C,
    pub path: Vec<Position>,
    pub last_direction: Option<Direction>,
}

impl<C> SearchResult<C> {

    /// Directions of the moves along the path
    pub fn moves(&self) -> Vec<Direction> {
        self.path
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
            .collect()
    }
}


/// Outcome of a completed search
/// Unreachable is a normal result, distinct from reaching the goal at cost 0
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<C> {
    Reached(SearchResult<C>),
    Unreachable,
}

impl<C: Copy> SearchOutcome<C> {

    pub fn is_reachable(&self) -> bool {
        matches!(self, SearchOutcome::Reached(_))
    }

    pub fn cost(&self) -> Option<C> {
        match self {
            SearchOutcome::Reached(result) => Some(result.cost),
            SearchOutcome::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[Position]> {
        match self {
            SearchOutcome::Reached(result) => Some(&result.path),
            SearchOutcome::Unreachable => None,
        }
    }
}


/// Dijkstra over (position, incoming direction) states with a turn rule
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Entering a cell costs that cell's value, the source cell is free.
/// Source and goal default to the top-left and bottom-right corners.
#[derive(Clone, Debug)]
pub struct PathSearch<'g, C> {
    grid: &'g Grid<C>,
    source: Position,
    goal: Position,
    rule: TurnRule,
}

impl<'g, C> PathSearch<'g, C>
where
    C: PrimInt + Debug,
    {

    pub fn new(grid: &'g Grid<C>) -> Self {
        Self {
            grid,
            source: grid.top_left(),
            goal: grid.bottom_right(),
            rule: TurnRule::default(),
        }
    }

    pub fn with_source(mut self, source: Position) -> Self {
        self.source = source;
        self
    }

    pub fn with_goal(mut self, goal: Position) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_turn_rule(mut self, rule: TurnRule) -> Self {
        self.rule = rule;
        self
    }

    /// Run the search to completion
    pub fn run(&self) -> Result<SearchOutcome<C>, PathSearchError> {
        self.expand()?.into_outcome()
    }

    /// Step-wise form of `run`: yields every finalized state in pop order
    pub fn expand(&self) -> Result<Expansion<'g, C>, PathSearchError> {
        self.check_bounds("source", self.source)?;
        self.check_bounds("goal", self.goal)?;

        debug!(
            "searching {}x{} grid from {} to {} (max straight {})",
            self.grid.rows(),
            self.grid.cols(),
            self.source,
            self.goal,
            self.rule.max_straight()
        );

        Ok(Expansion::new(self.grid, self.source, self.goal, self.rule))
    }

    fn check_bounds(&self, role: &'static str, position: Position) -> Result<(), PathSearchError> {
        if self.grid.contains(position) {
            return Ok(());
        }
        Err(PathSearchError::OutOfBounds {
            role,
            position,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
        })
    }
}


/// In-progress search, owns every per-run structure
pub struct Expansion<'g, C> {
    grid: &'g Grid<C>,
    goal: Position,
    rule: TurnRule,
    queue: PriorityQueue<SearchNode<C>, C>,
    distances: DistanceTable<C>,
    visited: VisitedSet,
    stats: SearchStats,
}

impl<'g, C> Expansion<'g, C>
where
    C: PrimInt + Debug,
    {

    fn new(grid: &'g Grid<C>, source: Position, goal: Position, rule: TurnRule) -> Self {
        let origin = SearchNode::origin(source, C::zero());

        let mut queue = PriorityQueue::new();
        let mut distances = DistanceTable::new();
        distances.offer(origin.clone());
        queue.insert(origin, C::zero());

        Self {
            grid,
            goal,
            rule,
            queue,
            distances,
            visited: VisitedSet::new(),
            stats: SearchStats { pushed: 1, ..SearchStats::default() },
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn distances(&self) -> &DistanceTable<C> {
        &self.distances
    }

    /// Pop until a fresh state turns up, then expand it
    /// Ok(None) once the queue is exhausted
    fn step(&mut self) -> Result<Option<Finalized<C>>, PathSearchError> {
        while let Some(node) = self.queue.pop() {
            self.stats.popped += 1;

            if !self.visited.finalize(node.key()) {
                // cheaper copy of this state was already expanded
                self.stats.stale += 1;
                trace!("stale {} {:?} at cost {:?}", node.position, node.last_direction, node.cost);
                continue;
            }
            self.stats.finalized += 1;
            trace!("finalized {} {:?} at cost {:?}", node.position, node.last_direction, node.cost);

            for neighbor in self.grid.neighbors(node.position) {
                let Some(direction) = Direction::between(node.position, neighbor) else {
                    continue;
                };
                if !self.rule.allows(&node.path, direction) {
                    continue;
                }
                let Some(step_cost) = self.grid.cost(neighbor) else {
                    continue;
                };

                let cost = node
                    .cost
                    .checked_add(&step_cost)
                    .ok_or(PathSearchError::CostOverflow { position: neighbor })?;

                if self.distances.improves(&(neighbor, Some(direction)), cost) {
                    let next = node.extend(neighbor, direction, cost);
                    self.distances.offer(next.clone());
                    self.queue.insert(next, cost);
                    self.stats.pushed += 1;
                }
            }

            return Ok(Some(Finalized {
                position: node.position,
                last_direction: node.last_direction,
                cost: node.cost,
            }));
        }

        Ok(None)
    }

    /// Finish the search and read the goal off the distance table
    /// Every incoming direction is a candidate, the cheapest wins
    pub fn into_outcome(mut self) -> Result<SearchOutcome<C>, PathSearchError> {
        while self.step()?.is_some() {}

        debug!(
            "search finished: {} pushed, {} popped, {} stale, {} states finalized",
            self.stats.pushed, self.stats.popped, self.stats.stale, self.stats.finalized
        );

        let outcome = match self.distances.best_at(self.goal) {
            Some(node) => SearchOutcome::Reached(SearchResult {
                cost: node.cost,
                path: node.path.clone(),
                last_direction: node.last_direction,
            }),
            None => SearchOutcome::Unreachable,
        };

        match outcome.cost() {
            Some(cost) => debug!("goal {} reached at cost {:?}", self.goal, cost),
            None => debug!("goal {} unreachable", self.goal),
        }

        Ok(outcome)
    }
}

impl<C> Iterator for Expansion<'_, C>
where
    C: PrimInt + Debug,
    {
    type Item = Result<Finalized<C>, PathSearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(Some(finalized)) => Some(Ok(finalized)),
            Ok(None) => None,
            Err(e) => {
                // the run cannot continue past an overflow
                self.queue = PriorityQueue::new();
                Some(Err(e))
            }
        }
    }
}


/// Least-cost path from the top-left to the bottom-right corner with the default turn rule
pub fn least_cost_path<C>(grid: &Grid<C>) -> Result<SearchOutcome<C>, PathSearchError>
where
    C: PrimInt + Debug,
    {
    PathSearch::new(grid).run()
}
