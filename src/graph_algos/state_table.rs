use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::PrimInt;

use crate::collections::{FxHashSet, FxIndexMap};
use crate::geometry::{Direction, Position};
use super::SearchNode;


/// Search state: where we are and how we got there
/// The incoming direction matters since the turn rule depends on it
pub type StateKey = (Position, Option<Direction>);

/// Order the goal entries are scanned in, first strictly lowest wins
const KEY_DIRECTIONS: [Option<Direction>; 5] = [
    None,
    Some(Direction::North),
    Some(Direction::East),
    Some(Direction::South),
    Some(Direction::West),
];


/// Cheapest node found so far for every state
#[derive(Debug)]
pub struct DistanceTable<C> {
    nodes: FxIndexMap<StateKey, SearchNode<C>>,
}

impl<C: PrimInt> Default for DistanceTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PrimInt> DistanceTable<C> {

    pub fn new() -> Self {
        Self { nodes: FxIndexMap::default() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, key: &StateKey) -> Option<&SearchNode<C>> {
        self.nodes.get(key)
    }

    /// Best known cost, None stands for infinity
    pub fn cost(&self, key: &StateKey) -> Option<C> {
        self.nodes.get(key).map(|node| node.cost)
    }

    /// Would `cost` improve on the current entry for `key`
    pub fn improves(&self, key: &StateKey, cost: C) -> bool {
        self.cost(key).is_none_or(|best| cost < best)
    }

    /// Store `node` if it is strictly cheaper than the current entry
    /// Returns true when the table changed
    pub fn offer(&mut self, node: SearchNode<C>) -> bool {
        match self.nodes.entry(node.key()) {
            Vacant(e) => {
                e.insert(node);
                true
            }
            Occupied(mut e) => {
                if node.cost < e.get().cost {
                    e.insert(node);
                    true
                } else {
                    // existing entry is as good or better - never regress
                    false
                }
            }
        }
    }

    /// Cheapest entry at `position` over every incoming direction
    pub fn best_at(&self, position: Position) -> Option<&SearchNode<C>> {
        let mut best: Option<&SearchNode<C>> = None;
        for direction in KEY_DIRECTIONS {
            if let Some(node) = self.get(&(position, direction)) {
                if best.is_none_or(|b| node.cost < b.cost) {
                    best = Some(node);
                }
            }
        }
        best
    }
}


/// States whose cost is final
#[derive(Debug, Default)]
pub struct VisitedSet {
    finalized: FxHashSet<StateKey>,
}

impl VisitedSet {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &StateKey) -> bool {
        self.finalized.contains(key)
    }

    /// Mark `key` finalized, false if it already was
    pub fn finalize(&mut self, key: StateKey) -> bool {
        self.finalized.insert(key)
    }

    pub fn len(&self) -> usize {
        self.finalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn node(position: Position, last_direction: Option<Direction>, cost: u32) -> SearchNode<u32> {
        SearchNode { position, cost, path: vec![position], last_direction }
    }

    #[test]
    fn test_offer_never_regresses() {
        let p = Position::new(1, 1);
        let key = (p, Some(Direction::East));
        let mut table = DistanceTable::new();

        assert!(table.improves(&key, 100));
        assert!(table.offer(node(p, Some(Direction::East), 5)));
        assert!(!table.offer(node(p, Some(Direction::East), 7))); // worse
        assert!(!table.offer(node(p, Some(Direction::East), 5))); // equal
        assert_eq!(table.cost(&key), Some(5));

        assert!(table.offer(node(p, Some(Direction::East), 3)));
        assert_eq!(table.cost(&key), Some(3));
        assert_eq!(table.get(&key).map(|n| n.path.clone()), Some(vec![p]));
        assert!(table.get(&(p, None)).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_directions_are_separate_states() {
        let p = Position::new(0, 2);
        let mut table = DistanceTable::new();

        table.offer(node(p, Some(Direction::East), 9));
        table.offer(node(p, Some(Direction::North), 4));

        assert_eq!(table.len(), 2);
        assert_eq!(table.cost(&(p, Some(Direction::East))), Some(9));
        assert_eq!(table.cost(&(p, Some(Direction::West))), None);
    }

    #[test]
    fn test_best_at_takes_minimum_over_directions() {
        let p = Position::new(2, 2);
        let mut table = DistanceTable::new();
        assert!(table.best_at(p).is_none());

        table.offer(node(p, Some(Direction::South), 8));
        table.offer(node(p, Some(Direction::East), 6));
        table.offer(node(Position::new(2, 1), Some(Direction::East), 1)); // other cell

        let best = table.best_at(p).unwrap();
        assert_eq!(best.cost, 6);
        assert_eq!(best.last_direction, Some(Direction::East));
    }

    #[test]
    fn test_visited_finalize_once() {
        let key = (Position::new(0, 0), None);
        let mut visited = VisitedSet::new();

        assert!(!visited.contains(&key));
        assert!(visited.finalize(key));
        assert!(!visited.finalize(key));
        assert!(visited.contains(&key));
        assert_eq!(visited.len(), 1);
    }
}
