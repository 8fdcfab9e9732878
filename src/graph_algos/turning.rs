use crate::errors::PathSearchError;
use crate::geometry::{Direction, Position};


/// Straight-run limit used when none is configured
pub const DEFAULT_MAX_STRAIGHT: usize = 3;


/// Movement restriction applied on every expansion
/// - no reversing the previous move
/// - at most `max_straight` consecutive moves in one direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnRule {
    max_straight: usize,
}

impl Default for TurnRule {
    fn default() -> Self {
        Self { max_straight: DEFAULT_MAX_STRAIGHT }
    }
}

impl TurnRule {

    pub fn new(max_straight: usize) -> Result<Self, PathSearchError> {
        if max_straight == 0 {
            return Err(PathSearchError::InvalidTurnRule(max_straight));
        }
        Ok(Self { max_straight })
    }

    pub fn max_straight(&self) -> usize {
        self.max_straight
    }

    /// Can a path ending with `path` continue in `candidate`
    /// `path` is the ordered list of visited positions, source first
    pub fn allows(&self, path: &[Position], candidate: Direction) -> bool {

        // only the tail matters: max_straight moves need max_straight + 1 positions
        let tail_start = path.len().saturating_sub(self.max_straight.saturating_add(1));
        let moves: Vec<Option<Direction>> = path[tail_start..]
            .windows(2)
            .map(|w| Direction::between(w[0], w[1]))
            .collect();

        // 180 degree turn
        if let Some(Some(last)) = moves.last() {
            if last.opposite() == candidate {
                return false;
            }
        }

        // straight-run limit only applies once the history is long enough
        if moves.len() < self.max_straight {
            return true;
        }
        !moves.iter().all(|m| *m == Some(candidate))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn walk(start: Position, moves: &[Direction]) -> Vec<Position> {
        let mut path = vec![start];
        for m in moves {
            let next = path.last().unwrap().step(*m).unwrap();
            path.push(next);
        }
        path
    }

    #[test]
    fn test_origin_allows_everything() {
        let rule = TurnRule::default();
        let path = [Position::new(5, 5)];
        for direction in Direction::ALL {
            assert!(rule.allows(&path, direction));
        }
    }

    #[test]
    fn test_reversal_forbidden() {
        let rule = TurnRule::default();
        let path = walk(Position::new(5, 5), &[Direction::East]);

        assert!(!rule.allows(&path, Direction::West));
        assert!(rule.allows(&path, Direction::East));
        assert!(rule.allows(&path, Direction::North));
        assert!(rule.allows(&path, Direction::South));
    }

    #[test]
    fn test_fourth_straight_move_forbidden() {
        let rule = TurnRule::default();
        let two = walk(Position::new(5, 5), &[Direction::South, Direction::South]);
        let three = walk(Position::new(5, 5), &[Direction::South; 3]);

        assert!(rule.allows(&two, Direction::South));
        assert!(!rule.allows(&three, Direction::South));
        // turning is always fine
        assert!(rule.allows(&three, Direction::East));
        assert!(rule.allows(&three, Direction::West));
    }

    #[test]
    fn test_run_resets_after_turn() {
        let rule = TurnRule::default();
        let path = walk(
            Position::new(5, 5),
            &[Direction::East, Direction::East, Direction::East, Direction::South, Direction::East, Direction::East],
        );

        // last three moves are S, E, E
        assert!(rule.allows(&path, Direction::East));
    }

    #[test]
    fn test_custom_limit() {
        let rule = TurnRule::new(1).unwrap();
        let path = walk(Position::new(5, 5), &[Direction::North]);

        assert!(!rule.allows(&path, Direction::North));
        assert!(rule.allows(&path, Direction::East));
        assert_eq!(TurnRule::new(0), Err(PathSearchError::InvalidTurnRule(0)));
    }
}
