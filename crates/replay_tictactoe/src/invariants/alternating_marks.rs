//! Marks alternate X, O, X, ... along the history.

use super::Invariant;
use crate::{Player, Square, Timeline};

/// Invariant: the square filled by move `i` holds the mark of parity `i - 1`.
///
/// Snapshots are stored, not moves, so the mark is read back from the square
/// that changed between neighbours.
pub struct AlternatingMarks;

impl Invariant<Timeline> for AlternatingMarks {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(moves_before, pair)| {
                let expected = Square::Occupied(Player::for_parity(moves_before));
                pair[0]
                    .diff(&pair[1])
                    .iter()
                    .all(|pos| pair[1].get(*pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_holds_for_played_game() {
        let timeline = Timeline::from_moves(&[4, 0, 8, 2]).expect("legal moves");
        assert!(AlternatingMarks::holds(&timeline));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut timeline = Timeline::new();
        timeline
            .snapshots
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingMarks::holds(&timeline));
    }
}
