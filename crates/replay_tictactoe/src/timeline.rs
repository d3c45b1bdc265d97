//! Snapshot history with a movable cursor.
//!
//! The timeline keeps every board the game has passed through. The cursor
//! picks the snapshot that is shown and that the next move builds on. Playing
//! from an earlier cursor discards the snapshots after it before appending, so
//! history is always a single line with no redo branch.

use crate::action::{JumpError, Move, MoveError};
use crate::contracts::LegalMove;
use crate::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use crate::verdict::{Status, Verdict, evaluate};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Ordered board snapshots plus the index of the current one.
///
/// Deserialization goes through [`TryFrom<RawTimeline>`], so a decoded
/// timeline satisfies the same invariants as one built by playing moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct Timeline {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

/// Unchecked wire form of a [`Timeline`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawTimeline {
    /// Snapshots, oldest first.
    pub snapshots: Vec<Board>,
    /// Index of the current snapshot.
    pub cursor: usize,
}

/// A decoded timeline broke one or more history invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid timeline: {}", join_violations(violations))]
pub struct TimelineError {
    /// Every violated invariant.
    #[error(not(source))]
    pub violations: Vec<InvariantViolation>,
}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TryFrom<RawTimeline> for Timeline {
    type Error = TimelineError;

    #[instrument(skip(raw), fields(len = raw.snapshots.len(), cursor = raw.cursor))]
    fn try_from(raw: RawTimeline) -> Result<Self, Self::Error> {
        let timeline = Self {
            snapshots: raw.snapshots,
            cursor: raw.cursor,
        };
        TimelineInvariants::check_all(&timeline).map_err(|violations| {
            warn!(count = violations.len(), "Rejected decoded timeline");
            TimelineError { violations }
        })?;
        Ok(timeline)
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Snapshot index.
    pub index: usize,
    /// Text for the entry ("Go to game start", "Go to move #3").
    pub label: String,
    /// Whether the cursor sits on this snapshot.
    pub is_current: bool,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Played {
    /// The move that was applied.
    pub mv: Move,
    /// Number of later snapshots discarded before appending.
    pub truncated: usize,
    /// Verdict of the new current snapshot.
    pub verdict: Verdict,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Replays cell indices from the empty board.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn from_moves(moves: &[usize]) -> Result<Self, MoveError> {
        let mut timeline = Self::new();
        for index in moves {
            timeline.apply_move(*index)?;
        }
        Ok(timeline)
    }

    /// Plays the current player's mark at `index` (0-8, row-major).
    ///
    /// On success the snapshots after the cursor are discarded, the new
    /// snapshot is appended, and the cursor moves onto it. On error nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not a board cell.
    /// - [`MoveError::GameOver`] if the current snapshot is won or drawn.
    /// - [`MoveError::SquareOccupied`] if the cell is filled.
    pub fn apply_move(&mut self, index: usize) -> Result<Verdict, MoveError> {
        self.play(index).map(|played| played.verdict)
    }

    /// Like [`Timeline::apply_move`], but also reports what was discarded.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn play(&mut self, index: usize) -> Result<Played, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let current = *self.current();
        if let Err(error) = LegalMove::check(&current, position) {
            debug!(%error, "Move rejected");
            return Err(error);
        }

        let player = self.to_move();
        let next = current.with_mark(position, player);
        let truncated = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        let verdict = evaluate(&next);
        info!(%player, %position, truncated, %verdict, "Move applied");
        self.check_invariants();

        Ok(Played {
            mv: Move::new(player, position),
            truncated,
            verdict,
        })
    }

    /// Moves the cursor to snapshot `index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if no such snapshot exists.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        let len = self.snapshots.len();
        if index >= len {
            debug!(len, "Jump rejected");
            return Err(JumpError::OutOfRange { index, len });
        }
        self.cursor = index;
        debug!("Cursor moved");
        self.check_invariants();
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
        info!("Timeline restarted");
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// The snapshot at `index`, if it exists.
    pub fn snapshot(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots, including the empty start board.
    pub fn history_len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the current snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether `index` is the current snapshot.
    pub fn is_current(&self, index: usize) -> bool {
        index == self.cursor
    }

    /// The player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        Player::for_parity(self.cursor)
    }

    /// Verdict of the current snapshot.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.current())
    }

    /// Status line for the current snapshot.
    pub fn status(&self) -> Status {
        Status::new(&self.verdict(), self.to_move())
    }

    /// The move that produced snapshot `index`.
    ///
    /// Snapshot 0 has no move. Recovered by diffing with the predecessor.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.snapshots.get(index.checked_sub(1)?)?;
        let after = self.snapshots.get(index)?;
        let position = before.diff(after).into_iter().next()?;
        let player = after.get(position).player()?;
        Some(Move::new(player, position))
    }

    /// The move list, one entry per snapshot.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.snapshots.len())
            .map(|index| HistoryEntry {
                index,
                label: if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", index)
                },
                is_current: self.is_current(index),
            })
            .collect()
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TimelineInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(%violation, "Timeline invariant violated");
            }
            debug_assert!(false, "Timeline invariants violated: {:?}", violations);
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_timeline() {
        let timeline = Timeline::new();
        assert_eq!(timeline.history_len(), 1);
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.current(), &Board::new());
        assert_eq!(timeline.to_move(), Player::X);
        assert!(timeline.is_current(0));
    }

    #[test]
    fn test_move_appends_and_advances() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.apply_move(4), Ok(Verdict::Ongoing));
        assert_eq!(timeline.history_len(), 2);
        assert_eq!(timeline.cursor(), 1);
        assert_eq!(timeline.current().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(timeline.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(timeline, Timeline::new());
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut timeline = Timeline::from_moves(&[0, 1, 2]).expect("legal moves");
        timeline.jump_to(1).expect("in range");
        assert_eq!(timeline.history_len(), 4);
        assert_eq!(timeline.cursor(), 1);
        assert_eq!(timeline.to_move(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut timeline = Timeline::from_moves(&[0]).expect("legal move");
        assert_eq!(
            timeline.jump_to(2),
            Err(JumpError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(timeline.cursor(), 1);
    }

    #[test]
    fn test_play_reports_truncation() {
        let mut timeline = Timeline::from_moves(&[0, 1, 2, 3]).expect("legal moves");
        timeline.jump_to(1).expect("in range");
        let played = timeline.play(8).expect("legal move");
        assert_eq!(played.truncated, 3);
        assert_eq!(played.mv, Move::new(Player::O, Position::BottomRight));
        assert_eq!(timeline.history_len(), 3);
    }

    #[test]
    fn test_move_at_recovers_moves() {
        let timeline = Timeline::from_moves(&[4, 0]).expect("legal moves");
        assert_eq!(timeline.move_at(0), None);
        assert_eq!(timeline.move_at(1), Some(Move::new(Player::X, Position::Center)));
        assert_eq!(timeline.move_at(2), Some(Move::new(Player::O, Position::TopLeft)));
        assert_eq!(timeline.move_at(3), None);
    }

    #[test]
    fn test_entries_mark_current() {
        let mut timeline = Timeline::from_moves(&[4, 0]).expect("legal moves");
        timeline.jump_to(1).expect("in range");
        let entries = timeline.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "Go to game start");
        assert_eq!(entries[2].label, "Go to move #2");
        assert_eq!(
            entries.iter().filter(|e| e.is_current).map(|e| e.index).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn test_restart() {
        let mut timeline = Timeline::from_moves(&[4, 0, 8]).expect("legal moves");
        timeline.restart();
        assert_eq!(timeline, Timeline::new());
    }

    #[test]
    fn test_empty_history_rejected() {
        let raw = RawTimeline {
            snapshots: Vec::new(),
            cursor: 3,
        };
        let error = Timeline::try_from(raw).expect_err("no snapshots");
        assert_eq!(error.violations.len(), 2);
    }

    #[test]
    fn test_multi_cell_step_rejected() {
        let o_row = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::TopRight, Player::O);
        let raw = RawTimeline {
            snapshots: vec![Board::new(), o_row],
            cursor: 1,
        };
        assert!(Timeline::try_from(raw).is_err());
    }

    #[test]
    fn test_played_history_accepted() {
        let played = Timeline::from_moves(&[4, 0, 8]).expect("legal moves");
        let raw = RawTimeline {
            snapshots: played.snapshots().to_vec(),
            cursor: 1,
        };
        let timeline = Timeline::try_from(raw).expect("consistent history");
        assert_eq!(timeline.history_len(), 4);
        assert_eq!(timeline.to_move(), Player::O);
    }
}
