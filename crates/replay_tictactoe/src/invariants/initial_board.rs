//! The first snapshot is always the empty board.

use super::Invariant;
use crate::{Board, Timeline};

/// Invariant: snapshot 0 is the empty board.
pub struct InitialBoardEmpty;

impl Invariant<Timeline> for InitialBoardEmpty {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "First snapshot is the empty board"
    }
}
