//! Move preconditions.
//!
//! A move is legal against a snapshot when the snapshot is undecided and the
//! target square is empty. The checks read the board only; the player to move
//! comes from the timeline's cursor parity and cannot be wrong.

use crate::action::MoveError;
use crate::verdict::evaluate;
use crate::{Board, Position};
use tracing::instrument;

/// Precondition: the snapshot must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks that `board` is still ongoing.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        if evaluate(board).is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that `pos` is open on `board`.
    #[instrument(skip(board))]
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is undecided and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        GameNotOver::check(board)?;
        SquareIsEmpty::check(board, pos)?;
        Ok(())
    }
}
