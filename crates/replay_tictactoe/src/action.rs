//! Moves and the ways a timeline can reject them.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected.
///
/// A rejected move leaves the timeline exactly as it was.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current snapshot is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is not on the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Reason a jump was rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Error,
)]
pub enum JumpError {
    /// The requested snapshot does not exist.
    #[display("Move {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested snapshot index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
