//! Outcome classification of a board snapshot.

use crate::rules::{self, Line};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Outcome of a single board snapshot.
///
/// Derived from a board on demand and never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No line completed and at least one square open.
    Ongoing,
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Every square filled with no completed line.
    Draw,
}

impl Verdict {
    /// Returns true once the game is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Verdict::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(pos))
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Ongoing => write!(f, "Ongoing"),
            Verdict::Won { player, line } => {
                let [a, b, c] = line.indices();
                write!(f, "Player {} wins on [{}, {}, {}]", player, a, b, c)
            }
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board snapshot.
///
/// The win check runs before the fullness check, so a full board with a
/// completed line is a win, not a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    let verdict = if let Some((player, line)) = rules::check_winner(board) {
        Verdict::Won { player, line }
    } else if rules::is_full(board) {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    };
    trace!(%verdict, "Evaluated board");
    verdict
}

/// Display status of the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game continues; this player moves next.
    Next(Player),
    /// Game won by this player.
    Winner(Player),
    /// Game drawn.
    Draw,
}

impl Status {
    /// Combines a verdict with the player to move.
    pub fn new(verdict: &Verdict, to_move: Player) -> Self {
        match verdict {
            Verdict::Ongoing => Status::Next(to_move),
            Verdict::Won { player, .. } => Status::Winner(*player),
            Verdict::Draw => Status::Draw,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Next(player) => write!(f, "Next player: {}", player),
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => write!(f, "Draw"),
        }
    }
}
