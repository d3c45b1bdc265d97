//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
///
/// Serialized as its three board indices, e.g. `[0, 4, 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[usize; 3]", try_from = "[usize; 3]")]
pub struct Line([Position; 3]);

/// Indices that do not form one of the eight winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{:?} is not a row, column or diagonal", indices)]
pub struct InvalidLine {
    /// The rejected indices.
    #[error(not(source))]
    pub indices: [usize; 3],
}

impl Line {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl From<Line> for [usize; 3] {
    fn from(line: Line) -> Self {
        line.indices()
    }
}

impl TryFrom<[usize; 3]> for Line {
    type Error = InvalidLine;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        LINES
            .into_iter()
            .find(|line| line.indices() == indices)
            .ok_or(InvalidLine { indices })
    }
}

/// All winning lines, in evaluation order.
///
/// Rows top-to-bottom, then columns left-to-right, then the main and anti
/// diagonals. The first completed line in this order is the one reported.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player and the first completed line, or `None` if
/// no line holds three equal marks.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            first @ Square::Occupied(player)
                if board.get(b) == first && board.get(c) == first =>
            {
                Some((player, *line))
            }
            _ => None,
        }
    })
}
