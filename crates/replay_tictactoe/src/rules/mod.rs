//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. They hold no
//! state, so the same board always yields the same answer.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{InvalidLine, LINES, Line, check_winner};
