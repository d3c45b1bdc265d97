//! Tic-tac-toe game logic with snapshot history and time travel.
//!
//! # Architecture
//!
//! - **Evaluator**: [`evaluate`] maps a [`Board`] snapshot to a [`Verdict`]
//! - **History**: [`Timeline`] holds every snapshot and a cursor into them
//! - **Observation**: [`ObservedTimeline`] notifies subscribers of changes
//!
//! # Example
//!
//! ```
//! use replay_tictactoe::{Player, Timeline, Verdict};
//!
//! let mut timeline = Timeline::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     timeline.apply_move(cell).unwrap();
//! }
//! assert_eq!(timeline.verdict().winner(), Some(Player::X));
//!
//! // Rewind to the start and branch off; later snapshots are gone.
//! timeline.jump_to(0).unwrap();
//! assert_eq!(timeline.apply_move(0), Ok(Verdict::Ongoing));
//! assert_eq!(timeline.history_len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod timeline;
mod types;
mod verdict;

pub use action::{JumpError, Move, MoveError};
pub use observer::{EventLog, ObservedTimeline, TimelineEvent, TimelineObserver};
pub use position::Position;
pub use rules::{InvalidLine, Line};
pub use timeline::{HistoryEntry, Played, RawTimeline, Timeline, TimelineError};
pub use types::{Board, Player, Square};
pub use verdict::{Status, Verdict, evaluate};
