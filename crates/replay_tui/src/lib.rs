//! Terminal front-end for tic-tac-toe with move history.
//!
//! Renders the snapshot under the cursor, the move list and a status line,
//! and turns key presses into moves and jumps on a
//! [`Timeline`](replay_tictactoe::Timeline).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod log_observer;
pub mod script;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, ReplayConfig};
pub use script::{ScriptReport, Step, StepParseError, parse_steps, render_text, run_script};
