//! Application state and key handling.

use crate::config::ReplayConfig;
use crate::log_observer::LogObserver;
use crate::script::status_text;
use crossterm::event::KeyCode;
use replay_tictactoe::{ObservedTimeline, Timeline};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    timeline: ObservedTimeline,
    config: ReplayConfig,
    /// History entry highlighted in the move list.
    selected: usize,
    /// Last rejection, cleared by the next accepted action.
    message: Option<String>,
    running: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: ReplayConfig) -> Self {
        let mut timeline = ObservedTimeline::new(Timeline::new());
        timeline.subscribe(Box::new(LogObserver));
        Self {
            timeline,
            config,
            selected: 0,
            message: None,
            running: true,
        }
    }

    /// The game timeline.
    pub fn timeline(&self) -> &Timeline {
        self.timeline.timeline()
    }

    /// Display configuration.
    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the event loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Status line, followed by the last rejection if there is one.
    pub fn status_message(&self) -> String {
        let status = status_text(&self.timeline().status(), &self.config);
        match &self.message {
            Some(message) => format!("{}  ({})", status, message),
            None => status,
        }
    }

    /// Dispatches one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c as usize - '1' as usize;
                self.play(cell);
            }
            KeyCode::Up | KeyCode::Char('k') => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.select(self.selected + 1),
            KeyCode::Enter => self.jump(self.selected),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.timeline().history_len() - 1),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            _ => debug!("Unbound key"),
        }
    }

    /// Plays the current player's mark at `cell` (0-8).
    pub fn play(&mut self, cell: usize) {
        self.message = self.timeline.apply_move(cell).err().map(|e| e.to_string());
        self.selected = self.timeline().cursor();
    }

    /// Jumps to history entry `index`.
    pub fn jump(&mut self, index: usize) {
        self.message = self.timeline.jump_to(index).err().map(|e| e.to_string());
        self.selected = self.timeline().cursor();
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        self.timeline.restart();
        self.message = None;
        self.selected = 0;
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(self.timeline().history_len() - 1);
    }
}
