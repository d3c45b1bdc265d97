//! Timeline observer that writes every event to the tracing log.

use replay_tictactoe::{Timeline, TimelineEvent, TimelineObserver};
use tracing::{debug, info};

/// Logs timeline events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl TimelineObserver for LogObserver {
    fn on_event(&mut self, timeline: &Timeline, event: &TimelineEvent) {
        match event {
            TimelineEvent::MovePlayed { mv, truncated, verdict } => {
                info!(
                    %mv,
                    truncated,
                    %verdict,
                    history_len = timeline.history_len(),
                    "Move played"
                );
            }
            TimelineEvent::Jumped { from, to } => {
                info!(from, to, "Jumped");
            }
            TimelineEvent::MoveRejected { index, error } => {
                debug!(index, %error, "Move rejected");
            }
            TimelineEvent::JumpRejected { error } => {
                debug!(%error, "Jump rejected");
            }
            TimelineEvent::Restarted => {
                info!("Game restarted");
            }
        }
    }
}
