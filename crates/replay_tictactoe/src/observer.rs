//! Change notification for timeline subscribers.
//!
//! A renderer that wants to redraw on change subscribes a
//! [`TimelineObserver`] to an [`ObservedTimeline`]. Every mutation, accepted or
//! rejected, produces exactly one [`TimelineEvent`], delivered after the
//! mutation has completed.

use crate::action::{JumpError, Move, MoveError};
use crate::timeline::{Played, Timeline};
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Something that happened to a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineEvent {
    /// A move was accepted.
    MovePlayed {
        /// The applied move.
        mv: Move,
        /// Snapshots discarded before appending.
        truncated: usize,
        /// Verdict of the new snapshot.
        verdict: Verdict,
    },
    /// The cursor moved.
    Jumped {
        /// Previous cursor.
        from: usize,
        /// New cursor.
        to: usize,
    },
    /// A move was rejected; the timeline is unchanged.
    MoveRejected {
        /// Requested cell index.
        index: usize,
        /// Why it was rejected.
        error: MoveError,
    },
    /// A jump was rejected; the timeline is unchanged.
    JumpRejected {
        /// Why it was rejected.
        error: JumpError,
    },
    /// History was reset to the empty board.
    Restarted,
}

/// Receives timeline events.
pub trait TimelineObserver {
    /// Called after each mutation with the resulting timeline.
    fn on_event(&mut self, timeline: &Timeline, event: &TimelineEvent);
}

/// Observer that records every event it sees.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<TimelineEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in delivery order.
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }
}

impl TimelineObserver for EventLog {
    fn on_event(&mut self, _timeline: &Timeline, event: &TimelineEvent) {
        self.events.push(*event);
    }
}

/// A timeline that notifies subscribers of every mutation.
///
/// Queries go through [`ObservedTimeline::timeline`]; mutations go through the
/// wrapper so no change escapes notification.
pub struct ObservedTimeline {
    timeline: Timeline,
    observers: Vec<Box<dyn TimelineObserver>>,
}

impl ObservedTimeline {
    /// Wraps a timeline with no subscribers.
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            observers: Vec::new(),
        }
    }

    /// Adds a subscriber.
    pub fn subscribe(&mut self, observer: Box<dyn TimelineObserver>) {
        self.observers.push(observer);
    }

    /// Read access to the wrapped timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// See [`Timeline::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<Verdict, MoveError> {
        match self.timeline.play(index) {
            Ok(Played { mv, truncated, verdict }) => {
                self.notify(TimelineEvent::MovePlayed { mv, truncated, verdict });
                Ok(verdict)
            }
            Err(error) => {
                self.notify(TimelineEvent::MoveRejected { index, error });
                Err(error)
            }
        }
    }

    /// See [`Timeline::jump_to`].
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        let from = self.timeline.cursor();
        match self.timeline.jump_to(index) {
            Ok(()) => {
                self.notify(TimelineEvent::Jumped { from, to: index });
                Ok(())
            }
            Err(error) => {
                self.notify(TimelineEvent::JumpRejected { error });
                Err(error)
            }
        }
    }

    /// See [`Timeline::restart`].
    pub fn restart(&mut self) {
        self.timeline.restart();
        self.notify(TimelineEvent::Restarted);
    }

    fn notify(&mut self, event: TimelineEvent) {
        trace!(?event, observers = self.observers.len(), "Notifying observers");
        for observer in &mut self.observers {
            observer.on_event(&self.timeline, &event);
        }
    }
}

impl std::fmt::Debug for ObservedTimeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservedTimeline")
            .field("timeline", &self.timeline)
            .field("observers", &self.observers.len())
            .finish()
    }
}
