//! The cursor always selects an existing snapshot.

use super::Invariant;
use crate::Timeline;

/// Invariant: `0 <= cursor < history length`.
pub struct CursorInBounds;

impl Invariant<Timeline> for CursorInBounds {
    fn holds(timeline: &Timeline) -> bool {
        timeline.cursor() < timeline.history_len()
    }

    fn description() -> &'static str {
        "Cursor selects an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_new_timeline() {
        assert!(CursorInBounds::holds(&Timeline::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut timeline = Timeline::from_moves(&[0, 1]).expect("legal moves");
        timeline.cursor = 3;
        assert!(!CursorInBounds::holds(&timeline));
    }
}
