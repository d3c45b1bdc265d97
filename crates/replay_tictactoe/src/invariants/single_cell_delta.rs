//! Consecutive snapshots differ by exactly one filled square.

use super::Invariant;
use crate::{Square, Timeline};

/// Invariant: snapshot `i` equals snapshot `i - 1` plus one newly filled square.
///
/// No square is ever cleared or overwritten between neighbours.
pub struct SingleCellDelta;

impl Invariant<Timeline> for SingleCellDelta {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().windows(2).all(|pair| {
            let changed = pair[0].diff(&pair[1]);
            changed.len() == 1
                && pair[0].get(changed[0]) == Square::Empty
                && pair[1].get(changed[0]) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one square of its predecessor"
    }
}
