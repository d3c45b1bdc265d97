//! Non-interactive replay of scripted moves and jumps.

use crate::config::ReplayConfig;
use crate::log_observer::LogObserver;
use derive_more::{Display, Error};
use replay_tictactoe::{Board, ObservedTimeline, Position, Status, Timeline, Verdict};
use serde::Serialize;
use std::str::FromStr;
use tracing::{instrument, warn};

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Play the current player's mark at a cell (0-8).
    ///
    /// Parsed from `m<cell>` where the cell is an index or a position label
    /// such as `center` or `top-left`.
    Move(usize),
    /// Jump to a history entry.
    Jump(usize),
}

/// A step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid step {:?}: expected m<cell|label> or j<index>", step)]
pub struct StepParseError {
    /// The offending text.
    pub step: String,
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || StepParseError { step: s.to_string() };
        let s = s.trim();
        let (kind, rest) = s.split_at_checked(1).ok_or_else(err)?;
        let rest = rest.trim();
        match kind {
            // Out-of-range numbers still parse so the timeline can reject them.
            "m" | "M" => rest
                .parse()
                .ok()
                .or_else(|| Position::from_label_or_number(rest).map(Position::to_index))
                .map(Step::Move)
                .ok_or_else(err),
            "j" | "J" => rest.parse().map(Step::Jump).map_err(|_| err()),
            _ => Err(err()),
        }
    }
}

/// Parses every step, failing on the first malformed one.
pub fn parse_steps<S: AsRef<str>>(steps: &[S]) -> Result<Vec<Step>, StepParseError> {
    steps.iter().map(|s| s.as_ref().parse()).collect()
}

/// Outcome of a script run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Final cursor.
    pub cursor: usize,
    /// Final history length.
    pub history_len: usize,
    /// Current board, one symbol per cell, empty cells as `null`.
    pub board: Vec<Option<String>>,
    /// Verdict of the current board.
    pub verdict: Verdict,
    /// Status line.
    pub status: String,
    /// Steps that were rejected, with the reason.
    pub rejected: Vec<String>,
    #[serde(skip)]
    timeline: Timeline,
}

impl ScriptReport {
    /// The timeline the script produced.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

/// Applies `steps` to a fresh timeline.
///
/// Rejected moves and jumps are logged and recorded but do not stop the run.
#[instrument(skip(config))]
pub fn run_script(steps: &[Step], config: &ReplayConfig) -> ScriptReport {
    let mut observed = ObservedTimeline::new(Timeline::new());
    observed.subscribe(Box::new(LogObserver));

    let mut rejected = Vec::new();
    for step in steps {
        let outcome = match *step {
            Step::Move(cell) => observed.apply_move(cell).map(drop).map_err(|e| e.to_string()),
            Step::Jump(index) => observed.jump_to(index).map_err(|e| e.to_string()),
        };
        if let Err(reason) = outcome {
            warn!(?step, %reason, "Step rejected");
            rejected.push(format!("{:?}: {}", step, reason));
        }
    }

    let timeline = observed.timeline().clone();
    ScriptReport {
        cursor: timeline.cursor(),
        history_len: timeline.history_len(),
        board: symbols(timeline.current(), config),
        verdict: timeline.verdict(),
        status: status_text(&timeline.status(), config),
        rejected,
        timeline,
    }
}

/// Status line using the configured symbols.
pub fn status_text(status: &Status, config: &ReplayConfig) -> String {
    match status {
        Status::Next(player) => format!("Next player: {}", config.symbol(*player)),
        Status::Winner(player) => format!("Winner: {}", config.symbol(*player)),
        Status::Draw => "Draw".to_string(),
    }
}

fn symbols(board: &Board, config: &ReplayConfig) -> Vec<Option<String>> {
    board
        .squares()
        .iter()
        .map(|square| square.player().map(|p| config.symbol(p).to_string()))
        .collect()
}

/// Plain-text rendering of a report: board, status, then the move list.
pub fn render_text(report: &ScriptReport, config: &ReplayConfig) -> String {
    let mut out = String::new();
    for (row, cells) in report.board.chunks(3).enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                cell.clone()
                    .unwrap_or_else(|| (row * 3 + col + 1).to_string())
            })
            .collect();
        out.push_str(&line.join(" | "));
        out.push('\n');
    }
    out.push_str(&report.status);
    out.push('\n');

    let timeline = report.timeline();
    for entry in timeline.entries() {
        let marker = if entry.is_current { ">" } else { " " };
        let detail = timeline
            .move_at(entry.index)
            .map(|mv| format!(" ({} at {})", config.symbol(mv.player), mv.position))
            .unwrap_or_default();
        out.push_str(&format!("{} {}{}\n", marker, entry.label, detail));
    }
    for reason in &report.rejected {
        out.push_str(&format!("rejected {}\n", reason));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_tictactoe::Player;

    #[test]
    fn test_parse_steps() {
        assert_eq!(
            parse_steps(&["m4", "J0", " m8 "]),
            Ok(vec![Step::Move(4), Step::Jump(0), Step::Move(8)])
        );
    }

    #[test]
    fn test_parse_move_labels() {
        assert_eq!(
            parse_steps(&["mcenter", "m Top-left", "Mbottom-right", "m12"]),
            Ok(vec![Step::Move(4), Step::Move(0), Step::Move(8), Step::Move(12)])
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "m", "x3", "m-1", "jump", "mnowhere", "jcenter"] {
            assert!(bad.parse::<Step>().is_err(), "{:?} should fail", bad);
        }
    }

    #[test]
    fn test_run_script_branches() {
        let steps =
            parse_steps(&["m0", "m4", "m8", "m1", "m2", "j0", "m0"]).expect("valid steps");
        let report = run_script(&steps, &ReplayConfig::default());
        assert_eq!(report.history_len, 2);
        assert_eq!(report.cursor, 1);
        assert_eq!(report.status, "Next player: O");
        assert!(report.rejected.is_empty());
        assert_eq!(report.board.iter().flatten().count(), 1);
    }

    #[test]
    fn test_rejected_steps_are_recorded() {
        let steps = parse_steps(&["m4", "m4", "j9"]).expect("valid steps");
        let report = run_script(&steps, &ReplayConfig::default());
        assert_eq!(report.history_len, 2);
        assert_eq!(report.rejected.len(), 2);
    }

    #[test]
    fn test_render_text_uses_symbols() {
        let config =
            ReplayConfig::from_toml("x_symbol = \"A\"\no_symbol = \"B\"").expect("valid config");
        let steps = parse_steps(&["m0", "m3", "m1", "m4", "m2"]).expect("valid steps");
        let report = run_script(&steps, &config);
        assert_eq!(report.verdict.winner(), Some(Player::X));

        let text = render_text(&report, &config);
        assert!(text.starts_with("A | A | A\nB | B | 6\n7 | 8 | 9\nWinner: A\n"));
        assert!(text.contains("> Go to move #5 (A at Top-right)"));
        assert!(text.contains("  Go to game start"));
    }

    #[test]
    fn test_report_json_lists_line_indices() {
        let steps = parse_steps(&["mcenter", "m0", "m2", "m1", "m6"]).expect("valid steps");
        let report = run_script(&steps, &ReplayConfig::default());
        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(json["verdict"]["Won"]["line"], serde_json::json!([2, 4, 6]));
        assert_eq!(json["status"], "Winner: X");
    }
}
