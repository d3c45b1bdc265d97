//! Tic-tac-toe board rendering.

use crate::config::ReplayConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use replay_tictactoe::{Board, Player, Position, Square, Verdict};

/// Renders the board, highlighting the winning line if there is one.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    verdict: &Verdict,
    config: &ReplayConfig,
) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let cells = Cells { board, verdict, config };
    cells.render_row(f, rows[0], 0);
    render_separator(f, rows[1]);
    cells.render_row(f, rows[2], 3);
    render_separator(f, rows[3]);
    cells.render_row(f, rows[4], 6);
}

struct Cells<'a> {
    board: &'a Board,
    verdict: &'a Verdict,
    config: &'a ReplayConfig,
}

impl Cells<'_> {
    fn render_row(&self, f: &mut Frame, area: Rect, start: usize) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Length(1),
                Constraint::Percentage(33),
                Constraint::Length(1),
                Constraint::Percentage(34),
            ])
            .split(area);

        self.render_square(f, cols[0], start);
        render_vertical_sep(f, cols[1]);
        self.render_square(f, cols[2], start + 1);
        render_vertical_sep(f, cols[3]);
        self.render_square(f, cols[4], start + 2);
    }

    fn render_square(&self, f: &mut Frame, area: Rect, index: usize) {
        let Some(pos) = Position::from_index(index) else {
            return;
        };
        let (text, mut style) = match self.board.get(pos) {
            Square::Empty => (
                format!("{}", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(player) => (
                self.config.symbol(player).to_string(),
                Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
            ),
        };
        if self.verdict.contains(pos) {
            style = style.bg(Color::Yellow).fg(Color::Black);
        }
        // Vertically center within the 3-line cell.
        let text = format!("\n{}", text);
        let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
