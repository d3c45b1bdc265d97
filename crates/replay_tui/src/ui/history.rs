//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use replay_tictactoe::Timeline;

/// Renders one entry per snapshot; the current one is marked, the selected
/// one highlighted.
pub fn render_history(f: &mut Frame, area: Rect, timeline: &Timeline, selected: usize) {
    let items: Vec<ListItem> = timeline
        .entries()
        .into_iter()
        .map(|entry| {
            let marker = if entry.is_current { "● " } else { "  " };
            let style = if entry.is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(entry.label, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}
