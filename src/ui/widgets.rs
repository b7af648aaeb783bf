//! Reusable UI widget helpers

use crate::state::Stat;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListState, Paragraph},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// This is the preferred way to render lists in the app. It wraps
/// `render_stateful_widget` with a `ListState`, ensuring the list scrolls to
/// keep the selected item in view.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render a thin percent gauge (wizard progress, need fulfillment)
pub fn render_percent_gauge(frame: &mut Frame, area: Rect, percent: u16, color: Color) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .percent(percent.min(100))
        .label("");
    frame.render_widget(gauge, area);
}

/// Render the row of stat cards shown at the top of every dashboard
pub fn render_stat_cards(frame: &mut Frame, area: Rect, stats: &[Stat]) {
    if stats.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, stats.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, cell) in stats.iter().zip(cells.iter()) {
        let card = Paragraph::new(vec![
            Line::styled(
                stat.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(stat.label.clone(), Style::default().fg(Color::DarkGray)),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(card, *cell);
    }
}
