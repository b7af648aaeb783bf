//! Catch-all page for unknown routes

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the not-found page
pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::styled("404", Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Oops! Page not found"),
        Line::from(""),
        Line::styled(
            "Enter: return to home",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered()
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(body, area);
}
