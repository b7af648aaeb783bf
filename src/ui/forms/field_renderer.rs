//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a text form field using FormField from the state layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = field.as_text();
    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() {
        Paragraph::new(Line::from(vec![
            Span::styled(
                field.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    } else {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
