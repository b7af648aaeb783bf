//! Grid of selectable option cards
//!
//! Replaces the card grids of the web frontend: one bordered cell per option,
//! the selected option highlighted, the whole grid framed by the owning
//! field's label.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One option card in a choice grid
pub struct ChoiceItem<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub icon: &'a str,
}

/// Render a labeled grid of option cards, `columns` per row.
///
/// `is_active` marks the grid as the focused form field; the selected card is
/// highlighted independently of focus so a finished step still reads back.
pub fn render_choice_grid(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    items: &[ChoiceItem],
    selected: Option<&str>,
    columns: usize,
    is_active: bool,
) {
    let border_color = if is_active { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if items.is_empty() {
        let hint = Paragraph::new("Select a donation type first")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    let columns = columns.max(1);
    let rows = items.len().div_ceil(columns);
    let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(3)).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let col_constraints: Vec<Constraint> = (0..columns)
            .map(|_| Constraint::Ratio(1, columns as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);

        for (col_idx, cell) in cells.iter().enumerate() {
            let Some(item) = items.get(row_idx * columns + col_idx) else {
                continue;
            };
            let is_selected = selected == Some(item.id);
            let style = if is_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if is_selected { "●" } else { " " };
            let card = Paragraph::new(Line::from(format!(
                "{marker} {} {}",
                item.icon, item.label
            )))
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if is_selected {
                        Color::Green
                    } else {
                        Color::DarkGray
                    })),
            );
            frame.render_widget(card, *cell);
        }
    }
}
