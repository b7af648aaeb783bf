//! Need posting form rendering (NGO)

use super::field_renderer::draw_field;
use crate::app::App;
use crate::catalog::NEED_CATEGORIES;
use crate::state::{FormState, Urgency};
use crate::ui::components::{render_button, render_choice_grid, ChoiceItem, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw the need posting form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Need(form) = &app.state.form else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // heading
            Constraint::Length(17),            // category grid (5 rows)
            Constraint::Length(3),             // quantity
            Constraint::Length(5),             // urgency
            Constraint::Length(1),             // urgency timeframe
            Constraint::Length(3),             // description
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT), // submit
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new("Post a New Need — let donors know what your organization needs")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(heading, chunks[0]);

    let categories: Vec<ChoiceItem> = NEED_CATEGORIES
        .iter()
        .map(|c| ChoiceItem {
            id: c.id,
            label: c.label,
            icon: c.icon,
        })
        .collect();
    render_choice_grid(
        frame,
        chunks[1],
        "What do you need?",
        &categories,
        form.category.selected(),
        2,
        form.active_field_index == 0,
    );

    draw_field(frame, chunks[2], &form.quantity, form.active_field_index == 1);

    let urgencies: Vec<ChoiceItem> = Urgency::all()
        .iter()
        .map(|u| ChoiceItem {
            id: u.id(),
            label: u.label(),
            icon: "⚠",
        })
        .collect();
    render_choice_grid(
        frame,
        chunks[3],
        "How urgent is this need?",
        &urgencies,
        form.urgency.selected(),
        3,
        form.active_field_index == 2,
    );

    if let Some(urgency) = form.urgency.selected().and_then(Urgency::parse) {
        let timeframe = Paragraph::new(format!("  {}", urgency.timeframe()))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(timeframe, chunks[4]);
    }

    draw_field(
        frame,
        chunks[5],
        &form.description,
        form.active_field_index == 3,
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(chunks[7]);
    let enabled = form.can_submit();
    render_button(
        frame,
        button_area[1],
        "Enter: Post Need",
        enabled,
        enabled,
    );
}
