//! Surplus upload form rendering (restaurant)

use super::field_renderer::draw_field;
use crate::app::App;
use crate::catalog::{EXPIRY_WINDOWS, SURPLUS_CATEGORIES};
use crate::state::FormState;
use crate::ui::components::{render_button, render_choice_grid, ChoiceItem, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw the surplus upload form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Surplus(form) = &app.state.form else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // heading
            Constraint::Length(8),             // category grid (2 rows)
            Constraint::Length(3),             // quantity
            Constraint::Length(5),             // expiry row
            Constraint::Length(3),             // description
            Constraint::Length(3),             // pickup instructions
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT), // submit
        ])
        .margin(1)
        .split(area);

    let heading =
        Paragraph::new("Upload Surplus Food — share excess food before it goes to waste")
            .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(heading, chunks[0]);

    let categories: Vec<ChoiceItem> = SURPLUS_CATEGORIES
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
        "What type of food?",
        &categories,
        form.category.selected(),
        4,
        form.active_field_index == 0,
    );

    draw_field(frame, chunks[2], &form.quantity, form.active_field_index == 1);

    let windows: Vec<ChoiceItem> = EXPIRY_WINDOWS
        .iter()
        .map(|w| ChoiceItem {
            id: w.id,
            label: w.label,
            icon: if w.urgent { "⏰" } else { "🕐" },
        })
        .collect();
    render_choice_grid(
        frame,
        chunks[3],
        "Best consumed within",
        &windows,
        form.expires_in.selected(),
        6,
        form.active_field_index == 2,
    );

    draw_field(
        frame,
        chunks[4],
        &form.description,
        form.active_field_index == 3,
    );
    draw_field(
        frame,
        chunks[5],
        &form.pickup_instructions,
        form.active_field_index == 4,
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[7]);
    let enabled = form.can_submit();
    render_button(
        frame,
        button_area[1],
        "Enter: Upload & Notify NGOs",
        enabled,
        enabled,
    );
}
