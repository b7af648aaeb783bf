//! Donation wizard rendering (three steps)

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{DonationForm, DonationStep, FormState};
use crate::ui::components::{render_button, render_choice_grid, ChoiceItem, BUTTON_HEIGHT};
use crate::ui::widgets::render_percent_gauge;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const ITEM_TYPES: &[ChoiceItem] = &[
    ChoiceItem { id: "food", label: "Food Items", icon: "🍎" },
    ChoiceItem { id: "essentials", label: "Essential Goods", icon: "🛍️" },
];

const DELIVERY_METHODS: &[ChoiceItem] = &[
    ChoiceItem { id: "pickup", label: "Schedule Pickup", icon: "🚚" },
    ChoiceItem { id: "dropoff", label: "Drop Off", icon: "🏢" },
];

/// Draw the donation wizard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Donation(form) = &app.state.form else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // progress header
            Constraint::Length(1),             // progress gauge
            Constraint::Length(1),             // spacer
            Constraint::Min(10),               // step content
            Constraint::Length(BUTTON_HEIGHT), // buttons
        ])
        .margin(1)
        .split(area);

    draw_progress(frame, chunks[0], chunks[1], form);

    match form.step {
        DonationStep::ItemSelect => draw_item_select(frame, chunks[3], form),
        DonationStep::Details => draw_details(frame, chunks[3], form),
        DonationStep::Delivery => draw_delivery(frame, chunks[3], form),
    }

    draw_buttons(frame, chunks[4], form);
}

fn draw_progress(frame: &mut Frame, header: Rect, gauge: Rect, form: &DonationForm) {
    let position = form.step.position();
    let percent = (position * 100 / DonationStep::TOTAL) as u16;
    let line = Line::from(vec![
        Span::styled(
            format!("Step {position} of {}", DonationStep::TOTAL),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(form.step.title(), Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(format!("{percent}%"), Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(line), header);
    render_percent_gauge(frame, gauge, percent, Color::Green);
}

fn draw_item_select(frame: &mut Frame, area: Rect, form: &DonationForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // donation type (1 row of cards)
            Constraint::Length(8), // category (2 rows of cards)
            Constraint::Min(0),
        ])
        .split(area);

    render_choice_grid(
        frame,
        chunks[0],
        "Donation Type",
        ITEM_TYPES,
        form.item_type.selected(),
        2,
        form.active_field_index == 0,
    );

    let categories: Vec<ChoiceItem> = form
        .categories()
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
        "Select Category",
        &categories,
        form.category.selected(),
        3,
        form.active_field_index == 1,
    );
}

fn draw_details(frame: &mut Frame, area: Rect, form: &DonationForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // quantity
            Constraint::Length(3), // description
            Constraint::Min(0),
        ])
        .split(area);

    draw_field(frame, chunks[0], &form.quantity, form.active_field_index == 0);
    draw_field(
        frame,
        chunks[1],
        &form.description,
        form.active_field_index == 1,
    );
}

fn draw_delivery(frame: &mut Frame, area: Rect, form: &DonationForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // delivery method
            Constraint::Length(3), // address
            Constraint::Length(3), // date + time
            Constraint::Min(0),
        ])
        .split(area);

    render_choice_grid(
        frame,
        chunks[0],
        "Delivery Method",
        DELIVERY_METHODS,
        form.delivery_method.selected(),
        2,
        form.active_field_index == 0,
    );

    draw_field(frame, chunks[1], &form.address, form.active_field_index == 1);

    let when = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_field(
        frame,
        when[0],
        &form.preferred_date,
        form.active_field_index == 2,
    );
    draw_field(
        frame,
        when[1],
        &form.preferred_time,
        form.active_field_index == 3,
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &DonationForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(22),
        ])
        .split(area);

    if form.step.prev().is_some() {
        render_button(frame, chunks[0], "Esc: Back", false, true);
    }

    let (label, enabled) = match form.step {
        DonationStep::Delivery => ("Create Donation", form.can_submit()),
        _ => ("Continue", form.step_complete()),
    };
    render_button(frame, chunks[2], &format!("Enter: {label}"), enabled, enabled);
}
