//! Auth flow rendering (role selection and credentials form)

use crate::app::App;
use crate::state::{AuthMode, AuthStep, Form, FormState, Role};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::forms::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ROLE_ICONS: &[&str] = &["💚", "👥", "🏢"];

/// Draw the auth flow
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Auth(form) = &app.state.form else {
        return;
    };

    match form.step {
        AuthStep::RoleSelect => draw_role_select(frame, area, app),
        AuthStep::Form => draw_credentials(frame, area, app),
    }
}

fn draw_role_select(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Auth(form) = &app.state.form else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Length(1),
            Constraint::Length(Role::all().len() as u16 * BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1), // footer
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "How would you like to help?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Choose your role to get started",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(heading, chunks[0]);

    let card_constraints: Vec<Constraint> = Role::all()
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(card_constraints)
        .split(chunks[2]);

    for (idx, role) in Role::all().iter().enumerate() {
        let is_cursor = form.role_cursor == idx;
        let border = if is_cursor { Color::Cyan } else { Color::DarkGray };
        let card = Paragraph::new(Line::from(vec![
            Span::raw(format!(" {} ", ROLE_ICONS[idx])),
            Span::styled(
                role.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", role.description()),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(card, cards[idx]);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Already have an account? ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(": sign in", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[4]);
}

fn draw_credentials(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Auth(form) = &app.state.form else {
        return;
    };

    let field_count = form.field_count();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                              // heading
            Constraint::Length(1),
            Constraint::Length(field_count as u16 * 3),         // fields
            Constraint::Length(BUTTON_HEIGHT),                  // submit
            Constraint::Length(1),                              // footer
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let title = match form.mode {
        AuthMode::Login => "Sign in".to_string(),
        AuthMode::Signup => format!("Sign up as {}", form.role.title()),
    };
    let subtitle = match form.mode {
        AuthMode::Login => "Enter your credentials to access your account",
        AuthMode::Signup => "Create your account to start making a difference",
    };
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(heading, chunks[0]);

    let field_constraints: Vec<Constraint> =
        (0..field_count).map(|_| Constraint::Length(3)).collect();
    let field_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(field_constraints)
        .split(chunks[2]);

    for idx in 0..field_count {
        if let Some(field) = form.get_field(idx) {
            draw_field(frame, field_areas[idx], field, form.active_field_index == idx);
        }
    }

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[3]);
    let (label, enabled) = match form.mode {
        AuthMode::Login => ("Enter: Sign In", form.can_submit()),
        AuthMode::Signup => ("Enter: Create Account", form.can_submit()),
    };
    render_button(frame, button_area[1], label, enabled, enabled);

    let footer_text = match form.mode {
        AuthMode::Login => "^T: sign up instead",
        AuthMode::Signup => "Esc: change role   ^T: sign in instead",
    };
    let footer = Paragraph::new(footer_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[4]);
}
