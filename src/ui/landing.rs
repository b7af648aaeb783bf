//! Landing page rendering

use crate::app::App;
use crate::state::Role;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the landing page: hero copy plus the three role cards
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // hero
            Constraint::Length(1),
            Constraint::Length(1), // section label
            Constraint::Length(Role::all().len() as u16 * 3),
            Constraint::Length(1),
            Constraint::Min(0), // how it works
        ])
        .margin(1)
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "Give what you can.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Get what you need.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A simple platform that quietly connects people who want to give",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "with organizations that truly need — one donation at a time.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(hero, chunks[0]);

    let label = Paragraph::new("Get started as").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(label, chunks[2]);

    let card_constraints: Vec<Constraint> = Role::all()
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(card_constraints)
        .split(chunks[3]);

    for (idx, role) in Role::all().iter().enumerate() {
        let is_selected = app.state.selected_index == idx;
        let border = if is_selected { Color::Cyan } else { Color::DarkGray };
        let card = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", role.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("— {}", role.description()),
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

    draw_how_it_works(frame, chunks[5]);
}

fn draw_how_it_works(frame: &mut Frame, area: Rect) {
    let steps = Paragraph::new(vec![
        Line::from(Span::styled(
            "How it works",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  1. Sign up — choose your role and create an account in seconds"),
        Line::from("  2. Post or browse — share what you have or what you need"),
        Line::from("  3. Get matched — we connect donations with nearby needs"),
    ])
    .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(steps, area);
}
