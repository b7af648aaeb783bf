//! Restaurant dashboard rendering

use crate::app::App;
use crate::state::SurplusStatus;
use crate::ui::widgets::{render_scrollable_list, render_stat_cards};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn status_color(status: SurplusStatus) -> Color {
    match status {
        SurplusStatus::Available => Color::Green,
        SurplusStatus::Claimed => Color::Yellow,
        SurplusStatus::PickedUp => Color::DarkGray,
    }
}

/// Draw the restaurant dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // stat cards
            Constraint::Length(1), // call to action
            Constraint::Min(0),    // lists
        ])
        .margin(1)
        .split(area);

    render_stat_cards(frame, chunks[0], &app.state.restaurant_stats);

    let cta = Paragraph::new(Line::from(vec![
        Span::styled("u", Style::default().fg(Color::Cyan)),
        Span::raw(": upload surplus food — quickly share excess food before it goes to waste"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(cta, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    draw_surplus(frame, columns[0], app);
    draw_activity(frame, columns[1], app);
}

fn draw_surplus(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .surplus
        .iter()
        .map(|item| {
            let expiry_style = if item.is_urgent() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let warn = if item.is_urgent() { "⚠ " } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", item.status.label()),
                    Style::default().fg(status_color(item.status)),
                ),
                Span::raw(format!("{} — {} ", item.item, item.quantity)),
                Span::styled(format!("{}{}", warn, item.expires_label()), expiry_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Current Surplus ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    render_scrollable_list(frame, area, list, app.state.selected_index);
}

fn draw_activity(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .state
        .activity
        .iter()
        .flat_map(|entry| {
            vec![
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Green)),
                    Span::raw(entry.action.clone()),
                ]),
                Line::from(Span::styled(
                    format!("  {} — {}", entry.details, entry.time_ago),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        })
        .collect();

    let feed = Paragraph::new(lines).block(
        Block::default()
            .title(" Recent Activity ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(feed, area);
}
