//! Donor dashboard rendering

use crate::app::App;
use crate::state::{DonationStatus, DonorFocus};
use crate::ui::widgets::{render_scrollable_list, render_stat_cards};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn status_color(status: DonationStatus) -> Color {
    match status {
        DonationStatus::Delivered => Color::Green,
        DonationStatus::InTransit => Color::Yellow,
        DonationStatus::Pending => Color::DarkGray,
    }
}

/// Draw the donor dashboard
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

    render_stat_cards(frame, chunks[0], &app.state.donor_stats);

    let cta = Paragraph::new(Line::from(vec![
        Span::styled("n", Style::default().fg(Color::Cyan)),
        Span::raw(": create a new donation — share food or essentials with those in need"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(cta, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    draw_recent_donations(frame, columns[0], app);
    draw_ngo_panel(frame, columns[1], app);
}

fn draw_recent_donations(frame: &mut Frame, area: Rect, app: &App) {
    let focused = matches!(app.state.donor_focus, DonorFocus::Donations);
    let items: Vec<ListItem> = app
        .state
        .donations
        .iter()
        .map(|donation| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", donation.status.label()),
                    Style::default().fg(status_color(donation.status)),
                ),
                Span::raw(format!(
                    "{} — {} → {} ",
                    donation.item, donation.quantity, donation.ngo
                )),
                Span::styled(donation.date_label(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Recent Donations ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused {
                    Color::Cyan
                } else {
                    Color::DarkGray
                })),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    render_scrollable_list(frame, area, list, app.state.selected_index);
}

fn draw_ngo_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focused = matches!(app.state.donor_focus, DonorFocus::NgoSearch);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let cursor = if focused { "▌" } else { "" };
    let query = if app.state.ngo_search.is_empty() && !focused {
        Line::from(Span::styled(
            "Search by name or need...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(app.state.ngo_search.clone()),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };
    let search = Paragraph::new(query).block(
        Block::default()
            .title(" Find NGOs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                Color::Cyan
            } else {
                Color::DarkGray
            })),
    );
    frame.render_widget(search, chunks[0]);

    let lines: Vec<Line> = app
        .state
        .filtered_ngos()
        .iter()
        .flat_map(|ngo| {
            vec![
                Line::from(vec![
                    Span::raw(ngo.name.clone()),
                    Span::styled(
                        format!("  {}", ngo.distance_label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  needs: {}", ngo.needs.join(", ")),
                    Style::default().fg(Color::Green),
                )),
            ]
        })
        .collect();

    let ngos = Paragraph::new(lines).block(
        Block::default()
            .title(" Nearby NGOs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(ngos, chunks[1]);
}
