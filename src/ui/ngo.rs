//! NGO dashboard rendering

use crate::app::App;
use crate::state::{IncomingStatus, NgoFocus, Urgency};
use crate::ui::widgets::{render_percent_gauge, render_scrollable_list, render_stat_cards};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::High => Color::Red,
        Urgency::Medium => Color::Yellow,
        Urgency::Low => Color::DarkGray,
    }
}

fn status_color(status: IncomingStatus) -> Color {
    match status {
        IncomingStatus::Pending => Color::Yellow,
        IncomingStatus::Accepted => Color::Cyan,
        IncomingStatus::Received => Color::Green,
    }
}

/// Draw the NGO dashboard
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

    render_stat_cards(frame, chunks[0], &app.state.ngo_stats);

    let cta = Paragraph::new(Line::from(vec![
        Span::styled("n", Style::default().fg(Color::Cyan)),
        Span::raw(": post a need   "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": switch list   "),
        Span::styled("a", Style::default().fg(Color::Cyan)),
        Span::raw(": accept   "),
        Span::styled("r", Style::default().fg(Color::Cyan)),
        Span::raw(": mark received"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(cta, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    draw_needs(frame, columns[0], app);
    draw_incoming(frame, columns[1], app);
}

fn draw_needs(frame: &mut Frame, area: Rect, app: &App) {
    let focused = matches!(app.state.ngo_focus, NgoFocus::Needs);
    let block = Block::default()
        .title(" Your Needs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Each need renders as two text rows plus a fulfillment gauge
    let mut y = inner.y;
    for (idx, need) in app.state.needs.iter().enumerate() {
        if y + 3 > inner.y + inner.height {
            break;
        }
        let selected = focused && idx == app.state.selected_index;
        let marker = if selected { "▶ " } else { "  " };
        let header = Paragraph::new(Line::from(vec![
            Span::raw(marker),
            Span::raw(format!("{} — need {} ", need.item, need.quantity)),
            Span::styled(
                format!("[{}]", need.urgency.label()),
                Style::default().fg(urgency_color(need.urgency)),
            ),
        ]));
        frame.render_widget(header, Rect { x: inner.x, y, width: inner.width, height: 1 });

        let detail = Paragraph::new(Line::from(Span::styled(
            format!("  fulfilled {}%", need.fulfilled_pct),
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(detail, Rect { x: inner.x, y: y + 1, width: inner.width, height: 1 });

        let gauge_area = Rect {
            x: inner.x + 2,
            y: y + 2,
            width: inner.width.saturating_sub(4),
            height: 1,
        };
        render_percent_gauge(frame, gauge_area, need.fulfilled_pct as u16, Color::Green);
        y += 4;
    }
}

fn draw_incoming(frame: &mut Frame, area: Rect, app: &App) {
    let focused = matches!(app.state.ngo_focus, NgoFocus::Incoming);
    let items: Vec<ListItem> = app
        .state
        .incoming
        .iter()
        .map(|donation| {
            let action_hint = match donation.status {
                IncomingStatus::Pending => "  a: accept",
                IncomingStatus::Accepted => "  r: mark received",
                IncomingStatus::Received => "",
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", donation.status.label()),
                        Style::default().fg(status_color(donation.status)),
                    ),
                    Span::raw(format!(
                        "{} — {} from {}",
                        donation.item, donation.quantity, donation.donor
                    )),
                ]),
                Line::from(vec![
                    Span::styled(
                        format!("  {}", donation.eta),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(action_hint, Style::default().fg(Color::Cyan)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Incoming Donations ")
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
