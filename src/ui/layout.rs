//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{Role, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the frame into header, content, and the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(0),    // content
            Constraint::Length(1), // status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header bar with brand and session identity
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let identity = match app.state.signed_in_role {
        Some(Role::Donor) => "Donor",
        Some(Role::Ngo) => "Hope Foundation",
        Some(Role::Restaurant) => "Sunrise Cafe",
        None => "Guest",
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " 🌿 GiveGood ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— {}", view_title(&app.state.current_view)),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, area);

    let identity_text = format!("{identity} ");
    let identity_area = Rect {
        x: area.width.saturating_sub(identity_text.len() as u16),
        y: area.y,
        width: identity_text.len() as u16,
        height: 1,
    };
    let identity_widget =
        Paragraph::new(identity_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(identity_widget, identity_area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    if let Some(input) = &app.state.goto_input {
        // The goto prompt replaces the hints while open
        spans.push(Span::styled(" goto: ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(input.clone()));
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(
            format!(" {}", get_view_hints(&app.state.current_view)),
            Style::default().fg(Color::Gray),
        ));

        if let Some(notice) = &app.notice {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                notice.title.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", notice.detail),
                Style::default().fg(Color::Green),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn view_title(view: &View) -> &'static str {
    match view {
        View::Landing => "Making kindness simple",
        View::Auth => "Sign in",
        View::DonorDashboard => "Donor Dashboard",
        View::NewDonation => "New Donation",
        View::NgoDashboard => "NGO Dashboard",
        View::NewNeed => "Post a New Need",
        View::RestaurantDashboard => "Restaurant Dashboard",
        View::UploadSurplus => "Upload Surplus Food",
        View::NotFound => "Page not found",
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Landing => "j/k:choose role  Enter:get started  s:sign in  ::goto  q:quit".to_string(),
        View::Auth => "Tab:next  Enter:submit  Esc:back".to_string(),
        View::DonorDashboard => "j/k:nav  Tab:/:search  n:new donation  o:sign out".to_string(),
        View::NewDonation => "Tab:next field  ←/→:choose  Enter:continue  Esc:back".to_string(),
        View::NgoDashboard => {
            "j/k:nav  Tab:switch list  n:new need  a:accept  r:received  o:sign out".to_string()
        }
        View::NewNeed => "Tab:next field  ←/→:choose  Enter:post  Esc:cancel".to_string(),
        View::RestaurantDashboard => "j/k:nav  u:upload surplus  o:sign out".to_string(),
        View::UploadSurplus => "Tab:next field  ←/→:choose  Enter:upload  Esc:cancel".to_string(),
        View::NotFound => "Enter:home".to_string(),
    }
}
