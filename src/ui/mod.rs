//! UI module for rendering the TUI

mod auth;
mod components;
mod donor;
mod forms;
mod landing;
mod layout;
mod ngo;
mod not_found;
mod restaurant;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, content_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    match &app.state.current_view {
        View::Landing => landing::draw(frame, content_area, app),
        View::Auth => auth::draw(frame, content_area, app),
        View::DonorDashboard => donor::draw(frame, content_area, app),
        View::NewDonation => forms::draw_donation_wizard(frame, content_area, app),
        View::NgoDashboard => ngo::draw(frame, content_area, app),
        View::NewNeed => forms::draw_need_form(frame, content_area, app),
        View::RestaurantDashboard => restaurant::draw(frame, content_area, app),
        View::UploadSurplus => forms::draw_surplus_form(frame, content_area, app),
        View::NotFound => not_found::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}
