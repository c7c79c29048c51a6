//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod people;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::PersonEdit => forms::draw_person_edit(frame, main_area, app),
        View::Listing { route } => people::draw_listing(frame, main_area, app, route),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Alerts block everything else, so they go on top
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
