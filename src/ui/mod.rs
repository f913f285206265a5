//! UI module for rendering the TUI

mod components;
mod contact_panel;
mod forms;
mod layout;

pub use forms::enquiry_modal_area;
pub use layout::chat_button_area;

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let now = Instant::now();

    let (header_area, main_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Enquiry => draw_enquiry_page(frame, main_area, app, now),
        View::Contact => contact_panel::draw_page(frame, main_area, app),
    }

    layout::draw_chat_button(frame);
    layout::draw_status_bar(frame, app);

    // Overlays, topmost last
    if app.state.modal_open {
        forms::draw_enquiry_modal(frame, &app.state.modal, now);
    }
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, app.state.errors.len() - 1);
    }
}

/// Contact panel on the left, enquiry section on the right
fn draw_enquiry_page(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    contact_panel::draw_summary(frame, chunks[0]);
    forms::draw_form(frame, chunks[1], &app.state.section, now);
}
