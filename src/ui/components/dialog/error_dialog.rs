//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Width that fits the longest validation message on one line
const ERROR_DIALOG_WIDTH: u16 = 56;

/// Render the oldest queued error, centered over everything else
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, pending: usize) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::styled("Enter", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(" dismiss"),
    ];
    if pending > 0 {
        hint.push(Span::styled(
            format!("  ({pending} more)"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Something went wrong",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: ERROR_DIALOG_WIDTH,
        },
    );
}
