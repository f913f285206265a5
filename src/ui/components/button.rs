//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a centered action button; `accent` colours the label when not selected
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Option<Color>,
) {
    let color = match (is_enabled, is_selected) {
        (false, _) => Color::DarkGray,
        (true, true) => Color::Cyan,
        (true, false) => accent.unwrap_or(Color::White),
    };

    let mut text_style = Style::default().fg(color);
    if is_selected && is_enabled {
        text_style = text_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label = if is_selected {
        format!("▸ {label} ◂")
    } else {
        label.to_string()
    };
    let paragraph = Paragraph::new(label)
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(paragraph, area);
}
