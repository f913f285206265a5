//! Layout components (header, status bar, floating chat button)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const CHAT_BUTTON_LABEL: &str = "✆ Chat with us (w)";
const CHAT_BUTTON_WIDTH: u16 = 22;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Where the floating chat button sits: bottom right, just above the status bar
pub fn chat_button_area(area: Rect) -> Rect {
    let width = CHAT_BUTTON_WIDTH.min(area.width);
    let height = BUTTON_HEIGHT.min(area.height.saturating_sub(1));
    Rect {
        x: area.right().saturating_sub(width + 1).max(area.x),
        y: area.bottom().saturating_sub(height + 1).max(area.y),
        width,
        height,
    }
}

/// Draw the header with academy name and view tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.links().academy()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];

    for view in View::ALL {
        let style = if app.state.current_view == view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(view.shortcut(), Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(view.title(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the always-visible "Chat with us" shortcut
pub fn draw_chat_button(frame: &mut Frame) {
    let area = chat_button_area(frame.area());
    if area.width < 3 || area.height < 3 {
        return;
    }
    frame.render_widget(Clear, area);
    let button = Paragraph::new(CHAT_BUTTON_LABEL)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(button, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // Context hints
    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: status_area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever has focus
fn get_hints(app: &App) -> &'static str {
    if app.state.has_errors() {
        return "Enter/Esc:dismiss";
    }
    if app.state.modal_open {
        return "Tab:next  Esc:close  ^W:chat";
    }
    match app.state.current_view {
        View::Enquiry if app.state.section.is_typing() => "Tab:next  ^E:quick enquiry  ^W:chat",
        View::Enquiry => "Tab:next  e:quick enquiry  w:chat  q:quit",
        View::Contact => "Enter/w:chat on WhatsApp  e:enquiry  F1:back  q:quit",
    }
}
