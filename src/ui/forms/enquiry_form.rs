//! Enquiry form rendering: the entry form and the success view

use super::field_renderer::{draw_field, draw_help_text};
use crate::enquiry::WorkflowStatus;
use crate::platform::{COPY_LINK_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{EnquiryForm, FormVariant, SuccessAction};
use crate::ui::components::{centered_rect, render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use chrono::Local;
use std::time::Instant;

const FIELD_HEIGHT: u16 = 3;

/// Admission dialog size, before clamping to the terminal
const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 30;

/// Draw a form (or its success view) inside `area`
pub fn draw_form(frame: &mut Frame, area: Rect, form: &EnquiryForm, now: Instant) {
    let block = Block::default()
        .title(format!(" {} ", form.variant.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if form.status().shows_form() {
        draw_entry(frame, inner, form, now);
    } else {
        draw_success(frame, inner, form);
    }
}

/// Where the admission dialog sits on a screen of `area`
pub fn enquiry_modal_area(area: Rect) -> Rect {
    centered_rect(area, MODAL_WIDTH, MODAL_HEIGHT)
}

/// Draw the admission dialog over whatever is behind it
pub fn draw_enquiry_modal(frame: &mut Frame, form: &EnquiryForm, now: Instant) {
    let area = enquiry_modal_area(frame.area());
    frame.render_widget(Clear, area);
    draw_form(frame, area, form, now);
}

fn draw_entry(frame: &mut Frame, area: Rect, form: &EnquiryForm, now: Instant) {
    let fields = form.fields();
    let is_error = form.status() == WorkflowStatus::Error;

    let mut constraints = vec![Constraint::Length(1)]; // Subtitle
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    if is_error {
        constraints.push(Constraint::Length(1)); // Error banner
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Progress sweep
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(area);

    frame.render_widget(
        Paragraph::new(form.variant.subtitle()).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    for (idx, field) in fields.iter().enumerate() {
        let is_active = form.active_field_index == idx;
        draw_field(frame, chunks[idx + 1], form, field, is_active);
    }

    let mut next = fields.len() + 1;
    if is_error {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled("✖ ", Style::default().fg(Color::Red)),
            Span::styled(
                form.variant.error_banner(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(banner, chunks[next]);
        next += 1;
    }

    let submitting = form.workflow.is_submitting();
    render_action_button(
        frame,
        chunks[next],
        form.variant.submit_label(form.status()),
        form.is_submit_row_active(),
        !submitting,
        Some(Color::Green),
    );

    if let Some(sweep) = form.submitting_sweep(now) {
        let sweep_area = chunks[next + 1];
        frame.render_widget(Paragraph::new(sweep_line(sweep_area.width, sweep)), sweep_area);
    }

    let help_area = chunks[chunks.len() - 1];
    draw_help_text(
        frame,
        help_area,
        &[
            ("Tab", "next"),
            ("←/→", "choose"),
            (SUBMIT_SHORTCUT, "submit"),
            if form.variant == FormVariant::Modal {
                ("Esc", "close")
            } else {
                ("e", "quick enquiry")
            },
        ],
    );
}

/// A short bar travelling across `width` columns, at `position` (0.0-1.0)
fn sweep_line(width: u16, position: f32) -> Line<'static> {
    const BAR: usize = 6;
    let width = width as usize;
    if width <= BAR {
        return Line::from("━".repeat(width));
    }
    let offset = ((width - BAR) as f32 * position.clamp(0.0, 1.0)).round() as usize;
    Line::from(vec![
        Span::raw(" ".repeat(offset)),
        Span::styled("━".repeat(BAR), Style::default().fg(Color::Green)),
    ])
}

fn draw_success(frame: &mut Frame, area: Rect, form: &EnquiryForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),             // Check mark
            Constraint::Length(2),             // Title
            Constraint::Length(5),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Confirm
            Constraint::Length(BUTTON_HEIGHT), // Copy link
            Constraint::Length(BUTTON_HEIGHT), // Submit another / Close
            Constraint::Min(0),
            Constraint::Length(1), // Help text
        ])
        .horizontal_margin(2)
        .split(area);

    frame.render_widget(
        Paragraph::new("✔")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(form.variant.success_title())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[2],
    );
    let mut message = vec![Line::from(form.variant.success_message())];
    if let Some(snapshot) = form.workflow.snapshot() {
        let received = snapshot.submitted_at().with_timezone(&Local);
        message.push(Line::from(Span::styled(
            format!("Received at {}", received.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray)),
        chunks[3],
    );

    let selected = form.selected_success_action();
    let accents = [Some(Color::Green), Some(Color::Blue), Some(Color::Gray)];
    for (idx, (action, accent)) in SuccessAction::ALL.into_iter().zip(accents).enumerate() {
        render_action_button(
            frame,
            chunks[4 + idx],
            form.variant.action_label(action),
            selected == action,
            true,
            accent,
        );
    }

    draw_help_text(
        frame,
        chunks[8],
        &[("Tab", "next"), ("Enter", "select"), (COPY_LINK_SHORTCUT, "copy link")],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_sweep_line_starts_left() {
        let line = text(&sweep_line(20, 0.0));
        assert!(line.starts_with("━"));
        assert_eq!(line.chars().count(), 6);
    }

    #[test]
    fn test_sweep_line_ends_right() {
        let line = text(&sweep_line(20, 1.0));
        assert_eq!(line.chars().count(), 20);
        assert!(line.ends_with("━━━━━━"));
    }

    #[test]
    fn test_sweep_line_narrow_area() {
        assert_eq!(text(&sweep_line(4, 0.5)), "━━━━");
    }
}
