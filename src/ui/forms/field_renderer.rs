//! Field rendering utilities for forms

use crate::enquiry::EnquiryField;
use crate::state::{EnquiryForm, FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one field of `form`, reading its current value from the record
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &EnquiryForm,
    field: &FormField,
    is_active: bool,
) {
    let is_enabled = form.is_field_enabled(field.field);
    let value = match field.kind {
        FieldKind::Choice => form.display_value(field.field),
        FieldKind::Text | FieldKind::Digits { .. } => form.workflow.record().value(field.field),
    };

    let border_style = match (is_enabled, is_active) {
        (false, _) => Style::default().fg(Color::Black),
        (true, true) => Style::default().fg(Color::Cyan),
        (true, false) => Style::default().fg(Color::DarkGray),
    };

    let mut spans = Vec::new();
    if field.is_choice() && is_enabled {
        spans.push(Span::styled("◀ ", arrow_style(is_active)));
    }

    if value.is_empty() {
        let placeholder = match field.field {
            EnquiryField::Board if is_enabled => board_choices(form),
            EnquiryField::Board => "Select class first".to_string(),
            _ => field.placeholder.to_string(),
        };
        spans.push(Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(value, style));
    }

    if field.is_choice() {
        if is_enabled {
            spans.push(Span::styled(" ▶", arrow_style(is_active)));
        }
    } else if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    if let FieldKind::Digits { max_len } = field.kind {
        if is_active {
            spans.push(Span::styled(
                format!("  {}/{max_len}", value.len()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Options the board selector will cycle through, e.g. `SSC / CBSE`
fn board_choices(form: &EnquiryForm) -> String {
    form.workflow
        .record()
        .board_options()
        .iter()
        .map(|board| form.variant.board_text(*board))
        .collect::<Vec<_>>()
        .join(" / ")
}

fn arrow_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a one-line key hint, e.g. `Tab: next field  Ctrl+S: submit`
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
