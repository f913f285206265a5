//! Academy contact details: the panel beside the enquiry form and the Contact page

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const HEADING: &str = "Take the First Step to Excellence";
const INTRO: &str = "Fill out our admission enquiry form and our academic counselor \
                     will help you choose the right path for your academic future.";
const HIGHLIGHTS: [&str; 3] = ["Free Counseling Session", "Scholarship Info", "Demo Lectures"];
const CALL_NUMBERS: [&str; 3] = ["9011141618", "9022781871", "7666076709"];
const EMAIL: &str = "enquiry.eklavyaa@gmail.com";

fn section_label(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Phone and email lines shared by both layouts
fn contact_lines() -> Vec<Line<'static>> {
    let mut lines = vec![section_label("CALL US NOW")];
    lines.extend(CALL_NUMBERS.iter().map(|num| {
        Line::from(vec![
            Span::styled("✆ ", Style::default().fg(Color::Yellow)),
            Span::raw(*num),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(section_label("EMAIL US"));
    lines.push(Line::from(vec![
        Span::styled("✉ ", Style::default().fg(Color::Yellow)),
        Span::raw(EMAIL),
    ]));
    lines
}

/// Draw the panel shown next to the enquiry section
pub fn draw_summary(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(INTRO, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    lines.extend(HIGHLIGHTS.iter().map(|item| {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Yellow)),
            Span::raw(*item),
        ])
    }));
    lines.push(Line::from(""));
    lines.extend(contact_lines());

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(panel, area);
}

/// Draw the Contact page
pub fn draw_page(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // Phone and email
            Constraint::Min(0),     // WhatsApp
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(contact_lines()), chunks[0]);

    let whatsapp = vec![
        section_label("WHATSAPP"),
        Line::from(format!("+{}", app.links().number())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("w", Style::default().fg(Color::Cyan)),
            Span::raw(" opens a chat with a counselor. "),
            Span::styled("e", Style::default().fg(Color::Cyan)),
            Span::raw(" starts an admission enquiry."),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(whatsapp).wrap(Wrap { trim: true }),
        chunks[1],
    );
}
