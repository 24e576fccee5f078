//! Emergency alert overlay
//!
//! Full-attention modal raised when the device reports an emergency or the
//! demo alert is triggered. Offers the caregiver actions and a dismiss.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the emergency overlay
pub fn render(frame: &mut Frame, app: &mut App, message: &str) {
    let area = centered_rect_fixed(54, 10, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" EMERGENCY ")
        .title_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let contact = &app.store.current().emergency_contact;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Emergency contact: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} ({})", contact.name, contact.phone),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[c]", Style::default().fg(Color::Green)),
            Span::raw(" Call contact  "),
            Span::styled("[d]", Style::default().fg(Color::Yellow)),
            Span::raw(" Dispatch help  "),
            Span::styled("[Esc]", Style::default().fg(Color::Gray)),
            Span::raw(" Dismiss"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
