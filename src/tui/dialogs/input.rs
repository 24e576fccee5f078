//! Wizard input dialog
//!
//! Single-field modal that walks the current wizard flow one step at a
//! time. Shows the step title, the text input with a cursor, a validation
//! message when the last submission was rejected, and the submit hint.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the wizard input dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let Some(prompt) = app.wizard.prompt() else {
        return;
    };

    let area = centered_rect_fixed(56, 9, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", prompt.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Validation message
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    render_field(frame, app, prompt.placeholder, chunks[1]);

    if let Some(ref error) = app.input_error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            )),
            chunks[2],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", prompt.submit_label)),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

fn render_field(frame: &mut Frame, app: &App, placeholder: &str, area: ratatui::layout::Rect) {
    let field = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = field.inner(area);
    frame.render_widget(field, area);

    let value = app.input.value();
    let paragraph = if value.is_empty() {
        Paragraph::new(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ))
    };
    frame.render_widget(paragraph, inner);

    // Put the terminal cursor at the input position
    let cursor_x = inner.x + app.input.cursor().min(inner.width.saturating_sub(1) as usize) as u16;
    frame.set_cursor_position(Position::new(cursor_x, inner.y));
}
