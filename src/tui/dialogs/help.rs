//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Build help text based on current view
    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1/2/3", "Switch to Home / Timeline / Profile"),
        key_line("Tab", "Next view"),
        key_line("j/k", "Move selection up/down"),
        Line::from(""),
    ];

    // View-specific help
    match app.active_view {
        ActiveView::Home => {
            lines.push(Line::from(vec![Span::styled(
                "Home View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("Space", "Cycle demo patient state"));
            lines.push(key_line("E", "Trigger demo emergency alert"));
        }
        ActiveView::Timeline => {
            lines.push(Line::from(vec![Span::styled(
                "Timeline View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Scroll through today's events"));
            lines.push(key_line("g", "Go to most recent"));
            lines.push(key_line("G", "Go to oldest"));
        }
        ActiveView::Profile => {
            lines.push(Line::from(vec![Span::styled(
                "Profile View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("h/l", "Switch between sections"));
            lines.push(key_line("a", "Add to the focused section"));
            lines.push(key_line("e/Enter", "Edit the selected row"));
            lines.push(key_line("d", "Remove the selected record"));
            lines.push(key_line("p", "Add a photo to the selected face"));
            lines.push(key_line("s", "Sync the focused section"));
            lines.push(key_line("S", "Sync everything"));
        }
    }

    lines
}

/// Format a key binding line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Cyan)),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}
