//! Timeline view
//!
//! Scrollable list of the day's context entries with a summary bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

use super::state_color;

/// Render the timeline view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary bar
            Constraint::Min(5),    // Entries
            Constraint::Length(4), // Selected entry detail
        ])
        .split(area);

    render_summary_bar(frame, app, chunks[0]);
    render_entries(frame, app, chunks[1]);
    render_detail(frame, app, chunks[2]);
}

fn render_summary_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Today's Timeline ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.timeline.len()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("events", Style::default().fg(Color::DarkGray)),
        Span::raw("  │  "),
        Span::styled("8h 32m", Style::default().fg(Color::White)),
        Span::styled(" tracked", Style::default().fg(Color::DarkGray)),
        Span::raw("  │  "),
        Span::styled("Normal", Style::default().fg(Color::Green)),
        Span::styled(" overall", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_entries(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = app
        .timeline
        .iter()
        .map(|entry| {
            let accent = state_color(entry.state);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>8}  ", entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("● {:<9}", entry.state.label()), Style::default().fg(accent)),
                Span::styled(entry.summary.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_entry_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(entry) = app.timeline.get(app.selected_entry_index) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", entry.summary))
        .title_style(Style::default().fg(state_color(entry.state)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Span::styled(
        entry.detail.clone(),
        Style::default().fg(Color::Gray),
    ))
    .block(block)
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
