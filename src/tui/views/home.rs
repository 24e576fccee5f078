//! Home view
//!
//! The ambient status screen: greeting, the current patient state with its
//! summary and detail, and the quick stats row.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::HomeLayout;

use super::state_color;

/// Render the home view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = HomeLayout::new(area);

    render_header(frame, layout.header);
    render_state_panel(frame, app, layout.state_panel);
    render_quick_stats(frame, app, layout.stats);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let now = Local::now();
    let greeting = match now.format("%H").to_string().parse::<u32>().unwrap_or(12) {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    };

    let lines = vec![
        Line::from(Span::styled(
            greeting,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            now.format("%A, %B %-d").to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_state_panel(frame: &mut Frame, app: &App, area: Rect) {
    let context = &app.current_context;
    let accent = state_color(context.state);

    let block = Block::default()
        .title(format!(" {} ", context.patient_name))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Badge row
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Summary
            Constraint::Min(1),    // Detail
            Constraint::Length(1), // Updated
        ])
        .split(inner);

    let badge = Line::from(vec![
        Span::styled(
            format!(" ● {} ", context.state.label()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· Live", Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(badge), chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            context.summary.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            context.detail.clone(),
            Style::default().fg(Color::Gray),
        ))
        .wrap(Wrap { trim: true }),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Updated {}", context.last_updated),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[4],
    );
}

fn render_quick_stats(frame: &mut Frame, app: &App, area: Rect) {
    if app.quick_stats.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = app
        .quick_stats
        .iter()
        .map(|_| Constraint::Ratio(1, app.quick_stats.len() as u32))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, chunk) in app.quick_stats.iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = vec![
            Line::from(Span::styled(
                stat.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                stat.label.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}
