//! Tab bar view
//!
//! Top strip with the three view tabs and the paired device badge.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::settings::DEVICE_MODEL;
use crate::tui::app::{ActiveView, App};

/// Render the tab bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " CareLink ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, view) in ActiveView::TABS.iter().enumerate() {
        spans.push(Span::raw(" "));
        let label = format!(" {} {} ", i + 1, view.label());
        if *view == app.active_view {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
        }
    }

    let device = format!(" {} · {} ", DEVICE_MODEL, app.settings.device_id);
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize)
        .saturating_sub(used + device.chars().count() + 2)
        .max(1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(device, Style::default().fg(Color::DarkGray)));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
