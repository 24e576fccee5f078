//! Status bar view
//!
//! Shows the device link, transient status messages, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Device: ", Style::default().fg(Color::White)),
        Span::styled(
            app.link.device_id().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ];

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = match app.active_view {
        ActiveView::Home => " space:Demo  E:Alert  q:Quit  ?:Help ",
        ActiveView::Timeline => " j/k:Scroll  q:Quit  ?:Help ",
        ActiveView::Profile => " a:Add  e:Edit  d:Remove  s:Sync  q:Quit  ?:Help ",
    };

    // Pad the gap between the left spans and the hints. Width is counted
    // in chars, not bytes: status messages echo caregiver-typed names.
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::event::EmergencyHandle;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::mpsc;

    fn render_row(app: &mut App, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_hints_right_aligned_with_multibyte_status() {
        let (sender, _receiver) = mpsc::channel();
        let emergency = EmergencyHandle::new(sender.clone());
        let mut app = App::new(Settings::default(), sender, emergency);
        app.set_status("Added Ñoño to recognized faces.");

        let row = render_row(&mut app, 120);
        assert!(row.contains("Ñoño"));
        // The hint block must end flush with the right edge
        assert!(row.ends_with(" space:Demo  E:Alert  q:Quit  ?:Help "));
    }
}
