//! Profile view
//!
//! Patient info card, the three collection lists, and the device row. Each
//! section carries its own sync indicator and the focused section gets the
//! accent border.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::config::DEVICE_MODEL;
use crate::tui::app::{App, InfoRow, ProfileSection};
use crate::tui::layout::ProfileLayout;

use super::{sync_color, sync_label};

/// Render the profile view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ProfileLayout::new(area);

    render_info(frame, app, layout.info);

    let (meds, faces, notes) = ProfileLayout::collection_columns(layout.collections);
    render_medications(frame, app, meds);
    render_faces(frame, app, faces);
    render_notes(frame, app, notes);

    render_device(frame, app, layout.device);
}

/// Block for a profile section, bright-bordered when focused
fn section_block(app: &App, section: ProfileSection) -> Block<'static> {
    let focused = app.profile_section == section;
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let mut block = Block::default()
        .title(format!(" {} ", section.title()))
        .title_style(
            Style::default()
                .fg(if focused { Color::Cyan } else { Color::Gray })
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if let Some(target) = section.sync_target() {
        let indicator = app.sync_panel.indicator(target);
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} ", sync_label(indicator.status)),
                Style::default().fg(sync_color(indicator.status)),
            ))
            .right_aligned(),
        );
    }
    block
}

fn render_info(frame: &mut Frame, app: &App, area: Rect) {
    let block = section_block(app, ProfileSection::Info);
    let profile = app.store.current();
    let focused = app.profile_section == ProfileSection::Info;

    let lines: Vec<Line> = InfoRow::ALL
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let (label, value) = match row {
                InfoRow::Name => ("Name", profile.name.clone()),
                InfoRow::Age => ("Age", profile.age.to_string()),
                InfoRow::BloodType => ("Blood Type", profile.blood_type.clone()),
                InfoRow::Conditions => ("Conditions", profile.conditions.join(", ")),
                InfoRow::EmergencyContact => (
                    "Emergency",
                    format!(
                        "{} ({}) {}",
                        profile.emergency_contact.name,
                        profile.emergency_contact.relationship,
                        profile.emergency_contact.phone
                    ),
                ),
            };

            let selected = focused && i == app.profile_index;
            let marker = if selected { "> " } else { "  " };
            let value_style = if selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{label:<12}"), Style::default().fg(Color::DarkGray)),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_medications(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = section_block(app, ProfileSection::Medications);
    let profile = app.store.current();

    let items: Vec<ListItem> = if profile.medications.is_empty() {
        vec![ListItem::new(Span::styled(
            "No medications yet. Press 'a' to add.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        profile
            .medications
            .iter()
            .map(|med| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        med.name.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", med.dosage),
                        Style::default().fg(Color::Cyan),
                    ),
                ])];
                lines.push(Line::from(Span::styled(
                    format!("  {}", med.schedule),
                    Style::default().fg(Color::DarkGray),
                )));
                if let Some(notes) = &med.notes {
                    lines.push(Line::from(Span::styled(
                        format!("  {notes}"),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect()
    };

    render_section_list(
        frame,
        app,
        ProfileSection::Medications,
        List::new(items).block(block),
        area,
    );
}

fn render_faces(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = section_block(app, ProfileSection::Faces);
    let profile = app.store.current();

    let items: Vec<ListItem> = if profile.loved_ones.is_empty() {
        vec![ListItem::new(Span::styled(
            "No faces yet. Press 'a' to add.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        profile
            .loved_ones
            .iter()
            .map(|person| {
                let photo = if person.has_photo() {
                    Span::styled("📷 ", Style::default().fg(Color::Green))
                } else {
                    Span::styled("·  ", Style::default().fg(Color::DarkGray))
                };
                ListItem::new(vec![
                    Line::from(vec![
                        photo,
                        Span::styled(
                            person.name.clone(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("   {}", person.relationship),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect()
    };

    render_section_list(
        frame,
        app,
        ProfileSection::Faces,
        List::new(items).block(block),
        area,
    );
}

fn render_notes(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = section_block(app, ProfileSection::Notes);
    let profile = app.store.current();

    let items: Vec<ListItem> = if profile.notes.is_empty() {
        vec![ListItem::new(Span::styled(
            "No notes yet. Press 'a' to add.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        profile
            .notes
            .iter()
            .map(|note| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("[{}]", note.category.label()),
                        Style::default().fg(Color::Yellow),
                    )),
                    Line::from(Span::styled(
                        note.text.clone(),
                        Style::default().fg(Color::White),
                    )),
                ])
            })
            .collect()
    };

    render_section_list(
        frame,
        app,
        ProfileSection::Notes,
        List::new(items).block(block),
        area,
    );
}

/// Render a collection list, with the selection shown only when focused
fn render_section_list(
    frame: &mut Frame,
    app: &App,
    section: ProfileSection,
    list: List,
    area: Rect,
) {
    let list = list
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("");

    let mut state = ListState::default();
    if app.profile_section == section && app.section_len() > 0 {
        state.select(Some(app.profile_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_device(frame: &mut Frame, app: &App, area: Rect) {
    let block = section_block(app, ProfileSection::Device);
    let profile = app.store.current();

    let line = Line::from(vec![
        Span::styled(
            format!(" {DEVICE_MODEL} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({})", app.link.device_id()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  │  "),
        Span::styled(
            format!("{} items to sync", profile.total_sync_items()),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  │  "),
        Span::styled("Press 'S' to push everything", Style::default().fg(Color::Cyan)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
