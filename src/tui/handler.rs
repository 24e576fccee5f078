//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state, and applies the completion events background sync
//! threads report back.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::store::ProfileUpdate;
use crate::sync::SyncTarget;
use crate::wizard::{FlowKind, SubmitOutcome};

use super::app::{ActiveDialog, ActiveView, App, ConfirmTarget, InfoRow, ProfileSection};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_mouse) => Ok(()),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::SyncDone(target, response) => {
            app.on_sync_done(target, response);
            Ok(())
        }
        Event::FaceUploaded(id, response) => {
            app.on_face_uploaded(id, response);
            Ok(())
        }
        Event::Emergency(message) => {
            app.active_dialog = ActiveDialog::Emergency(message);
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.active_dialog = ActiveDialog::Help;
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Home);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Timeline);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Profile);
            return Ok(());
        }
        KeyCode::Tab => {
            app.switch_view(app.active_view.next());
            return Ok(());
        }
        KeyCode::BackTab => {
            app.switch_view(app.active_view.prev());
            return Ok(());
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            return Ok(());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            return Ok(());
        }
        _ => {}
    }

    // View-specific keys
    match app.active_view {
        ActiveView::Home => handle_home_key(app, key),
        ActiveView::Timeline => handle_timeline_key(app, key),
        ActiveView::Profile => handle_profile_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char(' ') => app.cycle_demo_state(),
        KeyCode::Char('E') => app.raise_demo_emergency(),
        _ => {}
    }
    Ok(())
}

fn handle_timeline_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('g') => app.selected_entry_index = 0,
        KeyCode::Char('G') => {
            app.selected_entry_index = app.timeline.len().saturating_sub(1);
        }
        _ => {}
    }
    Ok(())
}

fn handle_profile_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.prev_section(),
        KeyCode::Char('l') | KeyCode::Right => app.next_section(),

        // Add to the focused section
        KeyCode::Char('a') => match app.profile_section {
            ProfileSection::Medications => app.open_wizard(FlowKind::AddMedication),
            ProfileSection::Faces => app.open_wizard(FlowKind::AddLovedOne),
            ProfileSection::Notes => app.open_wizard(FlowKind::AddNote),
            ProfileSection::Info | ProfileSection::Device => {}
        },

        // Edit the selected info row
        KeyCode::Char('e') | KeyCode::Enter => {
            if app.profile_section == ProfileSection::Info {
                if let Some(row) = InfoRow::ALL.get(app.profile_index) {
                    app.open_wizard(row.flow_kind());
                }
            }
        }

        // Remove the selected record, with confirmation
        KeyCode::Char('d') => {
            if let Some(target) = confirm_target_for_selection(app) {
                app.active_dialog = ActiveDialog::Confirm(target);
            }
        }

        // Attach a photo to the selected face
        KeyCode::Char('p') => {
            if app.profile_section == ProfileSection::Faces {
                let selected = app
                    .store
                    .current()
                    .loved_ones
                    .get(app.profile_index)
                    .map(|person| person.id);
                if let Some(id) = selected {
                    if let Err(err) = app.attach_photo(id) {
                        app.set_status(err.to_string());
                    }
                }
            }
        }

        // Sync the focused section / everything
        KeyCode::Char('s') => {
            if let Some(target) = app.profile_section.sync_target() {
                app.start_sync(target);
            }
        }
        KeyCode::Char('S') => app.start_sync(SyncTarget::Everything),

        _ => {}
    }
    Ok(())
}

/// The removal the `d` key would confirm for the current selection
fn confirm_target_for_selection(app: &App) -> Option<ConfirmTarget> {
    let profile = app.store.current();
    match app.profile_section {
        ProfileSection::Medications => profile
            .medications
            .get(app.profile_index)
            .map(|med| ConfirmTarget::Medication(med.id, med.name.clone())),
        ProfileSection::Faces => profile
            .loved_ones
            .get(app.profile_index)
            .map(|person| ConfirmTarget::LovedOne(person.id, person.name.clone())),
        ProfileSection::Notes => profile
            .notes
            .get(app.profile_index)
            .map(|note| ConfirmTarget::Note(note.id, note.text.clone())),
        ProfileSection::Info | ProfileSection::Device => None,
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::Help => {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
                    app.close_dialog();
                }
                _ => {}
            }
            Ok(())
        }
        ActiveDialog::Wizard => handle_wizard_key(app, key),
        ActiveDialog::Confirm(target) => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    let update = target.update();
                    app.close_dialog();
                    if app.apply_update(update) {
                        app.set_status("Removed.");
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
            Ok(())
        }
        ActiveDialog::Emergency(_) => {
            match key.code {
                KeyCode::Char('c') => {
                    let contact = app.store.current().emergency_contact.clone();
                    app.close_dialog();
                    app.set_status(format!("Calling {} at {}...", contact.name, contact.phone));
                }
                KeyCode::Char('d') => {
                    app.close_dialog();
                    app.set_status("Emergency services notified.");
                }
                KeyCode::Esc => app.close_dialog(),
                _ => {}
            }
            Ok(())
        }
        ActiveDialog::None => Ok(()),
    }
}

/// Handle keys while the wizard input dialog is open
fn handle_wizard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let value = app.input.value().to_string();
            match app.wizard.submit(&value) {
                SubmitOutcome::Inactive => app.close_dialog(),
                SubmitOutcome::Rejected { reason } => {
                    // Keep the dialog open and surface the reason
                    app.input_error = Some(reason);
                }
                SubmitOutcome::Advanced => {
                    app.input.clear();
                    app.input_error = None;
                }
                SubmitOutcome::Committed(update) => {
                    let status = commit_status(&update);
                    app.active_dialog = ActiveDialog::None;
                    app.input.clear();
                    app.input_error = None;
                    if app.apply_update(update) {
                        app.set_status(status);
                    }
                }
            }
        }
        KeyCode::Char(c) => {
            app.input.insert(c);
            app.input_error = None;
        }
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        _ => {}
    }
    Ok(())
}

/// Status message for a committed wizard flow
fn commit_status(update: &ProfileUpdate) -> String {
    match update {
        ProfileUpdate::AddMedication(med) => format!("Added medication {}.", med.name),
        ProfileUpdate::AddLovedOne(person) => format!("Added {} to recognized faces.", person.name),
        ProfileUpdate::AddNote(_) => "Note saved.".to_string(),
        ProfileUpdate::SetEmergencyContact(contact) => {
            format!("Emergency contact set to {}.", contact.name)
        }
        _ => "Profile updated.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::event::EmergencyHandle;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use std::sync::mpsc;

    fn test_app() -> (App, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel();
        let emergency = EmergencyHandle::new(sender.clone());
        let app = App::new(
            Settings {
                fast_sync: true,
                ..Settings::default()
            },
            sender,
            emergency,
        );
        (app, receiver)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, Event::Key(key(KeyCode::Char(c)))).unwrap();
        }
    }

    #[test]
    fn test_quit_key() {
        let (mut app, _rx) = test_app();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('q')))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_view_switch_keys() {
        let (mut app, _rx) = test_app();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('3')))).unwrap();
        assert_eq!(app.active_view, ActiveView::Profile);
        handle_event(&mut app, Event::Key(key(KeyCode::Tab))).unwrap();
        assert_eq!(app.active_view, ActiveView::Home);
    }

    #[test]
    fn test_medication_wizard_end_to_end() {
        let (mut app, _rx) = test_app();
        app.switch_view(ActiveView::Profile);
        app.profile_section = ProfileSection::Medications;
        let before = app.store.current().medications.len();

        handle_event(&mut app, Event::Key(key(KeyCode::Char('a')))).unwrap();
        assert!(app.wizard.is_open());

        type_text(&mut app, "Donepezil");
        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();
        type_text(&mut app, "10mg");
        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();
        type_text(&mut app, "Evening");
        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();

        assert!(!app.wizard.is_open());
        assert!(!app.has_dialog());
        let meds = &app.store.current().medications;
        assert_eq!(meds.len(), before + 1);
        let added = meds.last().unwrap();
        assert_eq!(added.name, "Donepezil");
        assert_eq!(added.dosage, "10mg");
        assert_eq!(added.schedule, "Evening");
    }

    #[test]
    fn test_invalid_age_keeps_dialog_open() {
        let (mut app, _rx) = test_app();
        app.switch_view(ActiveView::Profile);
        app.profile_section = ProfileSection::Info;
        app.profile_index = 1; // Age row
        let before = app.store.current().age;

        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();
        type_text(&mut app, "abc");
        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();

        assert!(app.wizard.is_open());
        assert!(matches!(app.active_dialog, ActiveDialog::Wizard));
        assert_eq!(app.input_error.as_deref(), Some("\"abc\" is not a number"));
        assert_eq!(app.store.current().age, before);
    }

    #[test]
    fn test_typing_clears_validation_message() {
        let (mut app, _rx) = test_app();
        app.open_wizard(FlowKind::EditAge);
        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();
        assert!(app.input_error.is_some());
        handle_event(&mut app, Event::Key(key(KeyCode::Char('8')))).unwrap();
        assert!(app.input_error.is_none());
    }

    #[test]
    fn test_escape_cancels_mid_flow() {
        let (mut app, _rx) = test_app();
        app.open_wizard(FlowKind::AddLovedOne);
        type_text(&mut app, "Sarah");
        handle_event(&mut app, Event::Key(key(KeyCode::Enter))).unwrap();
        let before = app.store.current().loved_ones.len();

        handle_event(&mut app, Event::Key(key(KeyCode::Esc))).unwrap();
        assert!(!app.wizard.is_open());
        assert_eq!(app.store.current().loved_ones.len(), before);
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let (mut app, _rx) = test_app();
        app.switch_view(ActiveView::Profile);
        app.profile_section = ProfileSection::Notes;
        app.profile_index = 0;
        let before = app.store.current().notes.len();

        handle_event(&mut app, Event::Key(key(KeyCode::Char('d')))).unwrap();
        assert!(matches!(app.active_dialog, ActiveDialog::Confirm(_)));
        assert_eq!(app.store.current().notes.len(), before);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('n')))).unwrap();
        assert_eq!(app.store.current().notes.len(), before);

        handle_event(&mut app, Event::Key(key(KeyCode::Char('d')))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('y')))).unwrap();
        assert_eq!(app.store.current().notes.len(), before - 1);
    }

    #[test]
    fn test_emergency_event_opens_overlay() {
        let (mut app, rx) = test_app();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('E')))).unwrap();

        // The handle reports through the channel; feed it back like the
        // event loop would.
        let event = rx.try_recv().unwrap();
        handle_event(&mut app, event).unwrap();
        assert!(matches!(app.active_dialog, ActiveDialog::Emergency(_)));

        handle_event(&mut app, Event::Key(key(KeyCode::Esc))).unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_sync_done_event_updates_panel() {
        let (mut app, _rx) = test_app();
        let response = crate::sync::SyncResponse {
            success: true,
            message: "Profile synced to device.".into(),
            device_id: app.link.device_id().to_string(),
            timestamp: "10:32:05 AM".into(),
        };
        app.sync_panel.begin(SyncTarget::Profile);
        handle_event(&mut app, Event::SyncDone(SyncTarget::Profile, response)).unwrap();
        assert_eq!(
            app.sync_panel.indicator(SyncTarget::Profile).status,
            crate::sync::SyncStatus::Success
        );
    }
}
