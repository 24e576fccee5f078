//! TUI Views module
//!
//! Contains the three tabbed views (home, timeline, profile) plus the tab
//! bar and status bar.

pub mod home;
pub mod profile;
pub mod status_bar;
pub mod tab_bar;
pub mod timeline;

use ratatui::style::Color;
use ratatui::Frame;

use crate::models::PatientState;
use crate::sync::SyncStatus;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    tab_bar::render(frame, app, layout.tab_bar);

    match app.active_view {
        ActiveView::Home => home::render(frame, app, layout.main),
        ActiveView::Timeline => timeline::render(frame, app, layout.main),
        ActiveView::Profile => profile::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog.clone() {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::Wizard => {
            dialogs::input::render(frame, app);
        }
        ActiveDialog::Confirm(target) => {
            dialogs::confirm::render(frame, &target.message());
        }
        ActiveDialog::Emergency(message) => {
            dialogs::emergency::render(frame, app, &message);
        }
        ActiveDialog::None => {}
    }
}

/// Accent color for a patient state
pub fn state_color(state: PatientState) -> Color {
    match state {
        PatientState::Resting => Color::Green,
        PatientState::Active => Color::Blue,
        PatientState::Eating => Color::Yellow,
        PatientState::Confused => Color::Magenta,
        PatientState::Emergency => Color::Red,
    }
}

/// Accent color for a sync status
pub fn sync_color(status: SyncStatus) -> Color {
    match status {
        SyncStatus::Idle => Color::DarkGray,
        SyncStatus::Syncing => Color::Yellow,
        SyncStatus::Success => Color::Green,
        SyncStatus::Error => Color::Red,
    }
}

/// One-word sync status label
pub fn sync_label(status: SyncStatus) -> &'static str {
    match status {
        SyncStatus::Idle => "idle",
        SyncStatus::Syncing => "syncing...",
        SyncStatus::Success => "synced",
        SyncStatus::Error => "failed",
    }
}
