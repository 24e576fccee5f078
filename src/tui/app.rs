//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the profile store, the mock device link, the wizard, per-target sync
//! indicators, and the ambient context fixtures.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::data;
use crate::error::{CarelinkError, CarelinkResult};
use crate::models::{
    ContextEntry, CurrentContext, LovedOneId, MedicationId, NoteId, PatientState, QuickStat,
};
use crate::store::{ProfileStore, ProfileUpdate};
use crate::sync::{DeviceLink, SyncResponse, SyncStatus, SyncTarget};
use crate::wizard::{FlowKind, Wizard};

use super::event::{EmergencyHandle, Event};
use super::widgets::input::TextInput;

/// Which view (tab) is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Home,
    Timeline,
    Profile,
}

impl ActiveView {
    /// Tab order
    pub const TABS: [ActiveView; 3] = [
        ActiveView::Home,
        ActiveView::Timeline,
        ActiveView::Profile,
    ];

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Timeline => "Timeline",
            Self::Profile => "Profile",
        }
    }

    /// The next tab, wrapping
    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Timeline,
            Self::Timeline => Self::Profile,
            Self::Profile => Self::Home,
        }
    }

    /// The previous tab, wrapping
    pub fn prev(&self) -> Self {
        match self {
            Self::Home => Self::Profile,
            Self::Timeline => Self::Home,
            Self::Profile => Self::Timeline,
        }
    }
}

/// Sections of the profile view, focused one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileSection {
    #[default]
    Info,
    Medications,
    Faces,
    Notes,
    Device,
}

impl ProfileSection {
    /// Section order for h/l cycling
    pub const ALL: [ProfileSection; 5] = [
        ProfileSection::Info,
        ProfileSection::Medications,
        ProfileSection::Faces,
        ProfileSection::Notes,
        ProfileSection::Device,
    ];

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Patient Info",
            Self::Medications => "Medications",
            Self::Faces => "Recognized Faces",
            Self::Notes => "Notes & Quirks",
            Self::Device => "Device",
        }
    }

    /// The sync target this section's `s` key pushes
    pub fn sync_target(&self) -> Option<SyncTarget> {
        match self {
            Self::Info => Some(SyncTarget::Profile),
            Self::Medications => Some(SyncTarget::Medications),
            Self::Faces => Some(SyncTarget::Faces),
            Self::Notes => Some(SyncTarget::Notes),
            Self::Device => Some(SyncTarget::Everything),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Info => Self::Medications,
            Self::Medications => Self::Faces,
            Self::Faces => Self::Notes,
            Self::Notes => Self::Device,
            Self::Device => Self::Info,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Info => Self::Device,
            Self::Medications => Self::Info,
            Self::Faces => Self::Medications,
            Self::Notes => Self::Faces,
            Self::Device => Self::Notes,
        }
    }
}

/// Editable rows of the info section, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoRow {
    Name,
    Age,
    BloodType,
    Conditions,
    EmergencyContact,
}

impl InfoRow {
    pub const ALL: [InfoRow; 5] = [
        InfoRow::Name,
        InfoRow::Age,
        InfoRow::BloodType,
        InfoRow::Conditions,
        InfoRow::EmergencyContact,
    ];

    /// The wizard flow editing this row
    pub fn flow_kind(&self) -> FlowKind {
        match self {
            Self::Name => FlowKind::EditName,
            Self::Age => FlowKind::EditAge,
            Self::BloodType => FlowKind::EditBloodType,
            Self::Conditions => FlowKind::EditConditions,
            Self::EmergencyContact => FlowKind::EditEmergencyContact,
        }
    }
}

/// Pending removal awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmTarget {
    Medication(MedicationId, String),
    LovedOne(LovedOneId, String),
    Note(NoteId, String),
}

impl ConfirmTarget {
    /// Message shown in the confirm dialog
    pub fn message(&self) -> String {
        match self {
            Self::Medication(_, name) => format!("Remove medication \"{name}\"?"),
            Self::LovedOne(_, name) => format!("Remove \"{name}\" from recognized faces?"),
            Self::Note(_, text) => {
                // Truncate on char boundaries; the text is caregiver-typed
                // and may hold multi-byte characters.
                if text.chars().count() > 32 {
                    let truncated: String = text.chars().take(32).collect();
                    format!("Remove note \"{truncated}...\"?")
                } else {
                    format!("Remove note \"{text}\"?")
                }
            }
        }
    }

    /// The profile update the confirmation applies
    pub fn update(&self) -> ProfileUpdate {
        match self {
            Self::Medication(id, _) => ProfileUpdate::RemoveMedication(*id),
            Self::LovedOne(id, _) => ProfileUpdate::RemoveLovedOne(*id),
            Self::Note(id, _) => ProfileUpdate::RemoveNote(*id),
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// The wizard input prompt
    Wizard,
    Confirm(ConfirmTarget),
    /// Emergency overlay with its alert message
    Emergency(String),
}

/// Per-target sync indicator
#[derive(Debug, Clone, Default)]
pub struct SyncIndicator {
    pub status: SyncStatus,
    pub message: String,
    finished_at: Option<Instant>,
}

/// Sync indicators for every target
#[derive(Debug, Clone, Default)]
pub struct SyncPanel {
    profile: SyncIndicator,
    medications: SyncIndicator,
    faces: SyncIndicator,
    notes: SyncIndicator,
    everything: SyncIndicator,
}

impl SyncPanel {
    /// The indicator for a target
    pub fn indicator(&self, target: SyncTarget) -> &SyncIndicator {
        match target {
            SyncTarget::Profile => &self.profile,
            SyncTarget::Medications => &self.medications,
            SyncTarget::Faces => &self.faces,
            SyncTarget::Notes => &self.notes,
            SyncTarget::Everything => &self.everything,
        }
    }

    fn indicator_mut(&mut self, target: SyncTarget) -> &mut SyncIndicator {
        match target {
            SyncTarget::Profile => &mut self.profile,
            SyncTarget::Medications => &mut self.medications,
            SyncTarget::Faces => &mut self.faces,
            SyncTarget::Notes => &mut self.notes,
            SyncTarget::Everything => &mut self.everything,
        }
    }

    /// Mark a target as syncing
    pub fn begin(&mut self, target: SyncTarget) {
        let indicator = self.indicator_mut(target);
        indicator.status = SyncStatus::Syncing;
        indicator.message.clear();
        indicator.finished_at = None;
    }

    /// Record a completed sync
    pub fn finish(&mut self, target: SyncTarget, response: &SyncResponse) {
        let indicator = self.indicator_mut(target);
        indicator.status = response.status();
        indicator.message = response.message.clone();
        indicator.finished_at = Some(Instant::now());
    }

    /// Reset indicators whose result has been visible long enough
    pub fn tick(&mut self, reset_after: Duration) {
        for target in SyncTarget::ALL {
            let indicator = self.indicator_mut(target);
            if let Some(finished_at) = indicator.finished_at {
                if finished_at.elapsed() >= reset_after {
                    indicator.status = SyncStatus::Idle;
                    indicator.message.clear();
                    indicator.finished_at = None;
                }
            }
        }
    }
}

/// Main application state
pub struct App {
    /// Runtime settings
    pub settings: Settings,

    /// The profile store
    pub store: ProfileStore,

    /// Link to the (simulated) device
    pub link: DeviceLink,

    /// Sender for background threads reporting back
    sender: mpsc::Sender<Event>,

    /// Capability to raise an emergency alert
    pub emergency: EmergencyHandle,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// The form wizard
    pub wizard: Wizard,

    /// Text input backing the wizard dialog
    pub input: TextInput,

    /// Validation message shown in the wizard dialog
    pub input_error: Option<String>,

    /// The device's current read on the patient
    pub current_context: CurrentContext,

    /// Today's timeline, newest first
    pub timeline: Vec<ContextEntry>,

    /// Quick stats for the home view
    pub quick_stats: Vec<QuickStat>,

    /// Demo state cycle position
    demo_index: usize,

    /// Selected timeline entry
    pub selected_entry_index: usize,

    /// Focused profile section
    pub profile_section: ProfileSection,

    /// Selected row within the focused section
    pub profile_index: usize,

    /// Per-target sync indicators
    pub sync_panel: SyncPanel,

    /// Status message shown in the status bar
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,
}

impl App {
    /// Create a new App instance seeded with the mock fixtures
    pub fn new(settings: Settings, sender: mpsc::Sender<Event>, emergency: EmergencyHandle) -> Self {
        let link = DeviceLink::new(&settings);
        Self {
            settings,
            store: ProfileStore::new(data::seed_profile()),
            link,
            sender,
            emergency,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            wizard: Wizard::new(),
            input: TextInput::new(),
            input_error: None,
            current_context: data::current_context(),
            timeline: data::timeline(),
            quick_stats: data::quick_stats(),
            demo_index: 0,
            selected_entry_index: 0,
            profile_section: ProfileSection::default(),
            profile_index: 0,
            sync_panel: SyncPanel::default(),
            status_message: None,
            status_set_at: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        if view == ActiveView::Profile {
            self.clamp_profile_index();
        }
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Close the current dialog, cancelling any wizard flow
    pub fn close_dialog(&mut self) {
        if matches!(self.active_dialog, ActiveDialog::Wizard) {
            self.wizard.cancel();
        }
        self.active_dialog = ActiveDialog::None;
        self.input.clear();
        self.input_error = None;
    }

    /// Start a wizard flow and open the input dialog
    pub fn open_wizard(&mut self, kind: FlowKind) {
        self.wizard.start(kind);
        self.input.clear();
        self.input_error = None;
        self.active_dialog = ActiveDialog::Wizard;
    }

    /// Number of selectable rows in the focused profile section
    pub fn section_len(&self) -> usize {
        let profile = self.store.current();
        match self.profile_section {
            ProfileSection::Info => InfoRow::ALL.len(),
            ProfileSection::Medications => profile.medications.len(),
            ProfileSection::Faces => profile.loved_ones.len(),
            ProfileSection::Notes => profile.notes.len(),
            ProfileSection::Device => 1,
        }
    }

    /// Move selection up in the current view
    pub fn move_up(&mut self) {
        match self.active_view {
            ActiveView::Timeline => {
                if self.selected_entry_index > 0 {
                    self.selected_entry_index -= 1;
                }
            }
            ActiveView::Profile => {
                if self.profile_index > 0 {
                    self.profile_index -= 1;
                }
            }
            ActiveView::Home => {}
        }
    }

    /// Move selection down in the current view
    pub fn move_down(&mut self) {
        match self.active_view {
            ActiveView::Timeline => {
                if self.selected_entry_index + 1 < self.timeline.len() {
                    self.selected_entry_index += 1;
                }
            }
            ActiveView::Profile => {
                if self.profile_index + 1 < self.section_len() {
                    self.profile_index += 1;
                }
            }
            ActiveView::Home => {}
        }
    }

    /// Focus the next profile section
    pub fn next_section(&mut self) {
        self.profile_section = self.profile_section.next();
        self.profile_index = 0;
    }

    /// Focus the previous profile section
    pub fn prev_section(&mut self) {
        self.profile_section = self.profile_section.prev();
        self.profile_index = 0;
    }

    /// Keep the selection in bounds after the section shrank
    pub fn clamp_profile_index(&mut self) {
        let len = self.section_len();
        if len == 0 {
            self.profile_index = 0;
        } else if self.profile_index >= len {
            self.profile_index = len - 1;
        }
    }

    /// Apply a profile update and report whether anything changed
    pub fn apply_update(&mut self, update: ProfileUpdate) -> bool {
        let changed = self.store.apply(update);
        self.clamp_profile_index();
        changed
    }

    /// Cycle the home view through the demo states
    pub fn cycle_demo_state(&mut self) {
        self.demo_index = (self.demo_index + 1) % PatientState::DEMO_CYCLE.len();
        let state = PatientState::DEMO_CYCLE[self.demo_index];
        self.current_context.state = state;
        self.current_context.summary = data::demo_summary(state).to_string();
        self.current_context.detail = data::demo_detail(state).to_string();
    }

    /// Raise the demo emergency alert
    pub fn raise_demo_emergency(&self) {
        self.emergency.raise(format!(
            "Possible fall detected. Check on {} now.",
            self.current_context.patient_name
        ));
    }

    /// Spawn a background sync for a target
    pub fn start_sync(&mut self, target: SyncTarget) {
        if !self.sync_panel.indicator(target).status.can_start() {
            return;
        }
        self.sync_panel.begin(target);

        let link = self.link.clone();
        let profile = self.store.current().clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let response = link.sync(target, &profile);
            let _ = sender.send(Event::SyncDone(target, response));
        });
    }

    /// Attach a mock photo to a loved one and upload the face data
    pub fn attach_photo(&mut self, id: LovedOneId) -> CarelinkResult<()> {
        let path = format!("photos/{id}.jpg");
        self.apply_update(ProfileUpdate::AttachPhoto(id, path));

        let person = self
            .store
            .current()
            .loved_ones
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| CarelinkError::loved_one_not_found(id.to_string()))?;

        self.set_status(format!("Uploading face data for {}...", person.name));

        let link = self.link.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let response = link.upload_face(&person);
            let _ = sender.send(Event::FaceUploaded(person.id, response));
        });
        Ok(())
    }

    /// Record a finished background sync
    pub fn on_sync_done(&mut self, target: SyncTarget, response: SyncResponse) {
        self.sync_panel.finish(target, &response);
    }

    /// Record a finished face upload
    pub fn on_face_uploaded(&mut self, _id: LovedOneId, response: SyncResponse) {
        self.set_status(response.message);
    }

    /// Periodic upkeep: expire sync results and stale status messages
    pub fn on_tick(&mut self) {
        self.sync_panel
            .tick(Duration::from_secs(self.settings.status_reset_secs));

        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() >= Duration::from_secs(5) {
                self.status_message = None;
                self.status_set_at = None;
            }
        }
    }
}
