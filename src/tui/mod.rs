//! Terminal User Interface module
//!
//! The caregiver-facing TUI: a home view with the patient's live state,
//! today's timeline, and the profile editor with its device sync panel.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
