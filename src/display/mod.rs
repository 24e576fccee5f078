//! Display formatting for terminal output
//!
//! Formats the patient profile for plain CLI output (the TUI renders its own
//! views).

pub mod profile;

pub use profile::{format_loved_one_list, format_medication_list, format_note_list, format_profile};
