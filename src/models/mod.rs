//! Core data models for CareLink
//!
//! This module contains all the data structures that represent the
//! companion-app domain: the patient profile with its medications, loved
//! ones, and notes, plus the ambient context the device reports.

pub mod context;
pub mod ids;
pub mod loved_one;
pub mod medication;
pub mod note;
pub mod profile;

pub use context::{ContextEntry, CurrentContext, PatientState, QuickStat};
pub use ids::{EntryId, LovedOneId, MedicationId, NoteId};
pub use loved_one::LovedOne;
pub use medication::Medication;
pub use note::{NoteCategory, PatientNote};
pub use profile::{EmergencyContact, PatientProfile};
