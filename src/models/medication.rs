//! Medication model
//!
//! Represents a medication the device reminds the patient about, with a
//! free-text dosage and schedule as entered by the caregiver.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MedicationId;

/// A medication entry on the patient profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    /// Unique identifier
    pub id: MedicationId,

    /// Medication name (e.g. "Donepezil")
    pub name: String,

    /// Dosage as entered (e.g. "10mg")
    pub dosage: String,

    /// Schedule as entered (e.g. "8:00 AM daily")
    pub schedule: String,

    /// Optional caregiver notes (e.g. "Take with breakfast")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Medication {
    /// Create a new medication with a fresh ID
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            id: MedicationId::new(),
            name: name.into(),
            dosage: dosage.into(),
            schedule: schedule.into(),
            notes: None,
        }
    }

    /// Attach caregiver notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.dosage, self.schedule)
    }
}
