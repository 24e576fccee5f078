//! Ambient context models
//!
//! What the device currently believes about the patient: a coarse activity
//! state, a human-readable summary, and the day's timeline of state changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;

/// Coarse patient activity state reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatientState {
    /// Calm, low movement
    #[default]
    Resting,
    /// Moving around normally
    Active,
    /// At a meal
    Eating,
    /// Disoriented behavior detected
    Confused,
    /// Emergency condition detected
    Emergency,
}

impl PatientState {
    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resting => "Resting",
            Self::Active => "Active",
            Self::Eating => "Eating",
            Self::Confused => "Confused",
            Self::Emergency => "Emergency",
        }
    }

    /// The non-emergency states the home view demo control cycles through
    pub const DEMO_CYCLE: [PatientState; 4] = [
        PatientState::Resting,
        PatientState::Active,
        PatientState::Eating,
        PatientState::Confused,
    ];
}

impl fmt::Display for PatientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry in the activity timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Wall-clock label for the entry (e.g. "10:32 AM")
    pub timestamp: String,

    /// Patient state at that time
    pub state: PatientState,

    /// One-line summary
    pub summary: String,

    /// Longer detail text
    pub detail: String,
}

/// The device's current read on the patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentContext {
    /// Current patient state
    pub state: PatientState,

    /// One-line summary
    pub summary: String,

    /// Longer detail text
    pub detail: String,

    /// How the patient is referred to on the home view
    pub patient_name: String,

    /// When the context was last updated (e.g. "10:32 AM")
    pub last_updated: String,
}

/// A small stat shown on the home view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStat {
    /// Stat label (e.g. "Mood")
    pub label: String,

    /// Stat value (e.g. "Calm")
    pub value: String,
}
