//! Patient note model
//!
//! Free-text observations about the patient: quirks, allergies, preferences,
//! and medical details the device uses to build context.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::NoteId;

/// Category of a patient note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    /// Everyday quirks and habits (the default for new notes)
    #[default]
    Quirk,
    /// Allergies the device should factor into alerts
    Allergy,
    /// Personal preferences
    Preference,
    /// Medical observations
    Medical,
}

impl NoteCategory {
    /// All categories, in display order
    pub const ALL: [NoteCategory; 4] = [
        NoteCategory::Quirk,
        NoteCategory::Allergy,
        NoteCategory::Preference,
        NoteCategory::Medical,
    ];

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quirk => "Quirk",
            Self::Allergy => "Allergy",
            Self::Preference => "Preference",
            Self::Medical => "Medical",
        }
    }
}

impl fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A free-text note about the patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientNote {
    /// Unique identifier
    pub id: NoteId,

    /// The note text
    pub text: String,

    /// Note category
    #[serde(default)]
    pub category: NoteCategory,
}

impl PatientNote {
    /// Create a new note in the default category
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            text: text.into(),
            category: NoteCategory::default(),
        }
    }

    /// Create a new note in a specific category
    pub fn with_category(text: impl Into<String>, category: NoteCategory) -> Self {
        Self {
            id: NoteId::new(),
            text: text.into(),
            category,
        }
    }
}
