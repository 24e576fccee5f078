//! Loved-one model
//!
//! A person the on-device camera should recognize: family members, friends,
//! caregivers. The photo is absent until the caregiver attaches one, and the
//! device can only learn a face once a photo exists.

use serde::{Deserialize, Serialize};

use super::ids::LovedOneId;

/// A person the device should recognize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LovedOne {
    /// Unique identifier
    pub id: LovedOneId,

    /// Display name (e.g. "John")
    pub name: String,

    /// Relationship to the patient (e.g. "Son", "Doctor")
    pub relationship: String,

    /// Path to the reference photo, if one has been attached
    #[serde(default)]
    pub photo: Option<String>,
}

impl LovedOne {
    /// Create a new loved one with a fresh ID and no photo
    pub fn new(name: impl Into<String>, relationship: impl Into<String>) -> Self {
        Self {
            id: LovedOneId::new(),
            name: name.into(),
            relationship: relationship.into(),
            photo: None,
        }
    }

    /// Whether a reference photo has been attached
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loved_one_has_no_photo() {
        let person = LovedOne::new("John", "Son");
        assert_eq!(person.name, "John");
        assert_eq!(person.relationship, "Son");
        assert!(!person.has_photo());
    }

    #[test]
    fn test_has_photo_after_attach() {
        let mut person = LovedOne::new("Sarah", "Daughter");
        person.photo = Some("photos/sarah.jpg".into());
        assert!(person.has_photo());
    }
}
