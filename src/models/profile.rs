//! Patient profile model
//!
//! The full patient profile is modeled as an immutable value: every mutation
//! goes through the `with_*` builders, which return a new profile and leave
//! the original untouched. This keeps change detection a simple equality
//! check and makes whole-value replacement the only write path.

use serde::{Deserialize, Serialize};

use super::ids::{LovedOneId, MedicationId, NoteId};
use super::loved_one::LovedOne;
use super::medication::Medication;
use super::note::PatientNote;

/// The patient's emergency contact, always replaced as a whole record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Contact's full name
    pub name: String,

    /// Relationship to the patient
    pub relationship: String,

    /// Phone number as entered
    pub phone: String,
}

/// The full patient profile held by the companion app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Patient name
    pub name: String,

    /// Patient age in years
    pub age: u32,

    /// Blood type (e.g. "A+")
    pub blood_type: String,

    /// Known conditions
    pub conditions: Vec<String>,

    /// Emergency contact
    pub emergency_contact: EmergencyContact,

    /// Medications the device reminds about
    pub medications: Vec<Medication>,

    /// People the device camera should recognize
    pub loved_ones: Vec<LovedOne>,

    /// Notes and quirks
    pub notes: Vec<PatientNote>,
}

impl PatientProfile {
    /// Total number of items a full device sync would push
    /// (the profile itself plus every collection entry)
    pub fn total_sync_items(&self) -> usize {
        1 + self.medications.len() + self.loved_ones.len() + self.notes.len()
    }

    /// Return a new profile with the medication appended
    pub fn with_medication(&self, medication: Medication) -> Self {
        let mut next = self.clone();
        next.medications.push(medication);
        next
    }

    /// Return a new profile without the given medication
    pub fn without_medication(&self, id: MedicationId) -> Self {
        let mut next = self.clone();
        next.medications.retain(|m| m.id != id);
        next
    }

    /// Return a new profile with the loved one appended
    pub fn with_loved_one(&self, loved_one: LovedOne) -> Self {
        let mut next = self.clone();
        next.loved_ones.push(loved_one);
        next
    }

    /// Return a new profile without the given loved one
    pub fn without_loved_one(&self, id: LovedOneId) -> Self {
        let mut next = self.clone();
        next.loved_ones.retain(|l| l.id != id);
        next
    }

    /// Return a new profile with a photo attached to the given loved one.
    /// A profile without that loved one comes back unchanged.
    pub fn with_photo(&self, id: LovedOneId, path: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(person) = next.loved_ones.iter_mut().find(|l| l.id == id) {
            person.photo = Some(path.into());
        }
        next
    }

    /// Return a new profile with the note appended
    pub fn with_note(&self, note: PatientNote) -> Self {
        let mut next = self.clone();
        next.notes.push(note);
        next
    }

    /// Return a new profile without the given note
    pub fn without_note(&self, id: NoteId) -> Self {
        let mut next = self.clone();
        next.notes.retain(|n| n.id != id);
        next
    }

    /// Return a new profile with the name replaced
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.name = name.into();
        next
    }

    /// Return a new profile with the age replaced
    pub fn with_age(&self, age: u32) -> Self {
        let mut next = self.clone();
        next.age = age;
        next
    }

    /// Return a new profile with the blood type replaced
    pub fn with_blood_type(&self, blood_type: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.blood_type = blood_type.into();
        next
    }

    /// Return a new profile with the conditions list replaced
    pub fn with_conditions(&self, conditions: Vec<String>) -> Self {
        let mut next = self.clone();
        next.conditions = conditions;
        next
    }

    /// Return a new profile with the emergency contact replaced atomically
    pub fn with_emergency_contact(&self, contact: EmergencyContact) -> Self {
        let mut next = self.clone();
        next.emergency_contact = contact;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_profile;

    #[test]
    fn test_with_medication_leaves_original_untouched() {
        let profile = seed_profile();
        let before = profile.medications.len();
        let next = profile.with_medication(Medication::new("Aspirin", "81mg", "Evening"));
        assert_eq!(profile.medications.len(), before);
        assert_eq!(next.medications.len(), before + 1);
    }

    #[test]
    fn test_without_medication() {
        let profile = seed_profile();
        let id = profile.medications[0].id;
        let next = profile.without_medication(id);
        assert!(next.medications.iter().all(|m| m.id != id));
        assert_eq!(next.medications.len(), profile.medications.len() - 1);
    }

    #[test]
    fn test_with_photo_targets_only_one_person() {
        let profile = seed_profile();
        let id = profile.loved_ones[0].id;
        let next = profile.with_photo(id, "photos/john.jpg");
        assert!(next.loved_ones[0].has_photo());
        assert!(next.loved_ones[1..].iter().all(|l| !l.has_photo()));
    }

    #[test]
    fn test_with_photo_unknown_id_is_noop() {
        let profile = seed_profile();
        let next = profile.with_photo(LovedOneId::new(), "photos/ghost.jpg");
        assert_eq!(next, profile);
    }

    #[test]
    fn test_scalar_replacement() {
        let profile = seed_profile();
        let next = profile.with_age(81).with_name("Margaret J.");
        assert_eq!(next.age, 81);
        assert_eq!(next.name, "Margaret J.");
        assert_eq!(profile.age, 78);
    }

    #[test]
    fn test_emergency_contact_replaced_atomically() {
        let profile = seed_profile();
        let next = profile.with_emergency_contact(EmergencyContact {
            name: "Sarah Johnson".into(),
            relationship: "Daughter".into(),
            phone: "(555) 987-6543".into(),
        });
        assert_eq!(next.emergency_contact.name, "Sarah Johnson");
        assert_eq!(next.emergency_contact.relationship, "Daughter");
        assert_eq!(next.emergency_contact.phone, "(555) 987-6543");
        // The original record is intact
        assert_eq!(profile.emergency_contact.name, "John Johnson");
    }

    #[test]
    fn test_total_sync_items() {
        let profile = seed_profile();
        assert_eq!(
            profile.total_sync_items(),
            1 + profile.medications.len() + profile.loved_ones.len() + profile.notes.len()
        );
    }

    #[test]
    fn test_equality_based_change_detection() {
        let profile = seed_profile();
        let same = profile.clone();
        assert_eq!(profile, same);
        let changed = profile.with_blood_type("O-");
        assert_ne!(profile, changed);
    }
}
