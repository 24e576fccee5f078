//! In-memory profile store
//!
//! The store owns the patient profile and is the only place it is ever
//! replaced. Mutations arrive as [`ProfileUpdate`] values and are applied by
//! whole-value replacement: the store swaps in a new profile built by the
//! immutable `with_*` builders on [`PatientProfile`]. The store lives on the
//! UI thread and is never shared, so there is no locking.

use crate::models::{
    EmergencyContact, LovedOne, LovedOneId, Medication, MedicationId, NoteId, PatientNote,
    PatientProfile,
};

/// A single mutation of the patient profile
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    /// Append a medication
    AddMedication(Medication),
    /// Remove a medication by id
    RemoveMedication(MedicationId),
    /// Append a loved one
    AddLovedOne(LovedOne),
    /// Remove a loved one by id
    RemoveLovedOne(LovedOneId),
    /// Attach a reference photo to a loved one
    AttachPhoto(LovedOneId, String),
    /// Append a note
    AddNote(PatientNote),
    /// Remove a note by id
    RemoveNote(NoteId),
    /// Replace the patient name
    SetName(String),
    /// Replace the patient age
    SetAge(u32),
    /// Replace the blood type
    SetBloodType(String),
    /// Replace the conditions list
    SetConditions(Vec<String>),
    /// Replace the emergency contact as one record
    SetEmergencyContact(EmergencyContact),
}

/// Owner of the in-memory patient profile
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: PatientProfile,
}

impl ProfileStore {
    /// Create a store around an initial profile value
    pub fn new(profile: PatientProfile) -> Self {
        Self { profile }
    }

    /// Read the current profile
    pub fn current(&self) -> &PatientProfile {
        &self.profile
    }

    /// Apply an update by whole-value replacement.
    /// Returns true if the profile actually changed.
    pub fn apply(&mut self, update: ProfileUpdate) -> bool {
        let next = match update {
            ProfileUpdate::AddMedication(med) => self.profile.with_medication(med),
            ProfileUpdate::RemoveMedication(id) => self.profile.without_medication(id),
            ProfileUpdate::AddLovedOne(person) => self.profile.with_loved_one(person),
            ProfileUpdate::RemoveLovedOne(id) => self.profile.without_loved_one(id),
            ProfileUpdate::AttachPhoto(id, path) => self.profile.with_photo(id, path),
            ProfileUpdate::AddNote(note) => self.profile.with_note(note),
            ProfileUpdate::RemoveNote(id) => self.profile.without_note(id),
            ProfileUpdate::SetName(name) => self.profile.with_name(name),
            ProfileUpdate::SetAge(age) => self.profile.with_age(age),
            ProfileUpdate::SetBloodType(blood_type) => self.profile.with_blood_type(blood_type),
            ProfileUpdate::SetConditions(conditions) => self.profile.with_conditions(conditions),
            ProfileUpdate::SetEmergencyContact(contact) => {
                self.profile.with_emergency_contact(contact)
            }
        };

        let changed = next != self.profile;
        self.profile = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_profile;
    use crate::models::NoteCategory;

    fn store() -> ProfileStore {
        ProfileStore::new(seed_profile())
    }

    #[test]
    fn test_add_medication_appends() {
        let mut store = store();
        let before = store.current().medications.len();
        let changed = store.apply(ProfileUpdate::AddMedication(Medication::new(
            "Donepezil",
            "10mg",
            "8:00 AM daily",
        )));
        assert!(changed);
        assert_eq!(store.current().medications.len(), before + 1);
    }

    #[test]
    fn test_remove_loved_one() {
        let mut store = store();
        let id = store.current().loved_ones[1].id;
        assert!(store.apply(ProfileUpdate::RemoveLovedOne(id)));
        assert!(store.current().loved_ones.iter().all(|l| l.id != id));
    }

    #[test]
    fn test_remove_unknown_note_is_unchanged() {
        let mut store = store();
        let changed = store.apply(ProfileUpdate::RemoveNote(NoteId::new()));
        assert!(!changed);
        assert_eq!(store.current().notes.len(), 4);
    }

    #[test]
    fn test_attach_photo() {
        let mut store = store();
        let id = store.current().loved_ones[0].id;
        assert!(store.apply(ProfileUpdate::AttachPhoto(id, "photos/john.jpg".into())));
        let person = store
            .current()
            .loved_ones
            .iter()
            .find(|l| l.id == id)
            .unwrap();
        assert_eq!(person.photo.as_deref(), Some("photos/john.jpg"));
    }

    #[test]
    fn test_scalar_updates() {
        let mut store = store();
        assert!(store.apply(ProfileUpdate::SetAge(81)));
        assert!(store.apply(ProfileUpdate::SetBloodType("O-".into())));
        assert_eq!(store.current().age, 81);
        assert_eq!(store.current().blood_type, "O-");
    }

    #[test]
    fn test_set_same_name_reports_unchanged() {
        let mut store = store();
        let name = store.current().name.clone();
        assert!(!store.apply(ProfileUpdate::SetName(name)));
    }

    #[test]
    fn test_set_conditions_replaces_list() {
        let mut store = store();
        assert!(store.apply(ProfileUpdate::SetConditions(vec![
            "Diabetes".into(),
            "Hypertension".into(),
        ])));
        assert_eq!(
            store.current().conditions,
            vec!["Diabetes".to_string(), "Hypertension".to_string()]
        );
    }

    #[test]
    fn test_emergency_contact_replaced_as_one_record() {
        let mut store = store();
        assert!(
            store.apply(ProfileUpdate::SetEmergencyContact(EmergencyContact {
                name: "Sarah Johnson".into(),
                relationship: "Daughter".into(),
                phone: "(555) 987-6543".into(),
            }))
        );
        let contact = &store.current().emergency_contact;
        assert_eq!(contact.name, "Sarah Johnson");
        assert_eq!(contact.phone, "(555) 987-6543");
    }

    #[test]
    fn test_add_note_keeps_default_category() {
        let mut store = store();
        store.apply(ProfileUpdate::AddNote(PatientNote::new(
            "Keeps the radio on at night",
        )));
        let note = store.current().notes.last().unwrap();
        assert_eq!(note.category, NoteCategory::Quirk);
    }
}
