//! Static mock data
//!
//! The app is backed entirely by canned fixtures: a seed patient profile,
//! the day's activity timeline, and the device's current context. A real
//! deployment would replace this module with device ingestion.

use crate::models::{
    ContextEntry, CurrentContext, EmergencyContact, EntryId, LovedOne, Medication, NoteCategory,
    PatientNote, PatientProfile, PatientState, QuickStat,
};

/// The seed patient profile shown on first launch
pub fn seed_profile() -> PatientProfile {
    PatientProfile {
        name: "Margaret Johnson".into(),
        age: 78,
        blood_type: "A+".into(),
        conditions: vec!["Early-stage dementia".into(), "Mild hypertension".into()],
        emergency_contact: EmergencyContact {
            name: "John Johnson".into(),
            relationship: "Son".into(),
            phone: "(555) 012-3456".into(),
        },
        medications: vec![
            Medication::new("Donepezil", "10mg", "8:00 AM daily").with_notes("Take with breakfast"),
            Medication::new("Lisinopril", "5mg", "9:00 AM daily").with_notes("Blood pressure"),
            Medication::new("Vitamin D", "1000 IU", "Morning with food"),
        ],
        loved_ones: vec![
            LovedOne::new("John", "Son"),
            LovedOne::new("Sarah", "Daughter"),
            LovedOne::new("Dr. Patel", "Doctor"),
        ],
        notes: vec![
            PatientNote::new("Gets confused in dim lighting - keep hallway lights on"),
            PatientNote::with_category("Loves gardening in the morning", NoteCategory::Preference),
            PatientNote::with_category("Allergic to penicillin", NoteCategory::Allergy),
            PatientNote::with_category("Prefers to be called Maggie", NoteCategory::Preference),
        ],
    }
}

/// The device's current read on the patient
pub fn current_context() -> CurrentContext {
    CurrentContext {
        state: PatientState::Resting,
        summary: "Mom is resting in the living room".into(),
        detail: "Sitting on the couch, watching TV. Calm and comfortable.".into(),
        patient_name: "Mom".into(),
        last_updated: "10:32 AM".into(),
    }
}

/// Today's activity timeline, newest first
pub fn timeline() -> Vec<ContextEntry> {
    let entries = [
        (
            "10:32 AM",
            PatientState::Resting,
            "Resting in the living room",
            "Sitting on the couch, watching TV. Calm and comfortable.",
        ),
        (
            "10:15 AM",
            PatientState::Active,
            "Walking to the living room",
            "Moved from the kitchen to the living room. Steady gait, no concerns.",
        ),
        (
            "9:45 AM",
            PatientState::Active,
            "Walking in the garden",
            "Light physical activity in the backyard. Enjoying the morning sun.",
        ),
        (
            "9:15 AM",
            PatientState::Eating,
            "Having breakfast",
            "Sitting at the kitchen table. Oatmeal and tea. Ate well this morning.",
        ),
        (
            "8:45 AM",
            PatientState::Active,
            "Preparing breakfast",
            "Moving around the kitchen. Used the stove and kettle without issues.",
        ),
        (
            "8:30 AM",
            PatientState::Active,
            "Morning routine",
            "Moving between bedroom and bathroom. Getting ready for the day.",
        ),
        (
            "8:00 AM",
            PatientState::Resting,
            "Waking up",
            "Movement detected in the bedroom. Slowly transitioning from sleep.",
        ),
        (
            "7:30 AM",
            PatientState::Resting,
            "Sleeping",
            "Resting in bed. Breathing steady, no disturbance detected.",
        ),
        (
            "3:15 AM",
            PatientState::Confused,
            "Brief restlessness",
            "Sat up in bed momentarily. Appeared briefly disoriented, then settled back to sleep.",
        ),
        (
            "11:00 PM",
            PatientState::Resting,
            "Fell asleep",
            "Turned off bedside lamp. Settled into sleep for the night.",
        ),
    ];

    entries
        .into_iter()
        .map(|(timestamp, state, summary, detail)| ContextEntry {
            id: EntryId::new(),
            timestamp: timestamp.into(),
            state,
            summary: summary.into(),
            detail: detail.into(),
        })
        .collect()
}

/// Quick stats for the home view
pub fn quick_stats() -> Vec<QuickStat> {
    vec![
        QuickStat {
            label: "Mood".into(),
            value: "Calm".into(),
        },
        QuickStat {
            label: "Last Meal".into(),
            value: "9:15 AM".into(),
        },
        QuickStat {
            label: "Activity".into(),
            value: "Moderate".into(),
        },
    ]
}

/// Demo summary text for a cycled state on the home view
pub fn demo_summary(state: PatientState) -> &'static str {
    match state {
        PatientState::Resting => "Mom is resting in the living room",
        PatientState::Active => "Mom is moving around the house",
        PatientState::Eating => "Mom is having a meal",
        PatientState::Confused => "Mom seems briefly disoriented",
        PatientState::Emergency => "Emergency condition detected",
    }
}

/// Demo detail text for a cycled state on the home view
pub fn demo_detail(state: PatientState) -> &'static str {
    match state {
        PatientState::Resting => "Sitting on the couch, watching TV. Calm and comfortable.",
        PatientState::Active => "Steady movement between rooms. Normal gait, no concerns.",
        PatientState::Eating => "At the kitchen table. Eating at a normal pace.",
        PatientState::Confused => "Pausing mid-room and retracing steps. Monitoring closely.",
        PatientState::Emergency => "Possible fall detected. Check on the patient now.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_profile_shape() {
        let profile = seed_profile();
        assert_eq!(profile.name, "Margaret Johnson");
        assert_eq!(profile.age, 78);
        assert_eq!(profile.medications.len(), 3);
        assert_eq!(profile.loved_ones.len(), 3);
        assert_eq!(profile.notes.len(), 4);
        assert_eq!(profile.conditions.len(), 2);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let profile = seed_profile();
        let med_ids: HashSet<_> = profile.medications.iter().map(|m| m.id).collect();
        assert_eq!(med_ids.len(), profile.medications.len());
        let face_ids: HashSet<_> = profile.loved_ones.iter().map(|l| l.id).collect();
        assert_eq!(face_ids.len(), profile.loved_ones.len());
    }

    #[test]
    fn test_seed_loved_ones_have_no_photos() {
        // Photos are attached in-app; the seed data ships without them.
        assert!(seed_profile().loved_ones.iter().all(|l| !l.has_photo()));
    }

    #[test]
    fn test_timeline_has_ten_entries() {
        let entries = timeline();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].timestamp, "10:32 AM");
        assert_eq!(entries[8].state, PatientState::Confused);
    }

    #[test]
    fn test_demo_text_exists_for_all_states() {
        for state in PatientState::DEMO_CYCLE {
            assert!(!demo_summary(state).is_empty());
            assert!(!demo_detail(state).is_empty());
        }
    }
}
