//! Profile display formatting
//!
//! Formats the patient profile for terminal output in table and detail views.

use crate::models::PatientProfile;

/// Format the full profile as a detail view with all sections
pub fn format_profile(profile: &PatientProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("Patient: {}\n", profile.name));
    output.push_str(&format!("Age:     {}\n", profile.age));
    output.push_str(&format!("Blood:   {}\n", profile.blood_type));
    output.push_str(&format!("Conditions: {}\n", profile.conditions.join(", ")));
    output.push_str(&format!(
        "Emergency: {} ({}) - {}\n",
        profile.emergency_contact.name,
        profile.emergency_contact.relationship,
        profile.emergency_contact.phone
    ));
    output.push('\n');

    output.push_str("Medications\n");
    output.push_str(&format_medication_list(profile));
    output.push('\n');

    output.push_str("Recognized Faces\n");
    output.push_str(&format_loved_one_list(profile));
    output.push('\n');

    output.push_str("Notes & Quirks\n");
    output.push_str(&format_note_list(profile));

    output
}

/// Format the medication list as a table
pub fn format_medication_list(profile: &PatientProfile) -> String {
    if profile.medications.is_empty() {
        return "No medications.\n".to_string();
    }

    let name_width = column_width(profile.medications.iter().map(|m| m.name.len()), 4);
    let dosage_width = column_width(profile.medications.iter().map(|m| m.dosage.len()), 6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<dosage_width$}  {:<20}  {}\n",
        "Name", "Dosage", "Schedule", "Notes",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<dosage_width$}  {:-<20}  {:-<16}\n",
        "", "", "", "",
    ));

    for med in &profile.medications {
        output.push_str(&format!(
            "{:<name_width$}  {:<dosage_width$}  {:<20}  {}\n",
            med.name,
            med.dosage,
            med.schedule,
            med.notes.as_deref().unwrap_or(""),
        ));
    }

    output
}

/// Format the loved-one list as a table
pub fn format_loved_one_list(profile: &PatientProfile) -> String {
    if profile.loved_ones.is_empty() {
        return "No loved ones.\n".to_string();
    }

    let name_width = column_width(profile.loved_ones.iter().map(|l| l.name.len()), 4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<14}  {}\n",
        "Name", "Relationship", "Photo",
    ));
    output.push_str(&format!("{:-<name_width$}  {:-<14}  {:-<8}\n", "", "", ""));

    for person in &profile.loved_ones {
        let photo = if person.has_photo() {
            "attached"
        } else {
            "missing"
        };
        output.push_str(&format!(
            "{:<name_width$}  {:<14}  {}\n",
            person.name, person.relationship, photo,
        ));
    }

    output
}

/// Format the note list with category badges
pub fn format_note_list(profile: &PatientProfile) -> String {
    if profile.notes.is_empty() {
        return "No notes.\n".to_string();
    }

    let mut output = String::new();
    for note in &profile.notes {
        output.push_str(&format!("[{:<10}] {}\n", note.category.label(), note.text));
    }
    output
}

fn column_width(lengths: impl Iterator<Item = usize>, min: usize) -> usize {
    lengths.max().unwrap_or(min).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_profile;

    #[test]
    fn test_format_profile_includes_all_sections() {
        let output = format_profile(&seed_profile());
        assert!(output.contains("Patient: Margaret Johnson"));
        assert!(output.contains("Medications"));
        assert!(output.contains("Recognized Faces"));
        assert!(output.contains("Notes & Quirks"));
        assert!(output.contains("Emergency: John Johnson (Son) - (555) 012-3456"));
    }

    #[test]
    fn test_medication_table_rows() {
        let output = format_medication_list(&seed_profile());
        assert!(output.contains("Donepezil"));
        assert!(output.contains("Take with breakfast"));
        // Header plus separator plus three rows
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_loved_one_photo_column() {
        let profile = seed_profile();
        let output = format_loved_one_list(&profile);
        assert!(output.contains("missing"));
        let id = profile.loved_ones[0].id;
        let output = format_loved_one_list(&profile.with_photo(id, "photos/john.jpg"));
        assert!(output.contains("attached"));
    }

    #[test]
    fn test_note_badges() {
        let output = format_note_list(&seed_profile());
        assert!(output.contains("[Allergy   ] Allergic to penicillin"));
    }
}
