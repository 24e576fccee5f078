//! Multi-step form wizard
//!
//! Drives the sequences of single-field prompts that build profile records:
//! a three-step medication entry, a two-step loved-one entry, a one-step
//! note, the single-field profile edits, and the three-step emergency
//! contact edit. Each step is a variant of [`WizardFlow`] carrying exactly
//! the fields collected so far, so a half-finished record can never leak out:
//! the only way a [`ProfileUpdate`] is produced is a terminal-step submission.
//!
//! The machine is re-entrant: closed is both the initial and the terminal
//! state, and cancelling at any step discards all collected fields.

use crate::models::{EmergencyContact, LovedOne, Medication, PatientNote};
use crate::store::ProfileUpdate;

/// The flow kinds a caller can start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// Three steps: name, dosage, schedule
    AddMedication,
    /// Two steps: name, relationship
    AddLovedOne,
    /// One step: note text
    AddNote,
    /// One step: patient name
    EditName,
    /// One step: age (validated as an integer)
    EditAge,
    /// One step: blood type
    EditBloodType,
    /// One step: comma-separated conditions
    EditConditions,
    /// Three steps: contact name, relationship, phone
    EditEmergencyContact,
}

/// The current wizard step, carrying the fields collected by prior steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardFlow {
    MedicationName,
    MedicationDosage { name: String },
    MedicationSchedule { name: String, dosage: String },
    LovedOneName,
    LovedOneRelationship { name: String },
    NoteText,
    EditName,
    EditAge,
    EditBloodType,
    EditConditions,
    ContactName,
    ContactRelationship { name: String },
    ContactPhone { name: String, relationship: String },
}

/// Prompt metadata the input dialog renders for the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Dialog title
    pub title: String,
    /// Placeholder shown in the empty input field
    pub placeholder: &'static str,
    /// Label for the submit action ("Next" on non-terminal steps)
    pub submit_label: &'static str,
}

/// Result of submitting a value to the wizard
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// No flow is active; the submission was ignored
    Inactive,
    /// The input was rejected; the flow is unchanged and stays open
    Rejected { reason: String },
    /// A non-terminal step accepted the input and the flow advanced
    Advanced,
    /// The terminal step completed: the flow closed and this update
    /// carries the finished record
    Committed(ProfileUpdate),
}

/// The wizard: at most one flow active at a time
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    flow: Option<WizardFlow>,
}

impl Wizard {
    /// Create a closed wizard
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a flow is currently active
    pub fn is_open(&self) -> bool {
        self.flow.is_some()
    }

    /// The current step, if any
    pub fn flow(&self) -> Option<&WizardFlow> {
        self.flow.as_ref()
    }

    /// Open the initial step for a flow kind. Replaces any active flow.
    pub fn start(&mut self, kind: FlowKind) {
        self.flow = Some(match kind {
            FlowKind::AddMedication => WizardFlow::MedicationName,
            FlowKind::AddLovedOne => WizardFlow::LovedOneName,
            FlowKind::AddNote => WizardFlow::NoteText,
            FlowKind::EditName => WizardFlow::EditName,
            FlowKind::EditAge => WizardFlow::EditAge,
            FlowKind::EditBloodType => WizardFlow::EditBloodType,
            FlowKind::EditConditions => WizardFlow::EditConditions,
            FlowKind::EditEmergencyContact => WizardFlow::ContactName,
        });
    }

    /// Close the flow, discarding any collected fields
    pub fn cancel(&mut self) {
        self.flow = None;
    }

    /// Prompt metadata for the current step
    pub fn prompt(&self) -> Option<Prompt> {
        self.flow.as_ref().map(WizardFlow::prompt)
    }

    /// Submit a value to the current step.
    ///
    /// Blank input and an unparsable age both leave the flow open with a
    /// reason the dialog can surface, rather than silently dropping the
    /// submission.
    pub fn submit(&mut self, value: &str) -> SubmitOutcome {
        let Some(flow) = self.flow.take() else {
            return SubmitOutcome::Inactive;
        };

        let value = value.trim();
        if value.is_empty() {
            let reason = match flow {
                WizardFlow::EditAge => "Enter the age in years".to_string(),
                _ => "Please enter a value".to_string(),
            };
            self.flow = Some(flow);
            return SubmitOutcome::Rejected { reason };
        }

        match flow {
            WizardFlow::MedicationName => {
                self.flow = Some(WizardFlow::MedicationDosage {
                    name: value.to_string(),
                });
                SubmitOutcome::Advanced
            }
            WizardFlow::MedicationDosage { name } => {
                self.flow = Some(WizardFlow::MedicationSchedule {
                    name,
                    dosage: value.to_string(),
                });
                SubmitOutcome::Advanced
            }
            WizardFlow::MedicationSchedule { name, dosage } => SubmitOutcome::Committed(
                ProfileUpdate::AddMedication(Medication::new(name, dosage, value)),
            ),
            WizardFlow::LovedOneName => {
                self.flow = Some(WizardFlow::LovedOneRelationship {
                    name: value.to_string(),
                });
                SubmitOutcome::Advanced
            }
            WizardFlow::LovedOneRelationship { name } => {
                SubmitOutcome::Committed(ProfileUpdate::AddLovedOne(LovedOne::new(name, value)))
            }
            WizardFlow::NoteText => {
                SubmitOutcome::Committed(ProfileUpdate::AddNote(PatientNote::new(value)))
            }
            WizardFlow::EditName => {
                SubmitOutcome::Committed(ProfileUpdate::SetName(value.to_string()))
            }
            WizardFlow::EditAge => match value.parse::<u32>() {
                Ok(age) => SubmitOutcome::Committed(ProfileUpdate::SetAge(age)),
                Err(_) => {
                    // Keep the prompt open instead of silently dropping the edit
                    self.flow = Some(WizardFlow::EditAge);
                    SubmitOutcome::Rejected {
                        reason: format!("\"{value}\" is not a number"),
                    }
                }
            },
            WizardFlow::EditBloodType => {
                SubmitOutcome::Committed(ProfileUpdate::SetBloodType(value.to_string()))
            }
            WizardFlow::EditConditions => {
                let conditions: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect();
                SubmitOutcome::Committed(ProfileUpdate::SetConditions(conditions))
            }
            WizardFlow::ContactName => {
                self.flow = Some(WizardFlow::ContactRelationship {
                    name: value.to_string(),
                });
                SubmitOutcome::Advanced
            }
            WizardFlow::ContactRelationship { name } => {
                self.flow = Some(WizardFlow::ContactPhone {
                    name,
                    relationship: value.to_string(),
                });
                SubmitOutcome::Advanced
            }
            WizardFlow::ContactPhone { name, relationship } => {
                SubmitOutcome::Committed(ProfileUpdate::SetEmergencyContact(EmergencyContact {
                    name,
                    relationship,
                    phone: value.to_string(),
                }))
            }
        }
    }
}

impl WizardFlow {
    /// Prompt metadata for this step
    pub fn prompt(&self) -> Prompt {
        match self {
            Self::MedicationName => Prompt {
                title: "Add Medication".into(),
                placeholder: "Medication name",
                submit_label: "Next",
            },
            Self::MedicationDosage { name } => Prompt {
                title: format!("Dosage for {name}"),
                placeholder: "e.g. 10mg",
                submit_label: "Next",
            },
            Self::MedicationSchedule { name, .. } => Prompt {
                title: format!("Schedule for {name}"),
                placeholder: "e.g. 8:00 AM daily",
                submit_label: "Add",
            },
            Self::LovedOneName => Prompt {
                title: "Add Loved One".into(),
                placeholder: "Their name",
                submit_label: "Next",
            },
            Self::LovedOneRelationship { .. } => Prompt {
                title: "Relationship to patient".into(),
                placeholder: "e.g. Son, Daughter, Doctor",
                submit_label: "Add",
            },
            Self::NoteText => Prompt {
                title: "Add Note or Quirk".into(),
                placeholder: "Describe the quirk, allergy, or preference",
                submit_label: "Add",
            },
            Self::EditName => Prompt {
                title: "Edit Patient Name".into(),
                placeholder: "Full name",
                submit_label: "Save",
            },
            Self::EditAge => Prompt {
                title: "Edit Age".into(),
                placeholder: "Age in years",
                submit_label: "Save",
            },
            Self::EditBloodType => Prompt {
                title: "Edit Blood Type".into(),
                placeholder: "e.g. A+, O-, AB+",
                submit_label: "Save",
            },
            Self::EditConditions => Prompt {
                title: "Edit Conditions".into(),
                placeholder: "Comma-separated list",
                submit_label: "Save",
            },
            Self::ContactName => Prompt {
                title: "Emergency Contact Name".into(),
                placeholder: "Contact's full name",
                submit_label: "Next",
            },
            Self::ContactRelationship { .. } => Prompt {
                title: "Relationship".into(),
                placeholder: "e.g. Son, Daughter, Nurse",
                submit_label: "Next",
            },
            Self::ContactPhone { .. } => Prompt {
                title: "Phone Number".into(),
                placeholder: "(555) 000-0000",
                submit_label: "Save",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed(outcome: SubmitOutcome) -> ProfileUpdate {
        match outcome {
            SubmitOutcome::Committed(update) => update,
            other => panic!("expected Committed, got {other:?}"),
        }
    }

    #[test]
    fn test_add_medication_three_steps() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::AddMedication);
        assert_eq!(wizard.flow(), Some(&WizardFlow::MedicationName));

        assert_eq!(wizard.submit("Donepezil"), SubmitOutcome::Advanced);
        assert_eq!(
            wizard.flow(),
            Some(&WizardFlow::MedicationDosage {
                name: "Donepezil".into()
            })
        );

        assert_eq!(wizard.submit("10mg"), SubmitOutcome::Advanced);
        assert_eq!(
            wizard.flow(),
            Some(&WizardFlow::MedicationSchedule {
                name: "Donepezil".into(),
                dosage: "10mg".into()
            })
        );

        let update = committed(wizard.submit("8:00 AM daily"));
        let ProfileUpdate::AddMedication(med) = update else {
            panic!("expected AddMedication");
        };
        assert_eq!(med.name, "Donepezil");
        assert_eq!(med.dosage, "10mg");
        assert_eq!(med.schedule, "8:00 AM daily");
        assert!(!wizard.is_open());
    }

    #[test]
    fn test_add_loved_one_two_steps() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::AddLovedOne);
        assert_eq!(wizard.submit("Emma"), SubmitOutcome::Advanced);
        let ProfileUpdate::AddLovedOne(person) = committed(wizard.submit("Granddaughter")) else {
            panic!("expected AddLovedOne");
        };
        assert_eq!(person.name, "Emma");
        assert_eq!(person.relationship, "Granddaughter");
        assert!(person.photo.is_none());
        assert!(!wizard.is_open());
    }

    #[test]
    fn test_single_step_note() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::AddNote);
        let ProfileUpdate::AddNote(note) = committed(wizard.submit("Hums while cooking")) else {
            panic!("expected AddNote");
        };
        assert_eq!(note.text, "Hums while cooking");
        assert!(!wizard.is_open());
    }

    #[test]
    fn test_cancel_discards_progress() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::AddMedication);
        wizard.submit("Donepezil");
        wizard.submit("10mg");
        wizard.cancel();
        assert!(!wizard.is_open());

        // Restarting begins from the first step with nothing carried over
        wizard.start(FlowKind::AddMedication);
        assert_eq!(wizard.flow(), Some(&WizardFlow::MedicationName));
    }

    #[test]
    fn test_blank_input_leaves_flow_unchanged() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::AddLovedOne);
        wizard.submit("Emma");
        let before = wizard.flow().cloned();

        for blank in ["", "   ", "\t"] {
            let outcome = wizard.submit(blank);
            assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
            assert_eq!(wizard.flow(), before.as_ref());
        }
    }

    #[test]
    fn test_submitted_values_are_trimmed() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::EditName);
        let ProfileUpdate::SetName(name) = committed(wizard.submit("  Margaret J.  ")) else {
            panic!("expected SetName");
        };
        assert_eq!(name, "Margaret J.");
    }

    #[test]
    fn test_edit_age_valid() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::EditAge);
        assert_eq!(
            wizard.submit("81"),
            SubmitOutcome::Committed(ProfileUpdate::SetAge(81))
        );
        assert!(!wizard.is_open());
    }

    #[test]
    fn test_edit_age_invalid_keeps_prompt_open() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::EditAge);
        let outcome = wizard.submit("eighty-one");
        let SubmitOutcome::Rejected { reason } = outcome else {
            panic!("expected Rejected");
        };
        assert!(reason.contains("eighty-one"));
        // The flow stays open so the caregiver can correct the input
        assert_eq!(wizard.flow(), Some(&WizardFlow::EditAge));

        // A corrected value still commits
        assert_eq!(
            wizard.submit("81"),
            SubmitOutcome::Committed(ProfileUpdate::SetAge(81))
        );
    }

    #[test]
    fn test_edit_conditions_splits_and_trims() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::EditConditions);
        let ProfileUpdate::SetConditions(conditions) =
            committed(wizard.submit("Diabetes,  , Hypertension"))
        else {
            panic!("expected SetConditions");
        };
        assert_eq!(
            conditions,
            vec!["Diabetes".to_string(), "Hypertension".to_string()]
        );
    }

    #[test]
    fn test_emergency_contact_three_steps_carries_fields() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::EditEmergencyContact);
        assert_eq!(wizard.submit("Sarah Johnson"), SubmitOutcome::Advanced);
        assert_eq!(wizard.submit("Daughter"), SubmitOutcome::Advanced);
        assert_eq!(
            wizard.flow(),
            Some(&WizardFlow::ContactPhone {
                name: "Sarah Johnson".into(),
                relationship: "Daughter".into()
            })
        );

        let ProfileUpdate::SetEmergencyContact(contact) =
            committed(wizard.submit("(555) 987-6543"))
        else {
            panic!("expected SetEmergencyContact");
        };
        assert_eq!(contact.name, "Sarah Johnson");
        assert_eq!(contact.relationship, "Daughter");
        assert_eq!(contact.phone, "(555) 987-6543");
    }

    #[test]
    fn test_n_step_flows_emit_exactly_one_record() {
        // Each kind, submitted with N valid values, commits on the Nth
        // submission and on no earlier one.
        let cases: [(FlowKind, &[&str]); 8] = [
            (FlowKind::AddMedication, &["Donepezil", "10mg", "Daily"]),
            (FlowKind::AddLovedOne, &["Emma", "Granddaughter"]),
            (FlowKind::AddNote, &["Hums while cooking"]),
            (FlowKind::EditName, &["Margaret"]),
            (FlowKind::EditAge, &["78"]),
            (FlowKind::EditBloodType, &["A+"]),
            (FlowKind::EditConditions, &["Diabetes"]),
            (
                FlowKind::EditEmergencyContact,
                &["John", "Son", "(555) 012-3456"],
            ),
        ];

        for (kind, inputs) in cases {
            let mut wizard = Wizard::new();
            wizard.start(kind);
            let mut commits = 0;
            for (i, input) in inputs.iter().enumerate() {
                match wizard.submit(input) {
                    SubmitOutcome::Advanced => {
                        assert!(i + 1 < inputs.len(), "{kind:?} advanced on terminal step")
                    }
                    SubmitOutcome::Committed(_) => {
                        commits += 1;
                        assert_eq!(i + 1, inputs.len(), "{kind:?} committed early");
                    }
                    other => panic!("{kind:?} unexpected outcome {other:?}"),
                }
            }
            assert_eq!(commits, 1, "{kind:?} should commit exactly once");
            assert!(!wizard.is_open(), "{kind:?} should close after commit");
        }
    }

    #[test]
    fn test_submit_when_closed_is_inactive() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.submit("anything"), SubmitOutcome::Inactive);
    }

    #[test]
    fn test_start_replaces_active_flow() {
        let mut wizard = Wizard::new();
        wizard.start(FlowKind::AddMedication);
        wizard.submit("Donepezil");
        wizard.start(FlowKind::AddNote);
        assert_eq!(wizard.flow(), Some(&WizardFlow::NoteText));
    }

    #[test]
    fn test_prompt_metadata_tracks_step() {
        let mut wizard = Wizard::new();
        assert!(wizard.prompt().is_none());

        wizard.start(FlowKind::AddMedication);
        assert_eq!(wizard.prompt().unwrap().title, "Add Medication");
        assert_eq!(wizard.prompt().unwrap().submit_label, "Next");

        wizard.submit("Donepezil");
        assert_eq!(wizard.prompt().unwrap().title, "Dosage for Donepezil");

        wizard.submit("10mg");
        let prompt = wizard.prompt().unwrap();
        assert_eq!(prompt.title, "Schedule for Donepezil");
        assert_eq!(prompt.submit_label, "Add");
    }
}
