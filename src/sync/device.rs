//! The simulated device link
//!
//! Blocking calls that sleep a per-target delay and hand back canned
//! responses. The TUI runs them on a spawned thread and collects the result
//! over its event channel; the CLI calls them directly.

use std::thread;
use std::time::Duration;

use chrono::Local;
use tracing::info;

use crate::config::Settings;
use crate::models::{LovedOne, PatientProfile};

use super::{SyncResponse, SyncTarget};

/// Delay used for every target when fast sync is enabled
const FAST_DELAY: Duration = Duration::from_millis(10);

/// Handle to the (simulated) paired device
#[derive(Debug, Clone)]
pub struct DeviceLink {
    device_id: String,
    fast: bool,
}

impl DeviceLink {
    /// Create a link from settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            device_id: settings.device_id.clone(),
            fast: settings.fast_sync,
        }
    }

    /// The paired device's identifier
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Artificial delay for a sync target
    pub fn delay_for(&self, target: SyncTarget) -> Duration {
        if self.fast {
            return FAST_DELAY;
        }
        match target {
            SyncTarget::Profile => Duration::from_millis(1500),
            SyncTarget::Medications => Duration::from_millis(1800),
            SyncTarget::Faces => Duration::from_millis(2500),
            SyncTarget::Notes => Duration::from_millis(1200),
            SyncTarget::Everything => Duration::from_millis(3000),
        }
    }

    /// Push a target to the device. Blocks for the artificial delay.
    pub fn sync(&self, target: SyncTarget, profile: &PatientProfile) -> SyncResponse {
        thread::sleep(self.delay_for(target));

        let message = match target {
            SyncTarget::Profile => {
                info!(
                    target: "carelink::sync",
                    device_id = %self.device_id,
                    name = %profile.name,
                    age = profile.age,
                    "POST {}", target.endpoint()
                );
                format!(
                    "Patient profile for \"{}\" synced to device {}",
                    profile.name, self.device_id
                )
            }
            SyncTarget::Medications => {
                info!(
                    target: "carelink::sync",
                    device_id = %self.device_id,
                    count = profile.medications.len(),
                    "POST {}", target.endpoint()
                );
                format!(
                    "{} medication(s) synced. Device will alert at scheduled times.",
                    profile.medications.len()
                )
            }
            SyncTarget::Faces => {
                let with_photo = profile.loved_ones.iter().filter(|l| l.has_photo()).count();
                let skipped = profile.loved_ones.len() - with_photo;
                info!(
                    target: "carelink::sync",
                    device_id = %self.device_id,
                    total = profile.loved_ones.len(),
                    with_photo,
                    skipped,
                    "POST {}", target.endpoint()
                );
                format!("{with_photo} face(s) synced, {skipped} skipped (no photo).")
            }
            SyncTarget::Notes => {
                info!(
                    target: "carelink::sync",
                    device_id = %self.device_id,
                    count = profile.notes.len(),
                    "POST {}", target.endpoint()
                );
                format!(
                    "{} note(s) synced. Device context updated.",
                    profile.notes.len()
                )
            }
            SyncTarget::Everything => {
                let total = profile.total_sync_items();
                info!(
                    target: "carelink::sync",
                    device_id = %self.device_id,
                    total_items = total,
                    "POST {}", target.endpoint()
                );
                format!(
                    "Full sync complete. {} items pushed to device {}.",
                    total, self.device_id
                )
            }
        };

        self.response(true, message)
    }

    /// Upload one loved one's face data. Blocks for the artificial delay.
    pub fn upload_face(&self, person: &LovedOne) -> SyncResponse {
        thread::sleep(if self.fast {
            FAST_DELAY
        } else {
            Duration::from_millis(2200)
        });

        let embedding_id = format!("emb_{}_{}", person.id, Local::now().timestamp_millis());
        info!(
            target: "carelink::sync",
            device_id = %self.device_id,
            name = %person.name,
            relationship = %person.relationship,
            has_photo = person.has_photo(),
            embedding_id = %embedding_id,
            "POST /device/faces"
        );

        self.response(
            true,
            format!(
                "Face data for \"{}\" uploaded. Device can now recognize them.",
                person.name
            ),
        )
    }

    fn response(&self, success: bool, message: String) -> SyncResponse {
        SyncResponse {
            success,
            message,
            device_id: self.device_id.clone(),
            timestamp: Local::now().format("%I:%M:%S %p").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_profile;

    fn fast_link() -> DeviceLink {
        let settings = Settings {
            fast_sync: true,
            ..Settings::default()
        };
        DeviceLink::new(&settings)
    }

    #[test]
    fn test_fast_mode_shrinks_delays() {
        let link = fast_link();
        for target in SyncTarget::ALL {
            assert_eq!(link.delay_for(target), FAST_DELAY);
        }

        let slow = DeviceLink::new(&Settings::default());
        assert_eq!(
            slow.delay_for(SyncTarget::Everything),
            Duration::from_millis(3000)
        );
        assert_eq!(
            slow.delay_for(SyncTarget::Notes),
            Duration::from_millis(1200)
        );
    }

    #[test]
    fn test_medication_sync_message() {
        let link = fast_link();
        let profile = seed_profile();
        let response = link.sync(SyncTarget::Medications, &profile);
        assert!(response.success);
        assert_eq!(
            response.message,
            "3 medication(s) synced. Device will alert at scheduled times."
        );
        assert_eq!(response.device_id, "ARD-UNO-R4-0042");
    }

    #[test]
    fn test_face_sync_counts_skipped() {
        let link = fast_link();
        let profile = seed_profile();
        // Nobody has a photo yet
        let response = link.sync(SyncTarget::Faces, &profile);
        assert_eq!(response.message, "0 face(s) synced, 3 skipped (no photo).");

        let id = profile.loved_ones[0].id;
        let with_photo = profile.with_photo(id, "photos/john.jpg");
        let response = link.sync(SyncTarget::Faces, &with_photo);
        assert_eq!(response.message, "1 face(s) synced, 2 skipped (no photo).");
    }

    #[test]
    fn test_full_sync_counts_all_items() {
        let link = fast_link();
        let profile = seed_profile();
        let response = link.sync(SyncTarget::Everything, &profile);
        // 1 profile + 3 medications + 3 loved ones + 4 notes
        assert!(response.message.starts_with("Full sync complete. 11 items"));
    }

    #[test]
    fn test_profile_sync_names_patient_and_device() {
        let link = fast_link();
        let response = link.sync(SyncTarget::Profile, &seed_profile());
        assert_eq!(
            response.message,
            "Patient profile for \"Margaret Johnson\" synced to device ARD-UNO-R4-0042"
        );
    }

    #[test]
    fn test_upload_face_message() {
        let link = fast_link();
        let person = LovedOne::new("John", "Son");
        let response = link.upload_face(&person);
        assert_eq!(
            response.message,
            "Face data for \"John\" uploaded. Device can now recognize them."
        );
    }
}
