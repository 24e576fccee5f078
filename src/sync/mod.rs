//! Mock device synchronization
//!
//! Simulates pushing profile data to the monitoring device: each sync target
//! sleeps a fixed artificial delay, logs the request it would have made, and
//! returns a canned success payload. A real implementation would replace
//! [`DeviceLink`] with an actual transport.

pub mod device;

use std::fmt;

pub use device::DeviceLink;

/// Lifecycle of a sync action, shown inline next to its button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    /// Nothing in flight, no recent result
    #[default]
    Idle,
    /// A sync thread is running
    Syncing,
    /// Last sync succeeded (auto-resets to idle)
    Success,
    /// Last sync failed (auto-resets to idle)
    Error,
}

impl SyncStatus {
    /// Whether a new sync may be started
    pub fn can_start(&self) -> bool {
        !matches!(self, Self::Syncing)
    }
}

/// What a sync pushes to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncTarget {
    /// Profile scalars only
    Profile,
    /// The medication list
    Medications,
    /// Loved-one face data (entries without a photo are skipped)
    Faces,
    /// Notes and quirks
    Notes,
    /// The profile plus every collection
    Everything,
}

impl SyncTarget {
    /// All targets, in display order
    pub const ALL: [SyncTarget; 5] = [
        SyncTarget::Profile,
        SyncTarget::Medications,
        SyncTarget::Faces,
        SyncTarget::Notes,
        SyncTarget::Everything,
    ];

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Medications => "Medications",
            Self::Faces => "Faces",
            Self::Notes => "Notes",
            Self::Everything => "Everything",
        }
    }

    /// The endpoint path the real device API would expose
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Profile => "/device/profile",
            Self::Medications => "/device/medications",
            Self::Faces => "/device/faces/bulk",
            Self::Notes => "/device/notes",
            Self::Everything => "/device/sync-all",
        }
    }
}

impl fmt::Display for SyncTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Canned response from the simulated device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResponse {
    /// Whether the simulated call succeeded
    pub success: bool,

    /// Human-readable result message
    pub message: String,

    /// Identifier of the device that "handled" the call
    pub device_id: String,

    /// Wall-clock completion time (e.g. "10:32:05 AM")
    pub timestamp: String,
}

impl SyncResponse {
    /// Status this response maps to in the UI
    pub fn status(&self) -> SyncStatus {
        if self.success {
            SyncStatus::Success
        } else {
            SyncStatus::Error
        }
    }
}
