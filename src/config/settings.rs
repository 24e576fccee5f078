//! Runtime settings for CareLink
//!
//! Settings are assembled from defaults plus CLI overrides. Nothing is
//! written to disk: the companion app keeps no persistent state.

use serde::{Deserialize, Serialize};

use crate::error::{CarelinkError, CarelinkResult};

/// Default identifier of the paired monitoring device
pub const DEFAULT_DEVICE_ID: &str = "ARD-UNO-R4-0042";

/// Marketing name of the paired device hardware
pub const DEVICE_MODEL: &str = "Arduino Uno R4";

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Identifier of the paired device
    pub device_id: String,

    /// TUI tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Shrink mock sync delays to near-zero (demo and test mode)
    pub fast_sync: bool,

    /// Seconds a sync result stays visible before resetting to idle
    pub status_reset_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID.to_string(),
            tick_rate_ms: 250,
            fast_sync: false,
            status_reset_secs: 3,
        }
    }
}

impl Settings {
    /// Apply CLI overrides on top of defaults
    pub fn with_overrides(device_id: Option<String>, fast_sync: bool) -> CarelinkResult<Self> {
        let mut settings = Self::default();
        if let Some(device_id) = device_id {
            let device_id = device_id.trim().to_string();
            if device_id.is_empty() {
                return Err(CarelinkError::Config(
                    "device id must not be blank".into(),
                ));
            }
            settings.device_id = device_id;
        }
        settings.fast_sync = fast_sync;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.device_id, DEFAULT_DEVICE_ID);
        assert_eq!(settings.tick_rate_ms, 250);
        assert!(!settings.fast_sync);
        assert_eq!(settings.status_reset_secs, 3);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let settings = Settings::with_overrides(Some("ARD-UNO-R4-0099".into()), true).unwrap();
        assert_eq!(settings.device_id, "ARD-UNO-R4-0099");
        assert!(settings.fast_sync);
    }

    #[test]
    fn test_no_override_keeps_default_device() {
        let settings = Settings::with_overrides(None, false).unwrap();
        assert_eq!(settings.device_id, DEFAULT_DEVICE_ID);
    }

    #[test]
    fn test_blank_device_id_rejected() {
        let err = Settings::with_overrides(Some("   ".into()), false).unwrap_err();
        assert!(matches!(err, CarelinkError::Config(_)));
    }
}
