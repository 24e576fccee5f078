//! Configuration for CareLink
//!
//! Runtime settings only; the app persists nothing.

pub mod settings;

pub use settings::{Settings, DEFAULT_DEVICE_ID, DEVICE_MODEL};
