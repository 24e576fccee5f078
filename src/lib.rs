//! CareLink - terminal companion for elder care
//!
//! CareLink pairs a caregiver with an intelligent care device worn by an
//! elderly family member. It shows the device's live read on the patient,
//! today's activity timeline, and lets the caregiver maintain the patient
//! profile (medications, recognized faces, notes and quirks) that gets
//! synced down to the device.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings and device constants
//! - `error`: Custom error types
//! - `models`: Core data models (profile, medications, faces, notes, context)
//! - `store`: Copy-on-write profile store and its update operations
//! - `wizard`: The multi-step form wizard driving every entry flow
//! - `sync`: The simulated device link
//! - `data`: Seed fixtures for the demo profile and timeline
//! - `display`: Plain-text formatting for the CLI subcommands
//! - `tui`: The interactive terminal interface

pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod store;
pub mod sync;
pub mod tui;
pub mod wizard;

pub use error::{CarelinkError, CarelinkResult};
