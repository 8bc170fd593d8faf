//! Relay loop firmware library.
//!
//! Exposes the control core, drivers and adapters for the firmware binary
//! and for integration testing.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module, with host
//! simulations in its place.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod scheduler;
