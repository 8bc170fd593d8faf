//! Default GPIO assignments for the relay loop board.
//!
//! Single source of truth for [`SystemConfig::default`](crate::config::SystemConfig).
//! Drivers never hard-code pin numbers; they take them from the config.

// ---------------------------------------------------------------------------
// Inputs (momentary tact switches, active HIGH with pull-down)
// ---------------------------------------------------------------------------

/// Tact switch that starts / stops the relay loop.
pub const CONTROL_SWITCH_GPIO: i32 = 18;

/// Tact switch that requests a power-off when held.
pub const SHUTDOWN_SWITCH_GPIO: i32 = 36;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Relay touch board input.  HIGH = relay energised (touch on).
pub const RELAY_GPIO: i32 = 16;
