//! Port traits: the hexagonal boundary between control logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (switch inputs, relay output, power-off, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the control core never touches hardware
//! directly.
//!
//! Hardware ports return typed errors; the service treats every one of them
//! as transient and keeps the loop running.

use crate::control::{RelayLevel, SwitchId, SwitchLevel};
use crate::error::{GpioError, ShutdownError};

// ───────────────────────────────────────────────────────────────
// Switch port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one sample of a switch's logical level.
pub trait SwitchPort {
    /// Sample `switch` once.  An error means "indeterminate this poll".
    fn sample(&mut self, switch: SwitchId) -> Result<SwitchLevel, GpioError>;
}

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: drive the relay output.
pub trait RelayPort {
    fn set_relay(&mut self, level: RelayLevel) -> Result<(), GpioError>;
}

// ───────────────────────────────────────────────────────────────
// Shutdown port (driven adapter: domain → OS / power)
// ───────────────────────────────────────────────────────────────

/// Launches the system power-off.  The domain does not wait on, or depend
/// on, the outcome beyond logging it.
pub trait ShutdownPort {
    fn request_shutdown(&mut self) -> Result<(), ShutdownError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from loading [`SystemConfig`](crate::config::SystemConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Config source could not be parsed.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
