//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::control::{RelayLevel, SwitchId};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started; relay forced off, polls armed.
    Started,

    /// A debounced rising edge on a switch.
    SwitchPressed(SwitchId),

    /// A switch read failed; that poll was skipped.
    SwitchReadFailed(SwitchId),

    /// The relay loop was armed.
    RelayLoopStarted,

    /// The relay loop was disarmed and the relay forced off.
    RelayLoopStopped,

    /// A scheduled flip was applied.
    RelayFlipped(RelayLevel),

    /// Writing the relay output failed; scheduling continues.
    RelayWriteFailed(RelayLevel),

    /// The shutdown switch started a hold.
    HoldStarted,

    /// The shutdown switch was released before the threshold.
    HoldCancelled { held_ms: u64 },

    /// The hold threshold was reached; the power-off is being launched.
    ShutdownRequested { held_ms: u64 },

    /// The power-off could not be launched.  Not retried.
    ShutdownFailed,
}
