//! Relay blink scheduler.
//!
//! While armed, the relay alternates between `On` for `relay_on_ms` and
//! `Off` for `relay_off_ms`.  Each flip is scheduled relative to the moment
//! the previous flip was applied, so loop latency accumulates per cycle
//! instead of being corrected against an absolute timeline.
//!
//! Output writes are best-effort: a failed write is logged and reported to
//! the caller, and the waveform carries on as if it had succeeded.
//!
//! Stopping clears the pending deadline in the same call that forces the
//! relay off, so no flip scheduled before the stop can run after it.

use log::{info, warn};

use crate::app::ports::RelayPort;
use crate::error::GpioError;

use super::RelayLevel;

/// Relay state record.  `level` is `Off` and `pending_deadline_ms` is
/// `None` whenever `armed` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayState {
    pub armed: bool,
    pub level: RelayLevel,
    pub pending_deadline_ms: Option<u64>,
}

impl RelayState {
    const DISARMED: Self = Self {
        armed: false,
        level: RelayLevel::Off,
        pending_deadline_ms: None,
    };
}

/// Result of a scheduled flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip {
    /// Level the relay was switched to.
    pub level: RelayLevel,
    /// Outcome of the output write.
    pub write: Result<(), GpioError>,
}

pub struct RelayBlinkScheduler {
    on_ms: u64,
    off_ms: u64,
    state: RelayState,
}

impl RelayBlinkScheduler {
    pub fn new(on_ms: u32, off_ms: u32) -> Self {
        Self {
            on_ms: u64::from(on_ms),
            off_ms: u64::from(off_ms),
            state: RelayState::DISARMED,
        }
    }

    /// Arm and switch the relay on immediately; first flip after `on_ms`.
    pub fn start(&mut self, now_ms: u64, relay: &mut impl RelayPort) -> Result<(), GpioError> {
        self.state = RelayState {
            armed: true,
            level: RelayLevel::On,
            pending_deadline_ms: Some(now_ms + self.on_ms),
        };
        info!("Relay loop: started (on {}ms / off {}ms)", self.on_ms, self.off_ms);
        Self::write(relay, RelayLevel::On)
    }

    /// Disarm, cancel the pending flip, and force the relay off.
    pub fn stop(&mut self, relay: &mut impl RelayPort) -> Result<(), GpioError> {
        self.state = RelayState::DISARMED;
        info!("Relay loop: stopped");
        Self::write(relay, RelayLevel::Off)
    }

    /// Apply the pending flip if it is due.
    pub fn poll(&mut self, now_ms: u64, relay: &mut impl RelayPort) -> Option<Flip> {
        let deadline = self.state.pending_deadline_ms?;
        if !self.state.armed || now_ms < deadline {
            return None;
        }

        let level = self.state.level.flipped();
        let write = Self::write(relay, level);
        self.state.level = level;
        self.state.pending_deadline_ms = Some(now_ms + self.hold_ms(level));
        Some(Flip { level, write })
    }

    /// When the next flip is due, if armed.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.state.pending_deadline_ms
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    fn hold_ms(&self, level: RelayLevel) -> u64 {
        match level {
            RelayLevel::On => self.on_ms,
            RelayLevel::Off => self.off_ms,
        }
    }

    fn write(relay: &mut impl RelayPort, level: RelayLevel) -> Result<(), GpioError> {
        relay.set_relay(level).inspect_err(|e| {
            warn!("Relay: write {:?} failed ({}), continuing", level, e);
        })
    }
}
