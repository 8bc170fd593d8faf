//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC on the board, stderr on host).  Normal flow
//! goes out at `info`, failures at `warn`.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("START | relay off, polls armed"),
            AppEvent::SwitchPressed(id) => info!("SWITCH | {:?} pressed", id),
            AppEvent::SwitchReadFailed(id) => warn!("SWITCH | {:?} read failed, poll skipped", id),
            AppEvent::RelayLoopStarted => info!("LOOP | started"),
            AppEvent::RelayLoopStopped => info!("LOOP | stopped, relay off"),
            AppEvent::RelayFlipped(level) => info!("RELAY | {:?}", level),
            AppEvent::RelayWriteFailed(level) => warn!("RELAY | write {:?} failed", level),
            AppEvent::HoldStarted => info!("HOLD | started"),
            AppEvent::HoldCancelled { held_ms } => info!("HOLD | released after {}ms", held_ms),
            AppEvent::ShutdownRequested { held_ms } => {
                info!("SHUTDOWN | held {}ms, powering off", held_ms)
            }
            AppEvent::ShutdownFailed => warn!("SHUTDOWN | power-off could not be launched"),
        }
    }
}
