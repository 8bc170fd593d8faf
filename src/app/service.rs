//! Application service: the hexagonal core.
//!
//! [`AppService`] owns every control state record (debouncers, toggle,
//! relay scheduler, long-press detector, poll scheduler) and drives them
//! from a single [`tick`](AppService::tick).  All I/O flows through port
//! traits injected at call sites, making the entire service testable with
//! mock adapters and a simulated clock.
//!
//! ```text
//!   SwitchPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                  │          AppService           │
//!    RelayPort ◀── │ Debounce · Toggle · Blink ·   │ ──▶ ShutdownPort
//!                  │ LongPress · Scheduler         │
//!                  └──────────────────────────────┘
//! ```
//!
//! Within one tick every poll handler runs read → decide → act to
//! completion before the next handler starts.

use log::{error, info, warn};

use crate::config::SystemConfig;
use crate::control::debounce::{Debouncer, SwitchEdge};
use crate::control::long_press::{HoldEvent, HoldPhase, LongPressDetector};
use crate::control::relay_blink::{RelayBlinkScheduler, RelayState};
use crate::control::toggle::{LoopCommand, LoopState, ToggleController};
use crate::control::{RelayLevel, SwitchId, SwitchLevel};
use crate::scheduler::{PollTimer, Scheduler};

use super::events::AppEvent;
use super::ports::{EventSink, RelayPort, ShutdownPort, SwitchPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all control logic.
pub struct AppService {
    scheduler: Scheduler,
    poll_interval_ms: u32,
    control_switch: Debouncer,
    shutdown_switch: Debouncer,
    toggle: ToggleController,
    relay: RelayBlinkScheduler,
    long_press: LongPressDetector,
}

impl AppService {
    /// Construct the service from a validated configuration.
    ///
    /// Does **not** touch hardware; call [`start`](Self::start) next.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            scheduler: Scheduler::new(),
            poll_interval_ms: config.poll_interval_ms,
            control_switch: Debouncer::new(),
            shutdown_switch: Debouncer::new(),
            toggle: ToggleController::new(),
            relay: RelayBlinkScheduler::new(config.relay_on_ms, config.relay_off_ms),
            long_press: LongPressDetector::new(config.hold_threshold_ms),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Force the relay off and arm both switch polls, due immediately.
    pub fn start(&mut self, now_ms: u64, hw: &mut impl RelayPort, sink: &mut impl EventSink) {
        if hw.set_relay(RelayLevel::Off).is_err() {
            warn!("Relay: initial off write failed");
            sink.emit(&AppEvent::RelayWriteFailed(RelayLevel::Off));
        }

        for timer in [PollTimer::ControlSwitch, PollTimer::ShutdownSwitch] {
            if self.scheduler.add(timer, self.poll_interval_ms, now_ms).is_err() {
                error!("Scheduler full, {:?} not armed", timer);
            }
        }

        sink.emit(&AppEvent::Started);
        info!("AppService started (poll every {}ms)", self.poll_interval_ms);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run every handler that is due at `now_ms`: switch polls first (in
    /// scheduler order), then a pending relay flip.
    ///
    /// The `hw` parameter satisfies **both** [`SwitchPort`] and
    /// [`RelayPort`], which avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl SwitchPort + RelayPort),
        shutdown: &mut impl ShutdownPort,
        sink: &mut impl EventSink,
    ) {
        for timer in self.scheduler.take_due(now_ms) {
            match timer {
                PollTimer::ControlSwitch => self.poll_control(now_ms, hw, sink),
                PollTimer::ShutdownSwitch => self.poll_shutdown(now_ms, hw, shutdown, sink),
            }
            self.scheduler.complete(timer, now_ms);
        }

        if let Some(flip) = self.relay.poll(now_ms, hw) {
            match flip.write {
                Ok(()) => sink.emit(&AppEvent::RelayFlipped(flip.level)),
                Err(_) => sink.emit(&AppEvent::RelayWriteFailed(flip.level)),
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Earliest moment anything is due; the main loop sleeps until then.
    pub fn next_wake_ms(&self) -> Option<u64> {
        match (self.scheduler.next_due_ms(), self.relay.next_deadline_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn loop_state(&self) -> LoopState {
        self.toggle.state()
    }

    pub fn relay_state(&self) -> RelayState {
        self.relay.state()
    }

    pub fn hold_phase(&self) -> HoldPhase {
        self.long_press.phase()
    }

    // ── Poll handlers ─────────────────────────────────────────

    fn poll_control(
        &mut self,
        now_ms: u64,
        hw: &mut (impl SwitchPort + RelayPort),
        sink: &mut impl EventSink,
    ) {
        let Some(reading) = Self::sample(hw, SwitchId::Control, sink) else {
            return;
        };
        if self.control_switch.update(reading) != Some(SwitchEdge::Rising) {
            return;
        }
        sink.emit(&AppEvent::SwitchPressed(SwitchId::Control));

        match self.toggle.on_rising_edge() {
            LoopCommand::Start => {
                let write = self.relay.start(now_ms, hw);
                sink.emit(&AppEvent::RelayLoopStarted);
                if write.is_err() {
                    sink.emit(&AppEvent::RelayWriteFailed(RelayLevel::On));
                }
            }
            LoopCommand::Stop => {
                let write = self.relay.stop(hw);
                sink.emit(&AppEvent::RelayLoopStopped);
                if write.is_err() {
                    sink.emit(&AppEvent::RelayWriteFailed(RelayLevel::Off));
                }
            }
        }
    }

    fn poll_shutdown(
        &mut self,
        now_ms: u64,
        hw: &mut impl SwitchPort,
        shutdown: &mut impl ShutdownPort,
        sink: &mut impl EventSink,
    ) {
        let Some(reading) = Self::sample(hw, SwitchId::Shutdown, sink) else {
            return;
        };
        if self.shutdown_switch.update(reading) == Some(SwitchEdge::Rising) {
            sink.emit(&AppEvent::SwitchPressed(SwitchId::Shutdown));
        }

        match self.long_press.update(self.shutdown_switch.level(), now_ms) {
            None => {}
            Some(HoldEvent::Started) => sink.emit(&AppEvent::HoldStarted),
            Some(HoldEvent::Cancelled { held_ms }) => {
                sink.emit(&AppEvent::HoldCancelled { held_ms });
            }
            Some(HoldEvent::Triggered { held_ms }) => {
                // Emitted first: a successful power-off may never return.
                sink.emit(&AppEvent::ShutdownRequested { held_ms });
                if let Err(e) = shutdown.request_shutdown() {
                    error!("Shutdown request failed: {} (not retried)", e);
                    sink.emit(&AppEvent::ShutdownFailed);
                }
            }
        }
    }

    /// One switch read.  `None` skips the decision for this poll.
    fn sample(
        hw: &mut impl SwitchPort,
        switch: SwitchId,
        sink: &mut impl EventSink,
    ) -> Option<SwitchLevel> {
        match hw.sample(switch) {
            Ok(level) => Some(level),
            Err(e) => {
                warn!("{:?} switch: {}, skipping poll", switch, e);
                sink.emit(&AppEvent::SwitchReadFailed(switch));
                None
            }
        }
    }
}
