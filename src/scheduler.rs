//! Poll scheduler.
//!
//! Each repeating activity is a "next wake time" plus an interval.  The
//! [`AppService`](crate::app::service::AppService) asks for the timers that
//! are due, runs the matching handler, then re-arms each timer relative to
//! the moment its handler completed.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Main loop                             │
//! │                                                              │
//! │   sleep until next_wake_ms()                                 │
//! │        │                                                     │
//! │        ▼                                                     │
//! │   take_due(now) ──▶ [ControlSwitch, ShutdownSwitch]          │
//! │        │                  │                                  │
//! │        │                  ▼                                  │
//! │        │            poll handler (read → decide → act)       │
//! │        │                  │                                  │
//! │        │                  ▼                                  │
//! │        └────────── complete(timer, now) ── next = now + Δ    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two switch timers are independent: no ordering is promised between
//! them beyond table order when both are due in the same tick.

use heapless::Vec;
use log::info;

/// Maximum number of concurrent timers (stack-allocated).
const MAX_TIMERS: usize = 4;

/// Repeating activities driven by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTimer {
    /// Sample the relay loop control switch.
    ControlSwitch,
    /// Sample the shutdown switch.
    ShutdownSwitch,
}

/// Returned by [`Scheduler::add`] when every slot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerFull;

/// Internal bookkeeping for a live timer.
#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    timer: PollTimer,
    interval_ms: u64,
    next_due_ms: u64,
}

/// The scheduler engine.
///
/// Knows nothing about switches or relays; it only hands back which
/// timers are due.
pub struct Scheduler {
    timers: Vec<TimerEntry, MAX_TIMERS>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }

    /// Register a repeating timer whose first run is due at `first_due_ms`.
    /// Re-adding an existing timer replaces its schedule.
    pub fn add(
        &mut self,
        timer: PollTimer,
        interval_ms: u32,
        first_due_ms: u64,
    ) -> Result<(), SchedulerFull> {
        let entry = TimerEntry {
            timer,
            interval_ms: u64::from(interval_ms),
            next_due_ms: first_due_ms,
        };
        if let Some(existing) = self.timers.iter_mut().find(|e| e.timer == timer) {
            *existing = entry;
            return Ok(());
        }
        self.timers.push(entry).map_err(|_| SchedulerFull)?;
        info!("Scheduler: added {:?} every {}ms", timer, interval_ms);
        Ok(())
    }

    /// Timers due at `now_ms`, in table order.  A due timer stays due
    /// until [`complete`](Self::complete) re-arms it.
    pub fn take_due(&self, now_ms: u64) -> Vec<PollTimer, MAX_TIMERS> {
        self.timers
            .iter()
            .filter(|e| e.next_due_ms <= now_ms)
            .map(|e| e.timer)
            .collect()
    }

    /// Re-arm `timer` one interval after `completed_at_ms`.
    pub fn complete(&mut self, timer: PollTimer, completed_at_ms: u64) {
        if let Some(entry) = self.timers.iter_mut().find(|e| e.timer == timer) {
            entry.next_due_ms = completed_at_ms + entry.interval_ms;
        }
    }

    /// Earliest deadline across all timers.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.iter().map(|e| e.next_due_ms).min()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
