//! Mock adapters for integration tests.
//!
//! `MockHardware` plays back scripted switch levels against the simulated
//! clock and records every relay write, so tests can assert on the full
//! output history without touching real GPIO.

use relayloop::app::events::AppEvent;
use relayloop::app::ports::{EventSink, RelayPort, ShutdownPort, SwitchPort};
use relayloop::app::service::AppService;
use relayloop::config::SystemConfig;
use relayloop::control::{RelayLevel, SwitchId, SwitchLevel};
use relayloop::error::{GpioError, ShutdownError};

// ── MockHardware ──────────────────────────────────────────────

/// A switch held down over `[from_ms, until_ms)`.
#[derive(Debug, Clone, Copy)]
struct Press {
    switch: SwitchId,
    from_ms: u64,
    until_ms: u64,
}

#[derive(Debug, Clone, Copy)]
struct ReadFault {
    switch: SwitchId,
    from_ms: u64,
    until_ms: u64,
}

#[derive(Default)]
pub struct MockHardware {
    now_ms: u64,
    presses: Vec<Press>,
    read_faults: Vec<ReadFault>,
    /// Every relay write attempted, with the time it happened.
    pub relay_writes: Vec<(u64, RelayLevel)>,
    pub fail_relay_writes: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `switch` from `from_ms` until just before `until_ms`.
    pub fn press(&mut self, switch: SwitchId, from_ms: u64, until_ms: u64) {
        self.presses.push(Press {
            switch,
            from_ms,
            until_ms,
        });
    }

    /// Make reads of `switch` fail over `[from_ms, until_ms)`.
    pub fn fail_reads(&mut self, switch: SwitchId, from_ms: u64, until_ms: u64) {
        self.read_faults.push(ReadFault {
            switch,
            from_ms,
            until_ms,
        });
    }

    /// Relay levels written after `since_ms`, in order.
    pub fn relay_levels_since(&self, since_ms: u64) -> Vec<RelayLevel> {
        self.relay_writes
            .iter()
            .filter(|(t, _)| *t >= since_ms)
            .map(|(_, level)| *level)
            .collect()
    }

    pub fn last_relay_write(&self) -> Option<(u64, RelayLevel)> {
        self.relay_writes.last().copied()
    }
}

impl SwitchPort for MockHardware {
    fn sample(&mut self, switch: SwitchId) -> Result<SwitchLevel, GpioError> {
        let now = self.now_ms;
        let faulted = self
            .read_faults
            .iter()
            .any(|f| f.switch == switch && (f.from_ms..f.until_ms).contains(&now));
        if faulted {
            return Err(GpioError::ReadFailed { gpio: 0 });
        }

        let pressed = self
            .presses
            .iter()
            .any(|p| p.switch == switch && (p.from_ms..p.until_ms).contains(&now));
        Ok(if pressed {
            SwitchLevel::Pressed
        } else {
            SwitchLevel::Released
        })
    }
}

impl RelayPort for MockHardware {
    fn set_relay(&mut self, level: RelayLevel) -> Result<(), GpioError> {
        self.relay_writes.push((self.now_ms, level));
        if self.fail_relay_writes {
            Err(GpioError::WriteFailed { gpio: 16 })
        } else {
            Ok(())
        }
    }
}

// ── MockShutdown ──────────────────────────────────────────────

#[derive(Default)]
pub struct MockShutdown {
    pub requests: Vec<u64>,
    pub fail: bool,
    now_ms: u64,
}

impl ShutdownPort for MockShutdown {
    fn request_shutdown(&mut self) -> Result<(), ShutdownError> {
        self.requests.push(self.now_ms);
        if self.fail {
            Err(ShutdownError::ExitStatus(Some(1)))
        } else {
            Ok(())
        }
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<(u64, AppEvent)>,
    now_ms: u64,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, event: AppEvent) -> usize {
        self.events.iter().filter(|(_, e)| *e == event).count()
    }

    pub fn times_of(&self, event: AppEvent) -> Vec<u64> {
        self.events
            .iter()
            .filter(|(_, e)| *e == event)
            .map(|(t, _)| *t)
            .collect()
    }

    pub fn contains(&self, pred: impl Fn(&AppEvent) -> bool) -> bool {
        self.events.iter().any(|(_, e)| pred(e))
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push((self.now_ms, *event));
    }
}

// ── Rig: service + mocks on a simulated clock ─────────────────

pub struct Rig {
    pub app: AppService,
    pub hw: MockHardware,
    pub power: MockShutdown,
    pub sink: RecordingSink,
    pub now_ms: u64,
}

#[allow(dead_code)]
impl Rig {
    /// Started service with the default configuration at t = 0.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    pub fn with_config(config: &SystemConfig) -> Self {
        let mut rig = Self {
            app: AppService::new(config),
            hw: MockHardware::new(),
            power: MockShutdown::default(),
            sink: RecordingSink::default(),
            now_ms: 0,
        };
        rig.app.start(0, &mut rig.hw, &mut rig.sink);
        rig
    }

    /// Advance the clock the way the firmware main loop does: jump to each
    /// wake time in turn and tick, up to and including `until_ms`.
    pub fn run_until(&mut self, until_ms: u64) {
        while let Some(due) = self.app.next_wake_ms() {
            if due > until_ms {
                break;
            }
            self.set_now(due.max(self.now_ms));
            self.app
                .tick(self.now_ms, &mut self.hw, &mut self.power, &mut self.sink);
        }
        self.set_now(until_ms);
    }

    fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        self.hw.now_ms = now_ms;
        self.power.now_ms = now_ms;
        self.sink.now_ms = now_ms;
    }
}
