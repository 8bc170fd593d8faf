//! Hold-to-confirm detector for the shutdown switch.
//!
//! ```text
//!          press                  held >= threshold
//!   Idle ─────────▶ Holding ─────────────────────────▶ Fired (terminal)
//!    ▲                 │
//!    └─────────────────┘
//!         release
//! ```
//!
//! The hold is measured from the first poll that saw the switch pressed.
//! `Fired` is a one-shot latch for the life of the process: releasing and
//! pressing again never requests a second shutdown.

use log::info;

use super::SwitchLevel;

/// Externally visible detector phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldPhase {
    Idle,
    Holding,
    Fired,
}

/// Transitions reported by [`LongPressDetector::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldEvent {
    /// A fresh press started the hold timer.
    Started,
    /// Released before the threshold; the next press measures from zero.
    Cancelled { held_ms: u64 },
    /// Threshold reached.  Reported once per process.
    Triggered { held_ms: u64 },
}

#[derive(Debug, Clone)]
pub struct LongPressDetector {
    threshold_ms: u64,
    /// `None` whenever the switch was last seen released.
    press_started_at: Option<u64>,
    /// One-shot guard; never cleared.
    fired: bool,
}

impl LongPressDetector {
    pub fn new(threshold_ms: u32) -> Self {
        Self {
            threshold_ms: u64::from(threshold_ms),
            press_started_at: None,
            fired: false,
        }
    }

    /// Feed the debounced level of one poll.
    pub fn update(&mut self, level: SwitchLevel, now_ms: u64) -> Option<HoldEvent> {
        match level {
            SwitchLevel::Released => {
                let started = self.press_started_at.take()?;
                if self.fired {
                    return None;
                }
                let held_ms = now_ms.saturating_sub(started);
                info!("Hold: released after {}ms", held_ms);
                Some(HoldEvent::Cancelled { held_ms })
            }
            SwitchLevel::Pressed => match self.press_started_at {
                None => {
                    self.press_started_at = Some(now_ms);
                    (!self.fired).then_some(HoldEvent::Started)
                }
                Some(started) => {
                    let held_ms = now_ms.saturating_sub(started);
                    if self.fired || held_ms < self.threshold_ms {
                        return None;
                    }
                    self.fired = true;
                    info!("Hold: threshold reached after {}ms", held_ms);
                    Some(HoldEvent::Triggered { held_ms })
                }
            },
        }
    }

    pub fn phase(&self) -> HoldPhase {
        if self.fired {
            HoldPhase::Fired
        } else if self.press_started_at.is_some() {
            HoldPhase::Holding
        } else {
            HoldPhase::Idle
        }
    }

    /// Whether the shutdown action has been requested.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
