//! Edge-latch debouncer.
//!
//! One instance per switch.  The poll cadence is the only noise filter:
//! each poll compares the fresh reading with the last stable level and
//! reports a rising edge exactly once per physical press.
//!
//! | Last stable | Reading  | Result                          |
//! |-------------|----------|---------------------------------|
//! | Released    | Pressed  | `Some(Rising)`, latch Pressed   |
//! | Pressed     | Pressed  | `None` (holding does not repeat) |
//! | any         | Released | `None`, latch Released          |

use super::SwitchLevel;

/// Edge events reported by [`Debouncer::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchEdge {
    /// Released → pressed between two consecutive polls.
    Rising,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    last_stable: SwitchLevel,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    /// Starts released, so a switch already held at boot fires on the first poll.
    pub fn new() -> Self {
        Self {
            last_stable: SwitchLevel::Released,
        }
    }

    /// Feed one poll's reading.
    pub fn update(&mut self, reading: SwitchLevel) -> Option<SwitchEdge> {
        let edge = match (self.last_stable, reading) {
            (SwitchLevel::Released, SwitchLevel::Pressed) => Some(SwitchEdge::Rising),
            _ => None,
        };
        self.last_stable = reading;
        edge
    }

    /// Last stable level.
    pub fn level(&self) -> SwitchLevel {
        self.last_stable
    }
}
