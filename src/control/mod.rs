//! Timing-sensitive control logic: pure state machines, zero I/O.
//!
//! ```text
//!  PinSampler ──▶ Debouncer ──┬──▶ ToggleController ──▶ RelayBlinkScheduler ──▶ relay
//!                             └──▶ LongPressDetector ──▶ shutdown
//! ```
//!
//! Each component owns its own state record.  Components never touch each
//! other's state; the [`AppService`](crate::app::service::AppService)
//! routes the value one returns into the next.

pub mod debounce;
pub mod long_press;
pub mod relay_blink;
pub mod toggle;

/// The two physical switches on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchId {
    /// Starts / stops the relay loop.
    Control,
    /// Requests a power-off when held.
    Shutdown,
}

/// Logical level of a switch, after polarity has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchLevel {
    Pressed,
    Released,
}

/// Logical relay output level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayLevel {
    On,
    Off,
}

impl RelayLevel {
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// The opposite level.
    pub fn flipped(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}
