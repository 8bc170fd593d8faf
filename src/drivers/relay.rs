//! Relay touch board driver.
//!
//! A single digital output drives the relay coil (through the board's own
//! transistor stage).  `relay_active_high` selects which electrical level
//! energises it.

use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::warn;

use crate::control::RelayLevel;
use crate::error::GpioError;

pub struct Relay<P> {
    pin: P,
    gpio: i32,
    active_high: bool,
    /// Last level successfully written; `None` before the first write.
    level: Option<RelayLevel>,
}

impl<P: OutputPin> Relay<P> {
    pub fn new(pin: P, gpio: i32, active_high: bool) -> Self {
        Self {
            pin,
            gpio,
            active_high,
            level: None,
        }
    }

    pub fn set(&mut self, level: RelayLevel) -> Result<(), GpioError> {
        let state = PinState::from(level.is_on() == self.active_high);
        let gpio = self.gpio;
        self.pin.set_state(state).map_err(|e| {
            warn!("GPIO{} write error: {:?}", gpio, e.kind());
            GpioError::WriteFailed { gpio }
        })?;
        self.level = Some(level);
        Ok(())
    }

    pub fn level(&self) -> Option<RelayLevel> {
        self.level
    }
}
