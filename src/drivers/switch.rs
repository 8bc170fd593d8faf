//! Momentary switch sampler.
//!
//! ## Hardware
//!
//! Tact switch on a digital input.  The reference board wires switches
//! active-high with a pull-down, so a pressed switch reads HIGH; boards
//! wired the other way set `switch_active_high = false`.
//!
//! The sampler performs exactly one electrical read per call and keeps no
//! state besides its pin.  Debouncing happens in
//! [`Debouncer`](crate::control::debounce::Debouncer).

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::control::SwitchLevel;
use crate::error::GpioError;

pub struct PinSampler<P> {
    pin: P,
    gpio: i32,
    active_high: bool,
}

impl<P: InputPin> PinSampler<P> {
    pub fn new(pin: P, gpio: i32, active_high: bool) -> Self {
        Self {
            pin,
            gpio,
            active_high,
        }
    }

    /// GPIO pin this switch is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Read the pin once and map it to a logical level.
    pub fn sample(&mut self) -> Result<SwitchLevel, GpioError> {
        let gpio = self.gpio;
        let high = self.pin.is_high().map_err(|e| {
            warn!("GPIO{} read error: {:?}", gpio, e.kind());
            GpioError::ReadFailed { gpio }
        })?;

        Ok(if high == self.active_high {
            SwitchLevel::Pressed
        } else {
            SwitchLevel::Released
        })
    }
}
