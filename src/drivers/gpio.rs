//! Raw GPIO pins exposed through the `embedded-hal` digital traits.
//!
//! Thin handles over [`hw_init`](super::hw_init) level access, so the
//! switch sampler and relay driver stay generic over any HAL pin.

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

use super::hw_init;

/// Raw `esp_err_t` returned by a failed level access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioFault(pub i32);

impl embedded_hal::digital::Error for GpioFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input handle.  The pin must be configured by [`hw_init::init_gpio`].
#[derive(Debug)]
pub struct GpioInput {
    gpio: i32,
}

impl GpioInput {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }
}

impl ErrorType for GpioInput {
    type Error = GpioFault;
}

impl InputPin for GpioInput {
    fn is_high(&mut self) -> Result<bool, GpioFault> {
        hw_init::gpio_read(self.gpio).map_err(GpioFault)
    }

    fn is_low(&mut self) -> Result<bool, GpioFault> {
        self.is_high().map(|high| !high)
    }
}

/// Output handle.  The pin must be configured by [`hw_init::init_gpio`].
#[derive(Debug)]
pub struct GpioOutput {
    gpio: i32,
}

impl GpioOutput {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }
}

impl ErrorType for GpioOutput {
    type Error = GpioFault;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), GpioFault> {
        hw_init::gpio_write(self.gpio, false).map_err(GpioFault)
    }

    fn set_high(&mut self) -> Result<(), GpioFault> {
        hw_init::gpio_write(self.gpio, true).map_err(GpioFault)
    }
}
