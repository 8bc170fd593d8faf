//! Hardware adapter: bridges the pin drivers to the domain port traits.
//!
//! Owns both switch samplers and the relay driver, exposing them through
//! [`SwitchPort`] and [`RelayPort`].  Generic over the pin types so the
//! same adapter runs on ESP-IDF pins, the host GPIO simulation, or test
//! doubles.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::{RelayPort, SwitchPort};
use crate::control::{RelayLevel, SwitchId, SwitchLevel};
use crate::drivers::relay::Relay;
use crate::drivers::switch::PinSampler;
use crate::error::GpioError;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<CI, SI, RO> {
    control: PinSampler<CI>,
    shutdown: PinSampler<SI>,
    relay: Relay<RO>,
}

impl<CI, SI, RO> HardwareAdapter<CI, SI, RO>
where
    CI: InputPin,
    SI: InputPin,
    RO: OutputPin,
{
    pub fn new(control: PinSampler<CI>, shutdown: PinSampler<SI>, relay: Relay<RO>) -> Self {
        Self {
            control,
            shutdown,
            relay,
        }
    }

    /// Last level successfully written to the relay.
    pub fn relay_level(&self) -> Option<RelayLevel> {
        self.relay.level()
    }
}

// ── SwitchPort implementation ─────────────────────────────────

impl<CI, SI, RO> SwitchPort for HardwareAdapter<CI, SI, RO>
where
    CI: InputPin,
    SI: InputPin,
    RO: OutputPin,
{
    fn sample(&mut self, switch: SwitchId) -> Result<SwitchLevel, GpioError> {
        match switch {
            SwitchId::Control => self.control.sample(),
            SwitchId::Shutdown => self.shutdown.sample(),
        }
    }
}

// ── RelayPort implementation ──────────────────────────────────

impl<CI, SI, RO> RelayPort for HardwareAdapter<CI, SI, RO>
where
    CI: InputPin,
    SI: InputPin,
    RO: OutputPin,
{
    fn set_relay(&mut self, level: RelayLevel) -> Result<(), GpioError> {
        self.relay.set(level)
    }
}
