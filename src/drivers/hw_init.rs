//! One-shot GPIO initialization and raw level access.
//!
//! Configures the two switch inputs and the relay output using raw ESP-IDF
//! sys calls.  Called once from `main()` before the control loop starts.
//!
//! On host targets the pins are simulated by an in-memory level bank so
//! the pin drivers can be exercised without hardware.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

use crate::config::SystemConfig;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed { gpio: i32, rc: i32 },
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed { gpio, rc } => {
                write!(f, "GPIO{} config failed (rc={})", gpio, rc)
            }
        }
    }
}

impl std::error::Error for HwInitError {}

/// `esp_err_t` value reported for a pin outside the simulated bank.
#[cfg(not(target_os = "espidf"))]
pub const SIM_ERR_INVALID_ARG: i32 = 0x102;

// ── Initialization ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn init_gpio(config: &SystemConfig) -> Result<(), HwInitError> {
    // Pull toward the released level so a floating switch reads released.
    let (pull_up, pull_down) = if config.switch_active_high {
        (gpio_pullup_t_GPIO_PULLUP_DISABLE, gpio_pulldown_t_GPIO_PULLDOWN_ENABLE)
    } else {
        (gpio_pullup_t_GPIO_PULLUP_ENABLE, gpio_pulldown_t_GPIO_PULLDOWN_DISABLE)
    };

    for gpio in [config.control_switch_gpio, config.shutdown_switch_gpio] {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << gpio,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: pull_up,
            pull_down_en: pull_down,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: called once from main() before the loop; single-threaded.
        let rc = unsafe { gpio_config(&cfg) };
        if rc != ESP_OK as esp_err_t {
            return Err(HwInitError::GpioConfigFailed { gpio, rc });
        }
    }

    let relay = config.relay_gpio;
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << relay,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: as above.
    let rc = unsafe { gpio_config(&cfg) };
    if rc != ESP_OK as esp_err_t {
        return Err(HwInitError::GpioConfigFailed { gpio: relay, rc });
    }

    info!(
        "hw_init: inputs GPIO{}/GPIO{}, relay GPIO{}",
        config.control_switch_gpio, config.shutdown_switch_gpio, relay
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_gpio(config: &SystemConfig) -> Result<(), HwInitError> {
    for gpio in [
        config.control_switch_gpio,
        config.shutdown_switch_gpio,
        config.relay_gpio,
    ] {
        if sim::bit(gpio).is_none() {
            return Err(HwInitError::GpioConfigFailed {
                gpio,
                rc: SIM_ERR_INVALID_ARG,
            });
        }
    }
    info!("hw_init(sim): GPIO init skipped");
    Ok(())
}

// ── Level access ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> Result<bool, i32> {
    // SAFETY: pin was configured as an input in init_gpio().
    Ok(unsafe { gpio_get_level(pin) } != 0)
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), i32> {
    // SAFETY: pin was configured as an output in init_gpio().
    let rc = unsafe { gpio_set_level(pin, u32::from(high)) };
    if rc == ESP_OK as esp_err_t { Ok(()) } else { Err(rc) }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> Result<bool, i32> {
    sim::read(pin)
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), i32> {
    sim::write(pin, high)
}

/// Drive a simulated input from a test or host harness.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_level(pin: i32, high: bool) -> Result<(), i32> {
    sim::write(pin, high)
}

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicU64, Ordering};

    use super::SIM_ERR_INVALID_ARG;

    /// One bit per GPIO, 0..=63.
    static LEVELS: AtomicU64 = AtomicU64::new(0);

    pub(super) fn bit(pin: i32) -> Option<u64> {
        (0..64).contains(&pin).then(|| 1u64 << pin)
    }

    pub(super) fn read(pin: i32) -> Result<bool, i32> {
        let mask = bit(pin).ok_or(SIM_ERR_INVALID_ARG)?;
        Ok(LEVELS.load(Ordering::Acquire) & mask != 0)
    }

    pub(super) fn write(pin: i32, high: bool) -> Result<(), i32> {
        let mask = bit(pin).ok_or(SIM_ERR_INVALID_ARG)?;
        if high {
            LEVELS.fetch_or(mask, Ordering::AcqRel);
        } else {
            LEVELS.fetch_and(!mask, Ordering::AcqRel);
        }
        Ok(())
    }
}
