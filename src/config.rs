//! System configuration parameters
//!
//! All tunable parameters for the relay loop board.  Loaded once before the
//! control loop starts and never changed at runtime.  A build-time JSON
//! override (`RELAYLOOP_CONFIG`) may replace any subset of the defaults.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::pins;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Pins ---
    /// Relay loop start/stop switch
    pub control_switch_gpio: i32,
    /// Hold-to-shutdown switch
    pub shutdown_switch_gpio: i32,
    /// Relay output
    pub relay_gpio: i32,

    // --- Polarity ---
    /// `true` when a pressed switch reads HIGH
    pub switch_active_high: bool,
    /// `true` when driving the relay pin HIGH energises the relay
    pub relay_active_high: bool,

    // --- Relay waveform ---
    /// Time the relay stays on per cycle (milliseconds)
    pub relay_on_ms: u32,
    /// Time the relay stays off per cycle (milliseconds)
    pub relay_off_ms: u32,

    // --- Switches ---
    /// Poll interval shared by both switches (milliseconds)
    pub poll_interval_ms: u32,
    /// Continuous hold required before a shutdown is requested (milliseconds)
    pub hold_threshold_ms: u32,

    // --- Housekeeping ---
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,
    /// Program and arguments launched by the host power-off adapter.
    /// Unused on the board, which powers off through deep sleep.
    pub shutdown_command: Vec<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Pins
            control_switch_gpio: pins::CONTROL_SWITCH_GPIO,
            shutdown_switch_gpio: pins::SHUTDOWN_SWITCH_GPIO,
            relay_gpio: pins::RELAY_GPIO,

            // Polarity
            switch_active_high: true,
            relay_active_high: true,

            // Relay waveform: short touch, long rest
            relay_on_ms: 100,
            relay_off_ms: 5000,

            // Switches
            poll_interval_ms: 100,   // 10 Hz
            hold_threshold_ms: 5000, // 5 s hold

            // Housekeeping
            watchdog_timeout_ms: 10_000,
            shutdown_command: ["sudo", "shutdown", "-h", "now"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl SystemConfig {
    /// Reject configurations that would make the timing contract meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relay_on_ms == 0 {
            return Err(ConfigError::ValidationFailed("relay_on_ms must be positive"));
        }
        if self.relay_off_ms == 0 {
            return Err(ConfigError::ValidationFailed("relay_off_ms must be positive"));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be positive"));
        }
        if self.hold_threshold_ms == 0 {
            return Err(ConfigError::ValidationFailed("hold_threshold_ms must be positive"));
        }
        if self.hold_threshold_ms < self.poll_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "hold_threshold_ms shorter than poll_interval_ms",
            ));
        }
        if self.watchdog_timeout_ms <= self.poll_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "watchdog_timeout_ms must exceed poll_interval_ms",
            ));
        }
        if self.control_switch_gpio == self.shutdown_switch_gpio
            || self.control_switch_gpio == self.relay_gpio
            || self.shutdown_switch_gpio == self.relay_gpio
        {
            return Err(ConfigError::ValidationFailed("pin assignments overlap"));
        }
        if cfg!(not(target_os = "espidf"))
            && self.shutdown_command.first().is_none_or(String::is_empty)
        {
            return Err(ConfigError::ValidationFailed("shutdown_command is empty"));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON document over the defaults and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!("Config JSON rejected: {}", e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Startup configuration: the build-time `RELAYLOOP_CONFIG` override if
    /// present, otherwise the defaults.  Validated either way.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(option_env!("RELAYLOOP_CONFIG"))
    }

    fn load_from(overrides: Option<&str>) -> Result<Self, ConfigError> {
        match overrides {
            Some(json) => {
                let config = Self::from_json(json)?;
                info!("Config: build-time override applied");
                Ok(config)
            }
            None => {
                let config = Self::default();
                config.validate()?;
                info!("Config: defaults");
                Ok(config)
            }
        }
    }
}
