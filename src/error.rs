//! Unified error types for the relay loop firmware.
//!
//! Every fallible operation on the hardware boundary funnels into [`Error`].
//! The variants mirror how the control loop treats them:
//!
//! | Variant    | Origin                        | Handling                         |
//! |------------|-------------------------------|----------------------------------|
//! | `Gpio`     | pin read / write              | logged, skipped for one cycle    |
//! | `Shutdown` | power-off request launch      | logged, never retried            |
//! | `Config`   | invalid startup configuration | fatal before the loop starts     |
//! | `Init`     | peripheral setup              | fatal before the loop starts     |

use core::fmt;

use crate::app::ports::ConfigError;
use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A digital pin could not be read or written.
    Gpio(GpioError),
    /// The shutdown action could not be launched.
    Shutdown(ShutdownError),
    /// Configuration failed validation.
    Config(ConfigError),
    /// Peripheral initialisation failed.
    Init(HwInitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Shutdown(e) => write!(f, "shutdown: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

/// Transient hardware-boundary failure.  Carries the GPIO number so the
/// log line says which pin misbehaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    ReadFailed { gpio: i32 },
    WriteFailed { gpio: i32 },
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed { gpio } => write!(f, "GPIO{gpio} read failed"),
            Self::WriteFailed { gpio } => write!(f, "GPIO{gpio} write failed"),
        }
    }
}

impl std::error::Error for GpioError {}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Shutdown errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownError {
    /// The power-off command could not be spawned.
    SpawnFailed,
    /// The power-off command ran but exited unsuccessfully.
    /// `None` when the process was killed by a signal.
    ExitStatus(Option<i32>),
    /// No command is configured.
    NoCommand,
}

impl fmt::Display for ShutdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpawnFailed => write!(f, "could not spawn power-off command"),
            Self::ExitStatus(Some(code)) => write!(f, "power-off command exited with {code}"),
            Self::ExitStatus(None) => write!(f, "power-off command killed by signal"),
            Self::NoCommand => write!(f, "no power-off command configured"),
        }
    }
}

impl std::error::Error for ShutdownError {}

impl From<ShutdownError> for Error {
    fn from(e: ShutdownError) -> Self {
        Self::Shutdown(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
