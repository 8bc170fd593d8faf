//! Power-off adapters implementing [`ShutdownPort`].
//!
//! - **`not(target_os = "espidf")`**: [`CommandShutdown`] runs the
//!   configured OS command (default `sudo shutdown -h now`) and logs what
//!   it printed.
//! - **`target_os = "espidf"`**: [`DeepSleepShutdown`] enters deep sleep
//!   with no wake source armed, which leaves the board off until reset.

use crate::app::ports::ShutdownPort;
use crate::error::ShutdownError;

// ── Host: external command ────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
pub use host::CommandShutdown;

#[cfg(not(target_os = "espidf"))]
mod host {
    use std::process::{Command, Stdio};

    use log::{info, warn};

    use super::{ShutdownError, ShutdownPort};

    #[derive(Debug, Clone)]
    pub struct CommandShutdown {
        command: Vec<String>,
    }

    impl CommandShutdown {
        pub fn new(command: &[String]) -> Self {
            Self {
                command: command.to_vec(),
            }
        }
    }

    impl ShutdownPort for CommandShutdown {
        fn request_shutdown(&mut self) -> Result<(), ShutdownError> {
            let (program, args) = self.command.split_first().ok_or(ShutdownError::NoCommand)?;

            info!("Shutdown: running {:?}", self.command);
            let output = Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .output()
                .map_err(|e| {
                    warn!("Shutdown: failed to spawn {}: {}", program, e);
                    ShutdownError::SpawnFailed
                })?;

            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.trim().is_empty() {
                info!("Shutdown stdout: {}", stdout.trim_end());
            }
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                warn!("Shutdown stderr: {}", stderr.trim_end());
            }

            if output.status.success() {
                Ok(())
            } else {
                Err(ShutdownError::ExitStatus(output.status.code()))
            }
        }
    }

}

// ── ESP-IDF: deep sleep ───────────────────────────────────────

#[cfg(target_os = "espidf")]
pub use board::DeepSleepShutdown;

#[cfg(target_os = "espidf")]
mod board {
    use log::info;

    use super::{ShutdownError, ShutdownPort};

    #[derive(Debug, Default)]
    pub struct DeepSleepShutdown;

    impl DeepSleepShutdown {
        pub fn new() -> Self {
            Self
        }
    }

    impl ShutdownPort for DeepSleepShutdown {
        #[allow(unreachable_code)]
        fn request_shutdown(&mut self) -> Result<(), ShutdownError> {
            info!("Shutdown: entering deep sleep, no wake source");
            // SAFETY: no wake sources are armed; the call does not return.
            unsafe {
                esp_idf_svc::sys::esp_deep_sleep_start();
            }
            Ok(())
        }
    }
}
