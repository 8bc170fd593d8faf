//! Task Watchdog Timer (TWDT) driver.
//!
//! Resets the board if the control loop stops iterating for longer than
//! `watchdog_timeout_ms`.  The loop wakes at least once per poll interval,
//! so `feed()` runs well inside the timeout during normal operation.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Configure the TWDT and subscribe the calling task.
    #[cfg(target_os = "espidf")]
    pub fn new(timeout_ms: u32) -> Self {
        let cfg = esp_task_wdt_config_t {
            timeout_ms,
            idle_core_mask: 0,
            trigger_panic: true,
        };
        // SAFETY: called once from main() before the loop; single-threaded.
        let ret = unsafe { esp_task_wdt_reconfigure(&cfg) };
        if ret != ESP_OK as esp_err_t {
            log::warn!("TWDT reconfigure returned {} (may already be configured)", ret);
        }

        // SAFETY: null handle subscribes the current task.
        let subscribed = unsafe { esp_task_wdt_add(core::ptr::null_mut()) } == ESP_OK as esp_err_t;
        if subscribed {
            info!("Watchdog: subscribed ({}ms timeout, panic on trigger)", timeout_ms);
        } else {
            log::warn!("Watchdog: failed to subscribe, loop stalls will go unnoticed");
        }
        Self { subscribed }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new(timeout_ms: u32) -> Self {
        info!("Watchdog(sim): no-op ({}ms)", timeout_ms);
        Self {}
    }

    /// Feed the watchdog.  Call once per loop iteration.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: the current task is subscribed.
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }
}
