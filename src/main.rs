//! Relay loop firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter     LogEventSink   DeepSleepShutdown    │
//! │  (Switch+Relay)      (EventSink)    (ShutdownPort)       │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)             │      │
//! │  │  Debounce · Toggle · Blink · LongPress         │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  Scheduler (poll timers) · Watchdog · MonotonicClock     │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use relayloop::adapters::hardware::HardwareAdapter;
use relayloop::adapters::log_sink::LogEventSink;
use relayloop::adapters::shutdown::DeepSleepShutdown;
use relayloop::adapters::time::MonotonicClock;
use relayloop::app::service::AppService;
use relayloop::config::SystemConfig;
use relayloop::drivers::gpio::{GpioInput, GpioOutput};
use relayloop::drivers::hw_init;
use relayloop::drivers::relay::Relay;
use relayloop::drivers::switch::PinSampler;
use relayloop::drivers::watchdog::Watchdog;

type BoardHardware = HardwareAdapter<GpioInput, GpioInput, GpioOutput>;

/// Configure the pins and wrap them in the hardware adapter.
fn bring_up(config: &SystemConfig) -> relayloop::error::Result<BoardHardware> {
    hw_init::init_gpio(config)?;

    let control = PinSampler::new(
        GpioInput::new(config.control_switch_gpio),
        config.control_switch_gpio,
        config.switch_active_high,
    );
    let shutdown = PinSampler::new(
        GpioInput::new(config.shutdown_switch_gpio),
        config.shutdown_switch_gpio,
        config.switch_active_high,
    );
    let relay = Relay::new(
        GpioOutput::new(config.relay_gpio),
        config.relay_gpio,
        config.relay_active_high,
    );
    info!(
        "Switches: control GPIO{}, shutdown GPIO{}",
        control.gpio(),
        shutdown.gpio()
    );
    Ok(HardwareAdapter::new(control, shutdown, relay))
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  relayloop v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config (fatal if invalid) ──────────────────────────
    let config = SystemConfig::load()?;
    info!(
        "Relay: {}ms on / {}ms off, poll {}ms, hold {}ms",
        config.relay_on_ms, config.relay_off_ms, config.poll_interval_ms, config.hold_threshold_ms
    );

    // ── 3. Hardware + adapters ────────────────────────────────
    let mut hw = bring_up(&config)?;
    let mut power_off = DeepSleepShutdown::new();
    let mut sink = LogEventSink::new();
    let clock = MonotonicClock::new();

    // ── 4. Service ────────────────────────────────────────────
    let mut service = AppService::new(&config);
    service.start(clock.uptime_ms(), &mut hw, &mut sink);

    let watchdog = Watchdog::new(config.watchdog_timeout_ms);
    let max_sleep_ms = u64::from(config.poll_interval_ms);

    // ── 5. Main loop ──────────────────────────────────────────
    loop {
        let now = clock.uptime_ms();
        service.tick(now, &mut hw, &mut power_off, &mut sink);
        watchdog.feed();

        let sleep_ms = service
            .next_wake_ms()
            .map_or(max_sleep_ms, |due| due.saturating_sub(clock.uptime_ms()))
            .min(max_sleep_ms);
        // Always yield at least one tick so the idle task can run.
        FreeRtos::delay_ms(sleep_ms.max(1) as u32);
    }
}
