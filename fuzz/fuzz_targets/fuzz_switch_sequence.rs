//! Fuzz target: `AppService` under arbitrary switch activity
//!
//! Each input byte is one tick: bit 0 = control switch, bit 1 = shutdown
//! switch, bit 2 = relay write fails, upper bits = ms to advance.
//! Invariants checked:
//! - No panics
//! - At most one shutdown request per run
//! - A stopped loop has no pending flip
//! - While no write has failed, a stopped loop leaves the relay Off
//!
//! cargo fuzz run fuzz_switch_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use relayloop::app::events::AppEvent;
use relayloop::app::ports::{EventSink, RelayPort, ShutdownPort, SwitchPort};
use relayloop::app::service::AppService;
use relayloop::config::SystemConfig;
use relayloop::control::toggle::LoopState;
use relayloop::control::{RelayLevel, SwitchId, SwitchLevel};
use relayloop::error::{GpioError, ShutdownError};

#[derive(Default)]
struct Bench {
    control: bool,
    shutdown: bool,
    fail_writes: bool,
    any_write_failed: bool,
    last_written: Option<RelayLevel>,
}

impl SwitchPort for Bench {
    fn sample(&mut self, switch: SwitchId) -> Result<SwitchLevel, GpioError> {
        let pressed = match switch {
            SwitchId::Control => self.control,
            SwitchId::Shutdown => self.shutdown,
        };
        Ok(if pressed { SwitchLevel::Pressed } else { SwitchLevel::Released })
    }
}

impl RelayPort for Bench {
    fn set_relay(&mut self, level: RelayLevel) -> Result<(), GpioError> {
        if self.fail_writes {
            self.any_write_failed = true;
            return Err(GpioError::WriteFailed { gpio: 16 });
        }
        self.last_written = Some(level);
        Ok(())
    }
}

struct Power<'a>(&'a mut u32);

impl ShutdownPort for Power<'_> {
    fn request_shutdown(&mut self) -> Result<(), ShutdownError> {
        *self.0 += 1;
        Ok(())
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let config = SystemConfig {
        hold_threshold_ms: 500,
        ..SystemConfig::default()
    };
    let mut app = AppService::new(&config);
    let mut bench = Bench::default();
    let mut shutdowns = 0u32;
    app.start(0, &mut bench, &mut Discard);

    let mut now = 0u64;
    for &byte in data {
        bench.control = byte & 0b001 != 0;
        bench.shutdown = byte & 0b010 != 0;
        bench.fail_writes = byte & 0b100 != 0;
        now += u64::from(byte >> 3) * 10;

        app.tick(now, &mut bench, &mut Power(&mut shutdowns), &mut Discard);

        assert!(shutdowns <= 1);
        if app.loop_state() == LoopState::Stopped {
            assert_eq!(app.relay_state().pending_deadline_ms, None);
            if !bench.any_write_failed {
                assert_ne!(bench.last_written, Some(RelayLevel::On));
            }
        }
    }
});
