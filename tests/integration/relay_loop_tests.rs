//! Control switch → toggle → relay blink, end to end.
//!
//! Default timing: polls every 100ms from t=0, relay on 100ms / off 5000ms.

use crate::mock_hw::Rig;

use relayloop::app::events::AppEvent;
use relayloop::control::toggle::LoopState;
use relayloop::control::{RelayLevel, SwitchId};

#[test]
fn start_leaves_relay_off_and_idle() {
    let mut rig = Rig::new();
    rig.run_until(20_000);

    assert_eq!(rig.hw.relay_writes, vec![(0, RelayLevel::Off)]);
    assert_eq!(rig.app.loop_state(), LoopState::Stopped);
    assert_eq!(rig.sink.count(AppEvent::Started), 1);
    assert!(!rig.sink.contains(|e| matches!(e, AppEvent::RelayFlipped(_))));
}

#[test]
fn press_starts_blink_with_on_then_off_timing() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Control, 150, 250);
    rig.run_until(10_450);

    assert_eq!(
        rig.hw.relay_writes,
        vec![
            (0, RelayLevel::Off),
            (200, RelayLevel::On),
            (300, RelayLevel::Off),
            (5_300, RelayLevel::On),
            (5_400, RelayLevel::Off),
            (10_400, RelayLevel::On),
        ]
    );
    assert_eq!(rig.sink.times_of(AppEvent::RelayLoopStarted), vec![200]);
    assert_eq!(rig.app.loop_state(), LoopState::Running);
}

#[test]
fn second_press_stops_loop_and_forces_relay_off() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Control, 150, 250);
    rig.hw.press(SwitchId::Control, 1_000, 1_100);
    rig.run_until(30_000);

    assert_eq!(rig.sink.times_of(AppEvent::RelayLoopStarted), vec![200]);
    assert_eq!(rig.sink.times_of(AppEvent::RelayLoopStopped), vec![1_000]);
    assert_eq!(rig.hw.last_relay_write(), Some((1_000, RelayLevel::Off)));
    assert_eq!(rig.app.loop_state(), LoopState::Stopped);

    let state = rig.app.relay_state();
    assert!(!state.armed);
    assert_eq!(state.pending_deadline_ms, None);
}

#[test]
fn holding_control_switch_toggles_once() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Control, 150, 3_000);
    rig.run_until(4_000);

    assert_eq!(rig.sink.count(AppEvent::SwitchPressed(SwitchId::Control)), 1);
    assert_eq!(rig.sink.count(AppEvent::RelayLoopStarted), 1);
    assert_eq!(rig.app.loop_state(), LoopState::Running);
}

#[test]
fn restart_does_not_inherit_stale_flip() {
    let mut rig = Rig::new();
    // Start at 200 (off-flip due 300, next on-flip due 5300).
    rig.hw.press(SwitchId::Control, 150, 250);
    // Stop at 400, restart at 600.
    rig.hw.press(SwitchId::Control, 350, 450);
    rig.hw.press(SwitchId::Control, 550, 650);
    rig.run_until(5_650);

    assert_eq!(
        rig.hw.relay_writes,
        vec![
            (0, RelayLevel::Off),
            (200, RelayLevel::On),
            (300, RelayLevel::Off),
            (400, RelayLevel::Off),
            (600, RelayLevel::On),
            (700, RelayLevel::Off),
        ]
    );
}

#[test]
fn failed_read_skips_the_poll() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Control, 150, 350);
    rig.hw.fail_reads(SwitchId::Control, 150, 250);
    rig.run_until(1_000);

    assert_eq!(
        rig.sink.times_of(AppEvent::SwitchReadFailed(SwitchId::Control)),
        vec![200]
    );
    assert_eq!(rig.sink.times_of(AppEvent::RelayLoopStarted), vec![300]);
}

#[test]
fn failed_read_mid_press_is_not_a_new_edge() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Control, 150, 1_000);
    rig.hw.fail_reads(SwitchId::Control, 400, 500);
    rig.run_until(2_000);

    assert_eq!(rig.sink.count(AppEvent::SwitchReadFailed(SwitchId::Control)), 1);
    assert_eq!(rig.sink.count(AppEvent::SwitchPressed(SwitchId::Control)), 1);
    assert_eq!(rig.app.loop_state(), LoopState::Running);
}

#[test]
fn relay_write_failure_keeps_schedule_running() {
    let mut rig = Rig::new();
    rig.hw.fail_relay_writes = true;
    rig.hw.press(SwitchId::Control, 150, 250);
    rig.run_until(5_350);

    assert_eq!(rig.sink.times_of(AppEvent::RelayWriteFailed(RelayLevel::On)), vec![200, 5_300]);
    assert_eq!(rig.sink.times_of(AppEvent::RelayWriteFailed(RelayLevel::Off)), vec![300]);

    rig.hw.fail_relay_writes = false;
    rig.run_until(5_450);
    assert_eq!(rig.sink.times_of(AppEvent::RelayFlipped(RelayLevel::Off)), vec![5_400]);
    assert_eq!(rig.app.relay_state().level, RelayLevel::Off);
}

#[test]
fn shutdown_switch_does_not_touch_relay_loop() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Shutdown, 150, 1_000);
    rig.run_until(2_000);

    assert_eq!(rig.app.loop_state(), LoopState::Stopped);
    assert_eq!(rig.hw.relay_writes, vec![(0, RelayLevel::Off)]);
}
