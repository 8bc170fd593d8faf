//! Shutdown switch → long-press detector → power-off request.

use crate::mock_hw::Rig;

use relayloop::app::events::AppEvent;
use relayloop::config::SystemConfig;
use relayloop::control::long_press::HoldPhase;
use relayloop::control::toggle::LoopState;
use relayloop::control::{RelayLevel, SwitchId};

/// 1ms polling so hold durations are measured to the millisecond.
fn fine_rig() -> Rig {
    Rig::with_config(&SystemConfig {
        poll_interval_ms: 1,
        ..SystemConfig::default()
    })
}

#[test]
fn hold_of_4999ms_does_not_shut_down() {
    let mut rig = fine_rig();
    rig.hw.press(SwitchId::Shutdown, 1_000, 5_999);
    rig.run_until(8_000);

    assert!(rig.power.requests.is_empty());
    assert_eq!(rig.sink.times_of(AppEvent::HoldStarted), vec![1_000]);
    assert_eq!(rig.sink.count(AppEvent::HoldCancelled { held_ms: 4_999 }), 1);
    assert_eq!(rig.app.hold_phase(), HoldPhase::Idle);
}

#[test]
fn hold_of_5001ms_shuts_down_exactly_once() {
    let mut rig = fine_rig();
    rig.hw.press(SwitchId::Shutdown, 1_000, 6_001);
    rig.run_until(8_000);

    assert_eq!(rig.power.requests, vec![6_000]);
    assert_eq!(rig.sink.count(AppEvent::ShutdownRequested { held_ms: 5_000 }), 1);
    assert_eq!(rig.app.hold_phase(), HoldPhase::Fired);
}

#[test]
fn continued_hold_never_fires_twice() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Shutdown, 1_000, 30_000);
    rig.run_until(31_000);

    assert_eq!(rig.power.requests, vec![6_000]);
    assert!(!rig.sink.contains(|e| matches!(e, AppEvent::HoldCancelled { .. })));
}

#[test]
fn fresh_press_after_firing_is_inert() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Shutdown, 1_000, 7_000);
    rig.hw.press(SwitchId::Shutdown, 8_000, 15_000);
    rig.run_until(20_000);

    assert_eq!(rig.power.requests.len(), 1);
    assert_eq!(rig.sink.count(AppEvent::SwitchPressed(SwitchId::Shutdown)), 2);
    assert_eq!(rig.sink.count(AppEvent::HoldStarted), 1);
    assert_eq!(rig.app.hold_phase(), HoldPhase::Fired);
}

#[test]
fn release_restarts_measurement_from_zero() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Shutdown, 1_000, 4_000);
    rig.hw.press(SwitchId::Shutdown, 4_500, 9_400);
    rig.run_until(9_450);
    assert!(rig.power.requests.is_empty(), "holds must not accumulate");

    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Shutdown, 1_000, 4_000);
    rig.hw.press(SwitchId::Shutdown, 4_500, 9_600);
    rig.run_until(10_000);
    assert_eq!(rig.power.requests, vec![9_500]);
}

#[test]
fn failed_shutdown_is_reported_and_not_retried() {
    let mut rig = Rig::new();
    rig.power.fail = true;
    rig.hw.press(SwitchId::Shutdown, 1_000, 20_000);
    rig.run_until(20_000);

    assert_eq!(rig.power.requests, vec![6_000]);
    assert_eq!(rig.sink.times_of(AppEvent::ShutdownFailed), vec![6_000]);
    assert_eq!(rig.app.hold_phase(), HoldPhase::Fired);
}

#[test]
fn read_failure_during_hold_keeps_measuring() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Shutdown, 1_000, 7_000);
    rig.hw.fail_reads(SwitchId::Shutdown, 3_000, 3_300);
    rig.run_until(8_000);

    assert_eq!(rig.sink.count(AppEvent::SwitchReadFailed(SwitchId::Shutdown)), 3);
    assert_eq!(rig.power.requests, vec![6_000]);
}

#[test]
fn blink_and_hold_run_side_by_side() {
    let mut rig = Rig::new();
    rig.hw.press(SwitchId::Control, 150, 250);
    rig.hw.press(SwitchId::Shutdown, 1_000, 7_000);
    rig.run_until(7_000);

    assert_eq!(rig.power.requests, vec![6_000]);
    assert_eq!(rig.app.loop_state(), LoopState::Running);
    assert_eq!(
        rig.hw.relay_levels_since(200),
        vec![RelayLevel::On, RelayLevel::Off, RelayLevel::On, RelayLevel::Off]
    );
}
