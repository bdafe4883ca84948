//! Integration tests for the Controller → FSM → ports pipeline.
//!
//! Runs the reference intersection against [`MockBoard`] and checks the
//! order of port calls as well as where the FSM ends up.

use crate::mock_hw::{HwCall, MockBoard, RecordingSink};

use intersection::app::events::AppEvent;
use intersection::app::service::Controller;
use intersection::config::SystemConfig;
use intersection::error::{Error, InitError};
use intersection::fsm::signals::{OutputPattern, PedestrianLights, VehicleLights, mask_input};
use intersection::fsm::states::{Phase, REFERENCE_DWELL, reference_table};

fn make_controller(start: usize) -> Controller {
    let config = SystemConfig {
        start_state: start,
        ..SystemConfig::default()
    };
    Controller::new(reference_table().unwrap(), &config).unwrap()
}

fn run(start: Phase, inputs: &[u32]) -> (Controller, MockBoard, RecordingSink) {
    let mut c = make_controller(start.index());
    let mut hw = MockBoard::scripted(inputs);
    let mut sink = RecordingSink::new();
    c.run_cycles(inputs.len() as u64, &mut hw, &mut sink)
        .unwrap();
    (c, hw, sink)
}

// ── Cycle ordering ────────────────────────────────────────────

#[test]
fn one_cycle_emits_then_waits_then_samples() {
    let (c, hw, _) = run(Phase::AllRed, &[0b010]);

    assert_eq!(
        hw.calls,
        vec![
            HwCall::InitOutputs,
            HwCall::InitInputs,
            HwCall::Vehicle(VehicleLights::from_bits(0x24)),
            HwCall::Pedestrian(PedestrianLights::DONT_WALK),
            HwCall::Wait(REFERENCE_DWELL),
            HwCall::Read(0b010),
        ]
    );
    assert_eq!(c.state_name(), "SouthGo");
    assert_eq!(c.cycle_count(), 1);
}

#[test]
fn every_sample_follows_a_full_wait() {
    let (_, hw, _) = run(Phase::AllRed, &[0b001, 0b011, 0b100, 0, 0, 0]);

    for (i, call) in hw.calls.iter().enumerate() {
        if let HwCall::Read(_) = call {
            assert_eq!(hw.calls[i - 1], HwCall::Wait(REFERENCE_DWELL));
        }
    }
}

#[test]
fn both_groups_written_before_every_wait() {
    let (_, hw, _) = run(Phase::AllRed, &[0b010, 0b000, 0b000]);

    for (i, call) in hw.calls.iter().enumerate() {
        if let HwCall::Wait(_) = call {
            assert!(matches!(hw.calls[i - 2], HwCall::Vehicle(_)));
            assert!(matches!(hw.calls[i - 1], HwCall::Pedestrian(_)));
        }
    }
}

// ── Reference scenarios ───────────────────────────────────────

#[test]
fn north_south_car_is_served_then_released() {
    let (c, _, sink) = run(Phase::AllRed, &[0b010, 0b010, 0b000]);

    assert_eq!(c.state_name(), "SouthWait");
    assert_eq!(
        sink.changes(),
        vec![("AllRed", "SouthGo"), ("SouthGo", "SouthWait")]
    );
}

#[test]
fn pedestrian_phase_flashes_dont_walk_twice() {
    let (c, hw, _) = run(Phase::AllRed, &[0b100, 0, 0, 0, 0, 0b010]);

    assert_eq!(c.state_name(), "SouthGo");
    assert_eq!(
        hw.patterns_at_wait(),
        vec![
            OutputPattern::new(0x24, 0x02), // AllRed
            OutputPattern::new(0x24, 0x08), // WalkOn
            OutputPattern::new(0x24, 0x02), // DontWalkOn1
            OutputPattern::new(0x24, 0x00), // DontWalkOff1
            OutputPattern::new(0x24, 0x02), // DontWalkOn2
            OutputPattern::new(0x24, 0x00), // DontWalkOff2
        ]
    );
    assert_eq!(hw.total_wait(), 6 * u64::from(REFERENCE_DWELL));
}

#[test]
fn walk_holds_while_pedestrian_is_alone() {
    let (c, _, _) = run(Phase::WalkOn, &[0b100, 0b100, 0b100]);
    assert_eq!(c.state_name(), "WalkOn");
}

#[test]
fn west_go_routes_pedestrian_through_west_wait() {
    let (c, _, _) = run(Phase::WestGo, &[0b100]);
    assert_eq!(c.state_name(), "WestWait");
}

#[test]
fn start_state_from_config_is_emitted_first() {
    let (_, hw, _) = run(Phase::WestGo, &[0b001]);
    assert_eq!(hw.calls[2], HwCall::Vehicle(VehicleLights::from_bits(0x0C)));
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn self_loop_emits_no_state_change() {
    let (c, _, sink) = run(Phase::AllRed, &[0, 0]);

    assert_eq!(c.state_name(), "AllRed");
    assert!(sink.changes().is_empty());
    assert!(matches!(sink.events[0], AppEvent::Started { name: "AllRed", .. }));
    assert_eq!(sink.events.len(), 3);
}

#[test]
fn glitch_bits_are_masked_and_reported() {
    let (c, _, sink) = run(Phase::AllRed, &[0xFA]);

    assert_eq!(c.state_name(), "SouthGo");
    assert!(matches!(sink.events[1], AppEvent::OutputsApplied { .. }));
    assert_eq!(
        sink.events[2],
        AppEvent::InputMasked {
            raw: 0xFA,
            masked: mask_input(0b010),
        }
    );
    assert!(matches!(
        sink.events[3],
        AppEvent::StateChanged {
            from_name: "AllRed",
            to_name: "SouthGo",
            ..
        }
    ));
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn ports_initialised_once_across_runs() {
    let mut c = make_controller(0);
    let mut hw = MockBoard::scripted(&[0, 0, 0]);
    let mut sink = RecordingSink::new();

    c.run_cycles(1, &mut hw, &mut sink).unwrap();
    c.run_cycles(2, &mut hw, &mut sink).unwrap();

    let inits = hw
        .calls
        .iter()
        .filter(|c| matches!(c, HwCall::InitOutputs | HwCall::InitInputs))
        .count();
    assert_eq!(inits, 2);
    assert_eq!(c.cycle_count(), 3);
}

#[test]
fn single_cycle_initialises_ports_before_first_write() {
    let mut c = make_controller(0);
    let mut hw = MockBoard::scripted(&[0b001]);
    let mut sink = RecordingSink::new();

    let t = c.cycle(&mut hw, &mut sink).unwrap();

    assert!(t.changed());
    assert_eq!(&hw.calls[..2], &[HwCall::InitOutputs, HwCall::InitInputs]);
    assert!(c.is_started());
    assert!(matches!(sink.events[0], AppEvent::Started { .. }));
}

#[test]
fn single_cycle_with_dead_outputs_writes_nothing() {
    let mut c = make_controller(0);
    let mut hw = MockBoard::new();
    hw.fail_outputs = true;
    let mut sink = RecordingSink::new();

    assert!(c.cycle(&mut hw, &mut sink).is_err());
    assert_eq!(hw.calls, vec![HwCall::InitOutputs]);
    assert_eq!(c.cycle_count(), 0);
}

#[test]
fn output_init_failure_never_enters_loop() {
    let mut c = make_controller(0);
    let mut hw = MockBoard::new();
    hw.fail_outputs = true;
    let mut sink = RecordingSink::new();

    let err = c.run_forever(&mut hw, &mut sink).err();

    assert_eq!(
        err,
        Some(Error::Init(InitError::Outputs("mock lamp driver offline")))
    );
    assert_eq!(hw.calls, vec![HwCall::InitOutputs]);
    assert!(sink.events.is_empty());
    assert!(!c.is_started());
}

#[test]
fn input_init_runs_after_outputs_and_can_fail() {
    let mut c = make_controller(0);
    let mut hw = MockBoard::new();
    hw.fail_inputs = true;
    let mut sink = RecordingSink::new();

    let result = c.run_cycles(5, &mut hw, &mut sink);

    assert!(matches!(result, Err(Error::Init(InitError::Inputs(_)))));
    assert_eq!(hw.calls, vec![HwCall::InitOutputs, HwCall::InitInputs]);
    assert_eq!(c.cycle_count(), 0);
}
