//! The engine is not tied to the reference intersection: any validated
//! table runs through the same controller.

use crate::mock_hw::{HwCall, MockBoard, RecordingSink};

use intersection::app::service::Controller;
use intersection::config::SystemConfig;
use intersection::error::{Error, TableError};
use intersection::fsm::signals::{INPUT_SPACE, OutputPattern};
use intersection::fsm::table::{MAX_STATES, StateRow, StateTable};

fn blinker() -> [StateRow; 2] {
    [
        StateRow {
            name: "On",
            output: OutputPattern::new(0x01, 0x00),
            dwell: 3,
            next: [1; INPUT_SPACE],
        },
        StateRow {
            name: "Off",
            output: OutputPattern::dark(),
            dwell: 7,
            next: [0; INPUT_SPACE],
        },
    ]
}

#[test]
fn custom_table_uses_its_own_dwell_times() {
    let table = StateTable::new(&blinker()).unwrap();
    let mut c = Controller::new(table, &SystemConfig::default()).unwrap();
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();

    c.run_cycles(4, &mut hw, &mut sink).unwrap();

    let waits: Vec<u32> = hw
        .calls
        .iter()
        .filter_map(|c| match c {
            HwCall::Wait(u) => Some(*u),
            _ => None,
        })
        .collect();
    assert_eq!(waits, vec![3, 7, 3, 7]);
    assert_eq!(c.state_name(), "On");
    assert_eq!(sink.changes().len(), 4);
}

#[test]
fn dangling_target_rejected_before_any_port_call() {
    let mut rows = blinker();
    rows[1].next[6] = 2;

    let err = StateTable::new(&rows).err();
    assert_eq!(
        err,
        Some(TableError::DanglingTransition {
            state: 1,
            input: 6,
            target: 2,
        })
    );
}

#[test]
fn oversized_table_rejected() {
    let rows = [blinker()[1]; MAX_STATES + 1];
    let err = StateTable::new(&rows).err();
    assert_eq!(
        err,
        Some(TableError::TooManyStates {
            count: MAX_STATES + 1,
            max: MAX_STATES,
        })
    );
}

#[test]
fn start_outside_custom_table_rejected() {
    let config = SystemConfig {
        start_state: 2,
        ..SystemConfig::default()
    };
    let table = StateTable::new(&blinker()).unwrap();
    let err = Controller::new(table, &config).err();
    assert_eq!(
        err,
        Some(Error::Table(TableError::InvalidStart { index: 2, len: 2 }))
    );
}
