//! Fuzz target: `StateTable::new`
//!
//! Builds rows from raw bytes (one byte per transition target) and checks
//! that validation either rejects the table or yields one whose every
//! lookup stays in range.
//!
//! cargo fuzz run fuzz_table_rows

#![no_main]

use intersection::fsm::signals::{INPUT_SPACE, InputVector, OutputPattern};
use intersection::fsm::table::{StateRow, StateTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let rows: Vec<StateRow> = data
        .chunks_exact(INPUT_SPACE + 2)
        .map(|c| StateRow {
            name: "fuzz",
            output: OutputPattern::new(c[0], c[1]),
            dwell: u32::from(c[0]),
            next: core::array::from_fn(|i| usize::from(c[i + 2] & 0x1F)),
        })
        .collect();

    let Ok(table) = StateTable::new(&rows) else {
        return;
    };
    for state in table.iter() {
        for input in InputVector::all() {
            let next = table.lookup(state.id(), input).expect("own id refused");
            assert!(next.index() < table.len());
        }
    }
});
