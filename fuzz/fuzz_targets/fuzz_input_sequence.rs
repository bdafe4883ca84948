//! Fuzz target: `Fsm::step` on the reference table
//!
//! Treats the input as a start row followed by little-endian u32 detector
//! samples and asserts the cursor never leaves the table.
//!
//! cargo fuzz run fuzz_input_sequence

#![no_main]

use intersection::fsm::Fsm;
use intersection::fsm::states::reference_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&start, samples)) = data.split_first() else {
        return;
    };
    let Ok(table) = reference_table() else {
        return;
    };
    let len = table.len();
    let Ok(mut fsm) = Fsm::new(table, usize::from(start) % len) else {
        return;
    };

    for chunk in samples.chunks(4) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        let t = fsm.step(u32::from_le_bytes(word));
        assert!(t.to.index() < len, "cursor left the table");
        assert!(t.input.index() < 8, "unmasked input column");
    }
});
