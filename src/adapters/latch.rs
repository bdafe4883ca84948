//! Interrupt-latched detector inputs.
//!
//! Detector edge ISRs (or the host simulator) write the whole input vector
//! into an [`InputLatch`]; the control loop reads it through
//! [`LatchedDetectors`] with a single atomic load, so every bit of a sample
//! comes from the same instant.
//!
//! ```text
//!  detector ISR ──store/set_line──▶ InputLatch (AtomicU32) ──load──▶ loop
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use crate::app::ports::DetectorPort;
use crate::error::InitError;

/// Shared input register.  Usable from a `static`.
pub struct InputLatch {
    bits: AtomicU32,
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLatch {
    pub const fn new() -> Self {
        Self {
            bits: AtomicU32::new(0),
        }
    }

    /// Replace the whole vector.
    pub fn store(&self, raw: u32) {
        self.bits.store(raw, Ordering::Release);
    }

    /// Raise or drop one detector line, leaving the others untouched.
    pub fn set_line(&self, bit: u8, present: bool) {
        if present {
            self.bits.fetch_or(u32::from(bit), Ordering::AcqRel);
        } else {
            self.bits.fetch_and(!u32::from(bit), Ordering::AcqRel);
        }
    }

    /// One tear-free read of the full vector.
    pub fn load(&self) -> u32 {
        self.bits.load(Ordering::Acquire)
    }
}

/// [`DetectorPort`] view over a shared latch.
pub struct LatchedDetectors<'a> {
    latch: &'a InputLatch,
}

impl<'a> LatchedDetectors<'a> {
    pub fn new(latch: &'a InputLatch) -> Self {
        Self { latch }
    }
}

impl DetectorPort for LatchedDetectors<'_> {
    fn init_inputs(&mut self) -> Result<(), InitError> {
        Ok(())
    }

    fn read_inputs(&mut self) -> u32 {
        self.latch.load()
    }
}
