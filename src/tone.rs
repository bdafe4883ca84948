//! Sine tone generator for a small resistor-ladder DAC.
//!
//! Independent of the intersection controller.  A periodic timer interrupt
//! calls [`ToneGenerator::tick`], which steps through a 16-sample 3-bit
//! sine and writes each sample to the DAC.  Pitch is set by the timer's
//! reload value: one full wave takes `16 × period` timer clocks.
//!
//! ```text
//!  timer ISR ──tick()──▶ SINE_WAVE[i] ──▶ DacPort ──▶ speaker
//!  set_period(p) ──────▶ ReloadTimer
//! ```

use log::{debug, warn};

use crate::error::InitError;

/// One period of a sine wave quantised to 3 bits.
pub const SINE_WAVE: [u8; 16] = [4, 5, 6, 7, 7, 7, 6, 5, 4, 3, 2, 1, 1, 1, 2, 3];

/// Largest reload value a 24-bit down-counter accepts.
pub const MAX_PERIOD: u32 = 0x00FF_FFFF;

/// Write side of the DAC.
pub trait DacPort {
    /// One-time configuration of the DAC lines.
    fn init_dac(&mut self) -> Result<(), InitError> {
        Ok(())
    }

    /// Drive the DAC to `level`.
    fn write(&mut self, level: u8);
}

/// Periodic interrupt source whose reload value sets the tick rate.
/// A reload of 0 stops the interrupt.
pub trait ReloadTimer {
    fn set_reload(&mut self, period: u32);
}

pub struct ToneGenerator<D: DacPort, T: ReloadTimer> {
    dac: D,
    timer: T,
    index: usize,
    period: u32,
}

impl<D: DacPort, T: ReloadTimer> ToneGenerator<D, T> {
    /// Configure the DAC and park the timer.  No sound until
    /// [`set_period`](Self::set_period).
    pub fn new(mut dac: D, mut timer: T) -> Result<Self, InitError> {
        dac.init_dac()?;
        timer.set_reload(0);
        Ok(Self {
            dac,
            timer,
            index: 0,
            period: 0,
        })
    }

    /// Advance one sample and write it.  Call from the timer interrupt.
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % SINE_WAVE.len();
        self.dac.write(SINE_WAVE[self.index]);
    }

    /// Program the timer reload value, in timer clocks per sample.
    /// Values above [`MAX_PERIOD`] are clamped.
    pub fn set_period(&mut self, period: u32) {
        let period = if period > MAX_PERIOD {
            warn!("tone period {} exceeds counter width, clamped", period);
            MAX_PERIOD
        } else {
            period
        };
        self.period = period;
        self.timer.set_reload(period);
        debug!("tone period = {}", period);
    }

    /// Silence: DAC to 0 and timer stopped.
    pub fn off(&mut self) {
        self.dac.write(0);
        self.set_period(0);
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn is_playing(&self) -> bool {
        self.period != 0
    }

    /// Current position in [`SINE_WAVE`].
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn into_parts(self) -> (D, T) {
        (self.dac, self.timer)
    }
}
