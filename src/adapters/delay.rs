//! Dwell timer over an `embedded-hal` 1.0 delay provider.
//!
//! Any HAL delay (SysTick, a hardware timer, a busy loop) implementing
//! [`DelayNs`] becomes a [`DwellTimer`].  The wait blocks for the full
//! `units × unit_ms`; the engine treats it as one synchronous call even if
//! the HAL sleeps on an interrupt underneath.

use embedded_hal::delay::DelayNs;

use crate::app::ports::DwellTimer;

pub struct HalDelayTimer<D: DelayNs> {
    delay: D,
    unit_ms: u32,
}

impl<D: DelayNs> HalDelayTimer<D> {
    pub fn new(delay: D, unit_ms: u32) -> Self {
        Self { delay, unit_ms }
    }

    pub fn unit_ms(&self) -> u32 {
        self.unit_ms
    }
}

impl<D: DelayNs> DwellTimer for HalDelayTimer<D> {
    fn wait(&mut self, units: u32) {
        // Saturates at ~49 days, far beyond any tabulated dwell.
        self.delay.delay_ms(units.saturating_mul(self.unit_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn wait_multiplies_by_unit() {
        let mut t = HalDelayTimer::new(CountingDelay::default(), 10);
        t.wait(50);
        assert_eq!(t.delay.total_ns, 500 * 1_000_000);
    }

    #[test]
    fn zero_units_does_not_wait() {
        let mut t = HalDelayTimer::new(CountingDelay::default(), 10);
        t.wait(0);
        assert_eq!(t.delay.total_ns, 0);
    }
}
