//! Host time adapter.
//!
//! [`SleepTimer`] implements [`DwellTimer`] with `std::thread::sleep` for
//! simulation runs on a workstation.  A `time_scale` greater than one
//! shortens every wait so long sequences can be watched quickly.

use std::time::{Duration, Instant};

use crate::app::ports::DwellTimer;
use crate::config::{self, SystemConfig};

/// Blocking dwell timer backed by the OS scheduler.
pub struct SleepTimer {
    unit_ms: u32,
    time_scale: u32,
    start: Instant,
}

impl SleepTimer {
    pub fn new(unit_ms: u32, time_scale: u32) -> Self {
        Self {
            unit_ms,
            time_scale,
            start: Instant::now(),
        }
    }

    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.dwell_unit_ms, config.time_scale)
    }

    /// Real duration of `units` dwell units after scaling.
    pub fn duration(&self, units: u32) -> Duration {
        Duration::from_millis(config::scaled_wait_ms(units, self.unit_ms, self.time_scale))
    }

    /// Milliseconds since the timer was created (monotonic).
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl DwellTimer for SleepTimer {
    fn wait(&mut self, units: u32) {
        std::thread::sleep(self.duration(units));
    }
}
