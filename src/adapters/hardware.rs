//! Board adapter: bundles the three hardware ports into one value.
//!
//! The controller wants a single `hw` implementing [`SignalPort`],
//! [`DetectorPort`] and [`DwellTimer`].  [`Board`] owns one adapter for
//! each and delegates, so lamps, detectors and timing can be mixed freely
//! (GPIO lamps with latched detectors, simulated lamps with a sleep timer,
//! and so on).

use crate::app::ports::{DetectorPort, DwellTimer, SignalPort};
use crate::error::InitError;
use crate::fsm::signals::{PedestrianLights, VehicleLights};

/// Concrete adapter that combines lamps, detectors and timer.
pub struct Board<S, D, T> {
    pub signals: S,
    pub detectors: D,
    pub timer: T,
}

impl<S, D, T> Board<S, D, T> {
    pub fn new(signals: S, detectors: D, timer: T) -> Self {
        Self {
            signals,
            detectors,
            timer,
        }
    }

    pub fn into_parts(self) -> (S, D, T) {
        (self.signals, self.detectors, self.timer)
    }
}

// ── SignalPort implementation ─────────────────────────────────

impl<S: SignalPort, D, T> SignalPort for Board<S, D, T> {
    fn init_outputs(&mut self) -> Result<(), InitError> {
        self.signals.init_outputs()
    }

    fn write_vehicle(&mut self, lights: VehicleLights) {
        self.signals.write_vehicle(lights);
    }

    fn write_pedestrian(&mut self, lights: PedestrianLights) {
        self.signals.write_pedestrian(lights);
    }
}

// ── DetectorPort implementation ───────────────────────────────

impl<S, D: DetectorPort, T> DetectorPort for Board<S, D, T> {
    fn init_inputs(&mut self) -> Result<(), InitError> {
        self.detectors.init_inputs()
    }

    fn read_inputs(&mut self) -> u32 {
        self.detectors.read_inputs()
    }
}

// ── DwellTimer implementation ─────────────────────────────────

impl<S, D, T: DwellTimer> DwellTimer for Board<S, D, T> {
    fn wait(&mut self, units: u32) {
        self.timer.wait(units);
    }
}
