//! In-memory lamp board for host simulation.
//!
//! Tracks the two lamp groups the way a register would and logs every
//! write.  Nothing here touches hardware.

use log::trace;

use crate::app::ports::SignalPort;
use crate::error::InitError;
use crate::fsm::signals::{OutputPattern, PedestrianLights, VehicleLights};

#[derive(Debug, Default)]
pub struct SimSignals {
    vehicle: VehicleLights,
    pedestrian: PedestrianLights,
    writes: u64,
}

impl SimSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the lamps currently show.
    pub fn showing(&self) -> OutputPattern {
        OutputPattern {
            vehicle: self.vehicle,
            pedestrian: self.pedestrian,
        }
    }

    /// Group writes since creation.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl SignalPort for SimSignals {
    fn init_outputs(&mut self) -> Result<(), InitError> {
        self.vehicle = VehicleLights::OFF;
        self.pedestrian = PedestrianLights::OFF;
        Ok(())
    }

    fn write_vehicle(&mut self, lights: VehicleLights) {
        self.vehicle = lights;
        self.writes += 1;
        trace!("sim: vehicle {}", lights);
    }

    fn write_pedestrian(&mut self, lights: PedestrianLights) {
        self.pedestrian = lights;
        self.writes += 1;
        trace!("sim: pedestrian {}", lights);
    }
}
