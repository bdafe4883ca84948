//! GPIO adapters over `embedded-hal` 1.0 digital pins.
//!
//! [`GpioSignals`] drives eight lamp lines (six vehicle, two pedestrian)
//! from the output pattern bits; [`GpioDetectors`] samples three detector
//! lines into an input vector.  Line order comes from [`pins`].
//!
//! Pin direction and pull configuration belong to the HAL that hands out
//! the pins; by the time they reach these adapters they are already
//! outputs/inputs.  `init_*` only drives the lamps dark and proves every
//! detector line can be read.
//!
//! Per-line read/write errors after init are logged and otherwise ignored:
//! the control loop has no error channel, and a stuck lamp is a hardware
//! problem, not a reason to stop sequencing the others.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::warn;

use crate::app::ports::{DetectorPort, SignalPort};
use crate::error::InitError;
use crate::fsm::signals::{PedestrianLights, VehicleLights};
use crate::pins;

// ───────────────────────────────────────────────────────────────
// Lamp outputs
// ───────────────────────────────────────────────────────────────

/// Lamp driver over eight output pins.
pub struct GpioSignals<P: OutputPin> {
    vehicle: [P; 6],
    pedestrian: [P; 2],
    active_low: bool,
}

impl<P: OutputPin> GpioSignals<P> {
    /// `vehicle` in [`pins::VEHICLE_LINES`] order, `pedestrian` in
    /// [`pins::PEDESTRIAN_LINES`] order.
    pub fn new(vehicle: [P; 6], pedestrian: [P; 2]) -> Self {
        Self {
            vehicle,
            pedestrian,
            active_low: false,
        }
    }

    /// Lamps light when their line is LOW.
    pub fn active_low(mut self) -> Self {
        self.active_low = true;
        self
    }

    fn level(&self, lit: bool) -> PinState {
        PinState::from(lit != self.active_low)
    }

    /// Release the pins.
    pub fn into_inner(self) -> ([P; 6], [P; 2]) {
        (self.vehicle, self.pedestrian)
    }
}

fn drive<P: OutputPin>(lines: &mut [P], bits: &[u8], value: u8, active_low: bool, group: &str) {
    for (pin, &bit) in lines.iter_mut().zip(bits) {
        let lit = value & bit != 0;
        if let Err(e) = pin.set_state(PinState::from(lit != active_low)) {
            warn!("{} lamp 0x{:02X} write failed: {:?}", group, bit, e);
        }
    }
}

impl<P: OutputPin> SignalPort for GpioSignals<P> {
    fn init_outputs(&mut self) -> Result<(), InitError> {
        let dark = self.level(false);
        for pin in &mut self.vehicle {
            pin.set_state(dark)
                .map_err(|_| InitError::Outputs("vehicle lamp line rejected level"))?;
        }
        for pin in &mut self.pedestrian {
            pin.set_state(dark)
                .map_err(|_| InitError::Outputs("pedestrian lamp line rejected level"))?;
        }
        Ok(())
    }

    fn write_vehicle(&mut self, lights: VehicleLights) {
        let active_low = self.active_low;
        drive(
            &mut self.vehicle,
            &pins::VEHICLE_LINES,
            lights.bits(),
            active_low,
            "vehicle",
        );
    }

    fn write_pedestrian(&mut self, lights: PedestrianLights) {
        let active_low = self.active_low;
        drive(
            &mut self.pedestrian,
            &pins::PEDESTRIAN_LINES,
            lights.bits(),
            active_low,
            "pedestrian",
        );
    }
}

// ───────────────────────────────────────────────────────────────
// Detector inputs
// ───────────────────────────────────────────────────────────────

/// Detector sampler over three input pins, HIGH = presence.
///
/// Pins are read one after another, so this is not a single-instant sample.
/// Boards whose detectors raise interrupts should latch into
/// [`InputLatch`](super::latch::InputLatch) instead.
pub struct GpioDetectors<I: InputPin> {
    lines: [I; pins::INPUT_BITS as usize],
}

impl<I: InputPin> GpioDetectors<I> {
    /// `lines` in [`pins::DETECTOR_LINES`] order.
    pub fn new(lines: [I; pins::INPUT_BITS as usize]) -> Self {
        Self { lines }
    }
}

impl<I: InputPin> DetectorPort for GpioDetectors<I> {
    fn init_inputs(&mut self) -> Result<(), InitError> {
        for pin in &mut self.lines {
            pin.is_high()
                .map_err(|_| InitError::Inputs("detector line unreadable"))?;
        }
        Ok(())
    }

    fn read_inputs(&mut self) -> u32 {
        let mut raw = 0u32;
        for (pin, &bit) in self.lines.iter_mut().zip(&pins::DETECTOR_LINES) {
            match pin.is_high() {
                Ok(true) => raw |= u32::from(bit),
                Ok(false) => {}
                Err(e) => warn!("detector 0x{:02X} read failed: {:?}", bit, e),
            }
        }
        raw
    }
}
