//! Port traits: the hexagonal boundary between the controller and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! The engine never touches a register.  Signal lamps, detector lines and
//! the dwell timer are reached only through these traits, so the whole
//! control loop runs on the host against fakes.
//!
//! ## Contract notes
//!
//! - `init_outputs` / `init_inputs` run once, before the first emission.
//! - `read_inputs` is side-effect free and may be called at any time.  An
//!   interrupt-backed implementation must read the whole vector in one
//!   access so bits are never sampled at different instants.
//! - `wait` returns only after the full duration has elapsed.

use crate::error::InitError;
use crate::fsm::signals::{PedestrianLights, VehicleLights};

// ───────────────────────────────────────────────────────────────
// Signal port (driven adapter: domain → lamps)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the two lamp groups.
///
/// The groups are written by separate calls and must not affect each
/// other: writing the vehicle group leaves the pedestrian lamps as they
/// were, and vice versa.
pub trait SignalPort {
    /// One-time output configuration; lamps end in a known state.
    fn init_outputs(&mut self) -> Result<(), InitError>;

    /// Drive the six vehicle lamps.
    fn write_vehicle(&mut self, lights: VehicleLights);

    /// Drive the pedestrian lamps.
    fn write_pedestrian(&mut self, lights: PedestrianLights);
}

// ───────────────────────────────────────────────────────────────
// Detector port (driven adapter: sensors → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the detector lines.
pub trait DetectorPort {
    /// One-time input configuration.
    fn init_inputs(&mut self) -> Result<(), InitError>;

    /// Current raw input vector, bit 0 = lowest-numbered detector line.
    /// May carry bits above the table's width; the engine masks them.
    fn read_inputs(&mut self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Dwell timer (driven adapter: domain → time base)
// ───────────────────────────────────────────────────────────────

/// Blocking delay in dwell units (10 ms by default).
pub trait DwellTimer {
    fn wait(&mut self, units: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
