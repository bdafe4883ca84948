//! Controller service, the hexagonal core.
//!
//! [`Controller`] owns the FSM engine and runs the Moore control loop.  All
//! I/O flows through port traits injected at call sites, making the entire
//! loop testable with mock adapters.
//!
//! ```text
//!  DetectorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                   │       Controller        │
//!   SignalPort ◀────│  Fsm · StateTable       │
//!   DwellTimer ◀────└────────────────────────┘
//! ```
//!
//! One cycle, in this order and no other:
//!
//! 1. write the current state's vehicle and pedestrian patterns;
//! 2. wait the state's dwell time;
//! 3. sample the detectors (after the wait, never before);
//! 4. step the FSM on the masked sample.

use core::convert::Infallible;

use log::{info, warn};

use crate::config::SystemConfig;
use crate::error::Result;
use crate::fsm::table::{StateId, StateTable};
use crate::fsm::{Fsm, Transition};

use super::events::AppEvent;
use super::ports::{DetectorPort, DwellTimer, EventSink, SignalPort};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// The controller orchestrates the Moore loop.
pub struct Controller {
    fsm: Fsm,
    cycle_count: u64,
    started: bool,
}

impl Controller {
    /// Validate `config` and build the engine over `table`, with the cursor
    /// on `config.start_state`.
    ///
    /// Every configuration error surfaces here, before any port is touched.
    pub fn new(table: StateTable, config: &SystemConfig) -> Result<Self> {
        config.validate()?;
        let fsm = Fsm::new(table, config.start_state)?;
        Ok(Self::from_fsm(fsm))
    }

    /// Wrap an already-constructed engine.
    pub fn from_fsm(fsm: Fsm) -> Self {
        Self {
            fsm,
            cycle_count: 0,
            started: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Move the cursor to row `start`.
    pub fn initialize(&mut self, start: usize) -> Result<()> {
        self.fsm.initialize(start)?;
        Ok(())
    }

    /// Run the one-time port configuration.  Outputs first, then inputs.
    pub fn start(
        &mut self,
        hw: &mut (impl SignalPort + DetectorPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        hw.init_outputs()?;
        hw.init_inputs()?;
        self.started = true;

        let state = self.fsm.current();
        sink.emit(&AppEvent::Started {
            state: state.id(),
            name: state.name(),
        });
        info!("Controller started in {}", state.name());
        Ok(())
    }

    // ── Control loop ──────────────────────────────────────────

    /// Execute one full Moore cycle: emit → dwell → sample → step.
    ///
    /// Starts the ports first if that has not happened yet, so no lamp is
    /// ever written before `init_outputs`/`init_inputs` have run.
    pub fn cycle(
        &mut self,
        hw: &mut (impl SignalPort + DetectorPort + DwellTimer),
        sink: &mut impl EventSink,
    ) -> Result<Transition> {
        if !self.started {
            self.start(hw, sink)?;
        }
        Ok(self.run_one(hw, sink))
    }

    fn run_one(
        &mut self,
        hw: &mut (impl SignalPort + DetectorPort + DwellTimer),
        sink: &mut impl EventSink,
    ) -> Transition {
        self.cycle_count = self.cycle_count.wrapping_add(1);

        // 1. Both lamp groups reflect the state before anything else happens.
        let state = self.fsm.current();
        let output = state.output();
        let dwell = state.dwell();
        hw.write_vehicle(output.vehicle);
        hw.write_pedestrian(output.pedestrian);
        sink.emit(&AppEvent::OutputsApplied {
            state: state.id(),
            output,
            dwell,
        });

        // 2. Dwell.
        hw.wait(dwell);

        // 3. Fresh sample.
        let raw = hw.read_inputs();

        // 4. Advance.
        let transition = self.fsm.step(raw);

        if transition.masked() {
            warn!(
                "Input glitch: raw=0x{:08X} masked to {}",
                raw, transition.input
            );
            sink.emit(&AppEvent::InputMasked {
                raw,
                masked: transition.input,
            });
        }

        if transition.changed() {
            let table = self.fsm.table();
            sink.emit(&AppEvent::StateChanged {
                from: transition.from,
                to: transition.to,
                from_name: table.record(transition.from).name(),
                to_name: table.record(transition.to).name(),
                input: transition.input,
            });
        }

        transition
    }

    /// Start the ports if needed, then run exactly `cycles` iterations.
    pub fn run_cycles(
        &mut self,
        cycles: u64,
        hw: &mut (impl SignalPort + DetectorPort + DwellTimer),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if !self.started {
            self.start(hw, sink)?;
        }
        for _ in 0..cycles {
            self.run_one(hw, sink);
        }
        Ok(())
    }

    /// Start the ports if needed, then loop for the life of the process.
    ///
    /// Only returns on a port initialisation error; once the loop is
    /// entered it never exits.
    pub fn run_forever(
        &mut self,
        hw: &mut (impl SignalPort + DetectorPort + DwellTimer),
        sink: &mut impl EventSink,
    ) -> Result<Infallible> {
        if !self.started {
            self.start(hw, sink)?;
        }
        info!("Entering control loop");
        loop {
            self.run_one(hw, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Name of the current state.
    pub fn state_name(&self) -> &'static str {
        self.fsm.current().name()
    }

    /// Cycles executed since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn fsm(&self) -> &Fsm {
        &self.fsm
    }
}
