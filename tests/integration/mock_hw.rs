//! Mock board for integration tests.
//!
//! Records every port call in order so tests can assert on the full
//! emit → wait → sample history without touching real GPIO or timers.
//! Detector samples come from a script; once it runs dry the last value
//! repeats.

use std::collections::VecDeque;

use intersection::app::events::AppEvent;
use intersection::app::ports::{DetectorPort, DwellTimer, EventSink, SignalPort};
use intersection::error::InitError;
use intersection::fsm::signals::{OutputPattern, PedestrianLights, VehicleLights};

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    InitOutputs,
    InitInputs,
    Vehicle(VehicleLights),
    Pedestrian(PedestrianLights),
    Wait(u32),
    Read(u32),
}

// ── MockBoard ─────────────────────────────────────────────────

pub struct MockBoard {
    pub calls: Vec<HwCall>,
    inputs: VecDeque<u32>,
    last_input: u32,
    pub fail_outputs: bool,
    pub fail_inputs: bool,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            inputs: VecDeque::new(),
            last_input: 0,
            fail_outputs: false,
            fail_inputs: false,
        }
    }

    /// Board whose detectors return `inputs` one per cycle.
    pub fn scripted(inputs: &[u32]) -> Self {
        let mut board = Self::new();
        board.inputs.extend(inputs);
        board
    }

    pub fn push_input(&mut self, raw: u32) {
        self.inputs.push_back(raw);
    }

    /// Lamp state implied by the most recent writes to each group.
    pub fn showing(&self) -> OutputPattern {
        let mut out = OutputPattern::dark();
        for call in &self.calls {
            match *call {
                HwCall::Vehicle(v) => out.vehicle = v,
                HwCall::Pedestrian(p) => out.pedestrian = p,
                _ => {}
            }
        }
        out
    }

    /// Every pattern shown at the moment a wait began.
    pub fn patterns_at_wait(&self) -> Vec<OutputPattern> {
        let mut out = OutputPattern::dark();
        let mut seen = Vec::new();
        for call in &self.calls {
            match *call {
                HwCall::Vehicle(v) => out.vehicle = v,
                HwCall::Pedestrian(p) => out.pedestrian = p,
                HwCall::Wait(_) => seen.push(out),
                _ => {}
            }
        }
        seen
    }

    pub fn total_wait(&self) -> u64 {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::Wait(u) => Some(u64::from(*u)),
                _ => None,
            })
            .sum()
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalPort for MockBoard {
    fn init_outputs(&mut self) -> Result<(), InitError> {
        self.calls.push(HwCall::InitOutputs);
        if self.fail_outputs {
            return Err(InitError::Outputs("mock lamp driver offline"));
        }
        Ok(())
    }

    fn write_vehicle(&mut self, lights: VehicleLights) {
        self.calls.push(HwCall::Vehicle(lights));
    }

    fn write_pedestrian(&mut self, lights: PedestrianLights) {
        self.calls.push(HwCall::Pedestrian(lights));
    }
}

impl DetectorPort for MockBoard {
    fn init_inputs(&mut self) -> Result<(), InitError> {
        self.calls.push(HwCall::InitInputs);
        if self.fail_inputs {
            return Err(InitError::Inputs("mock detectors offline"));
        }
        Ok(())
    }

    fn read_inputs(&mut self) -> u32 {
        if let Some(raw) = self.inputs.pop_front() {
            self.last_input = raw;
        }
        self.calls.push(HwCall::Read(self.last_input));
        self.last_input
    }
}

impl DwellTimer for MockBoard {
    fn wait(&mut self, units: u32) {
        self.calls.push(HwCall::Wait(units));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// `(from_name, to_name)` for every state change, in order.
    pub fn changes(&self) -> Vec<(&'static str, &'static str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::StateChanged {
                    from_name, to_name, ..
                } => Some((*from_name, *to_name)),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
