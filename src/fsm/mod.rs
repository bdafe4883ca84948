//! Table-driven Moore finite state machine engine.
//!
//! Classic embedded table FSM expressed in safe Rust:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  StateTable (arena, immutable)                                │
//! │  ┌────┬──────────────┬────────┬───────┬──────────────────────┐ │
//! │  │ id │ name         │ output │ dwell │ next[input]          │ │
//! │  ├────┼──────────────┼────────┼───────┼──────────────────────┤ │
//! │  │ 0  │ AllRed       │ 24/02  │ 50    │ 0 3 1 1 5 5 5 5      │ │
//! │  │ 1  │ SouthGo      │ 21/02  │ 50    │ 2 2 1 2 2 2 2 2      │ │
//! │  │ .. │ ..           │ ..     │ ..    │ ..                   │ │
//! │  └────┴──────────────┴────────┴───────┴──────────────────────┘ │
//! └───────────────────────────────────────────────────────────────┘
//!                 ▲
//!                 │ current: StateId
//!               [Fsm]
//! ```
//!
//! Output depends only on the current state.  The next state is a direct
//! indexed lookup `table[current].next[mask(input)]`: O(1), no search, and
//! total because the table was validated at construction.  The engine owns
//! the cursor; there is no global state.

pub mod signals;
pub mod states;
pub mod table;

use log::{debug, info};

use crate::error::TableError;
use signals::{InputVector, OutputPattern};
use table::{State, StateId, StateTable};

// ---------------------------------------------------------------------------
// Transition record
// ---------------------------------------------------------------------------

/// What a single [`Fsm::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    /// The sample as read from the detectors.
    pub raw_input: u32,
    /// The sample after masking; the column actually used.
    pub input: InputVector,
}

impl Transition {
    /// `true` when the step moved to a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// `true` when the raw sample carried bits outside the input width.
    pub fn masked(&self) -> bool {
        self.raw_input != u32::from(self.input.bits())
    }
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Owns the state table and the index of the current state.
pub struct Fsm {
    table: StateTable,
    current: StateId,
    /// Steps taken since construction (wraps at u64::MAX).
    step_count: u64,
}

impl Fsm {
    /// Construct the engine over `table`, starting at row `start`.
    pub fn new(table: StateTable, start: usize) -> Result<Self, TableError> {
        let current = table.id(start).ok_or(TableError::InvalidStart {
            index: start,
            len: table.len(),
        })?;
        info!(
            "FSM ready: {} states, starting in {}",
            table.len(),
            table.record(current).name()
        );
        Ok(Self {
            table,
            current,
            step_count: 0,
        })
    }

    /// Set the cursor to row `start`.
    ///
    /// The cursor is left untouched if `start` is not a row of the table.
    pub fn initialize(&mut self, start: usize) -> Result<(), TableError> {
        self.current = self.table.id(start).ok_or(TableError::InvalidStart {
            index: start,
            len: self.table.len(),
        })?;
        info!("FSM initialised to {}", self.current().name());
        Ok(())
    }

    /// Sample-driven advance: mask `raw_input`, look up the successor of the
    /// current state, and move the cursor there.
    pub fn step(&mut self, raw_input: u32) -> Transition {
        let input = InputVector::mask(raw_input);
        let from = self.current;
        let to = self.table.record(from).next(input);

        self.current = to;
        self.step_count = self.step_count.wrapping_add(1);

        if from != to {
            debug!(
                "FSM transition: {} -> {} on {}",
                self.table.record(from).name(),
                self.table.record(to).name(),
                input
            );
        }

        Transition {
            from,
            to,
            raw_input,
            input,
        }
    }

    /// Pure lookup: where `state` would go on `raw_input`.  Does not move
    /// the cursor.  `None` when `state` does not belong to this table.
    pub fn next_state(&self, state: StateId, raw_input: u32) -> Option<StateId> {
        self.table.lookup(state, InputVector::mask(raw_input))
    }

    /// Name of any state in this table.
    pub fn state_name(&self, id: StateId) -> Option<&'static str> {
        self.table.state(id).map(State::name)
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// The current state's full record.
    pub fn current(&self) -> &State {
        self.table.record(self.current)
    }

    /// Pattern the current state asserts.
    pub fn output(&self) -> OutputPattern {
        self.current().output()
    }

    /// Dwell time of the current state, in dwell units.
    pub fn dwell(&self) -> u32 {
        self.current().dwell()
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Steps taken since construction.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}
