//! The state arena.
//!
//! A [`StateTable`] is an immutable, ordered sequence of [`State`] records.
//! Transitions are [`StateId`]s, plain indices into the same sequence, so
//! no state ever owns another.  Tables are described by [`StateRow`]s with
//! raw `usize` targets and validated once in [`StateTable::new`]; after that
//! every id the table issues is in range.  Public lookups still return
//! `Option`, because nothing stops a caller handing in an id that another,
//! larger table issued.
//!
//! ```text
//!  StateRow[] ──validate──▶ StateTable
//!                           ┌────┬──────┬────────┬───────┬──────────────┐
//!                           │ id │ name │ output │ dwell │ next[0..8]   │
//!                           ├────┼──────┼────────┼───────┼──────────────┤
//!                           │ 0  │ ...  │ 24/02  │ 50    │ StateId × 8  │
//!                           └────┴──────┴────────┴───────┴──────────────┘
//! ```

use core::fmt;

use heapless::Vec;

use super::signals::{INPUT_SPACE, InputVector, OutputPattern};
use crate::error::TableError;

/// Arena capacity.  Fixed so the table lives without a heap.
pub const MAX_STATES: usize = 16;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Index of a state inside the table that issued it.
///
/// Only [`StateTable`] mints ids, and only for rows it holds, so an id is
/// always a valid index into its own table.  Other tables refuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u8);

impl StateId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Table description (unchecked)
// ---------------------------------------------------------------------------

/// One unchecked row of a table description.
#[derive(Debug, Clone, Copy)]
pub struct StateRow {
    pub name: &'static str,
    pub output: OutputPattern,
    /// Dwell time in dwell units (10 ms by default).
    pub dwell: u32,
    /// Next-state index for every input vector.
    pub next: [usize; INPUT_SPACE],
}

// ---------------------------------------------------------------------------
// Validated state
// ---------------------------------------------------------------------------

/// A validated Moore state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    id: StateId,
    name: &'static str,
    output: OutputPattern,
    dwell: u32,
    next: [StateId; INPUT_SPACE],
}

impl State {
    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn output(&self) -> OutputPattern {
        self.output
    }

    pub fn dwell(&self) -> u32 {
        self.dwell
    }

    /// Successor for a masked input vector.
    pub fn next(&self, input: InputVector) -> StateId {
        self.next[input.index()]
    }

    /// The whole transition row, in input-vector order.
    pub fn transitions(&self) -> &[StateId; INPUT_SPACE] {
        &self.next
    }
}

// ---------------------------------------------------------------------------
// StateTable
// ---------------------------------------------------------------------------

/// Immutable, validated state arena.
#[derive(Debug, Clone)]
pub struct StateTable {
    states: Vec<State, MAX_STATES>,
}

impl StateTable {
    /// Validate `rows` and build the arena.
    ///
    /// Rejects an empty table, more rows than [`MAX_STATES`], and any
    /// transition entry that points past the last row.
    pub fn new(rows: &[StateRow]) -> Result<Self, TableError> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }
        if rows.len() > MAX_STATES {
            return Err(TableError::TooManyStates {
                count: rows.len(),
                max: MAX_STATES,
            });
        }

        let mut states = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let mut next = [StateId(0); INPUT_SPACE];
            for (input, &target) in row.next.iter().enumerate() {
                if target >= rows.len() {
                    return Err(TableError::DanglingTransition {
                        state: index,
                        input,
                        target,
                    });
                }
                next[input] = StateId(target as u8);
            }

            let state = State {
                id: StateId(index as u8),
                name: row.name,
                output: row.output,
                dwell: row.dwell,
                next,
            };
            // Length already checked against MAX_STATES.
            if states.push(state).is_err() {
                return Err(TableError::TooManyStates {
                    count: rows.len(),
                    max: MAX_STATES,
                });
            }
        }

        Ok(Self { states })
    }

    /// Number of states.  Never zero.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Convert a raw index into an id, if the table holds that row.
    pub fn id(&self, index: usize) -> Option<StateId> {
        (index < self.states.len()).then(|| StateId(index as u8))
    }

    /// The record for `id`, or `None` if `id` was issued by a larger table.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    /// Direct indexed lookup: `table[id].next[input]`.
    pub fn lookup(&self, id: StateId, input: InputVector) -> Option<StateId> {
        self.state(id).map(|s| s.next(input))
    }

    /// Record for an id this table issued itself (a cursor seeded by
    /// [`id`](Self::id) or taken from one of its own transition rows).
    pub(crate) fn record(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    /// Look up a state by name.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states.iter().find(|s| s.name == name).map(|s| s.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }
}
