//! The reference intersection and its table.
//!
//! Ten Moore states sequence a two-way intersection with a pedestrian
//! crossing.  Every state dwells 50 units (500 ms).  Input vector bits:
//! bit0 = east/west car, bit1 = north/south car, bit2 = pedestrian.
//!
//! ```text
//!            ┌──────────── AllRed ────────────┐
//!            │ NS car        │ EW car         │ ped
//!            ▼               ▼                ▼
//!        SouthGo ──▶ SouthWait   WestGo ──▶ WestWait     WalkOn
//!                                                          │
//!      DontWalkOn1 ─▶ DontWalkOff1 ─▶ DontWalkOn2 ─▶ DontWalkOff2 ─▶ (vehicle)
//! ```
//!
//! The rows below are the table exactly as tabulated, including WestGo,
//! which sends every pedestrian input through WestWait first rather than
//! straight to WalkOn.

use super::signals::{INPUT_SPACE, OutputPattern};
use super::table::{StateId, StateRow, StateTable};
use crate::error::TableError;

// ---------------------------------------------------------------------------
// Phase identity
// ---------------------------------------------------------------------------

/// Names of the reference table's rows, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    AllRed = 0,
    SouthGo = 1,
    SouthWait = 2,
    WestGo = 3,
    WestWait = 4,
    WalkOn = 5,
    DontWalkOn1 = 6,
    DontWalkOff1 = 7,
    DontWalkOn2 = 8,
    DontWalkOff2 = 9,
}

impl Phase {
    /// Total number of phases (the reference table's length).
    pub const COUNT: usize = 10;

    pub const ALL: [Self; Self::COUNT] = [
        Self::AllRed,
        Self::SouthGo,
        Self::SouthWait,
        Self::WestGo,
        Self::WestWait,
        Self::WalkOn,
        Self::DontWalkOn1,
        Self::DontWalkOff1,
        Self::DontWalkOn2,
        Self::DontWalkOff2,
    ];

    /// Convert a row index back to its phase.
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Phase of a state id issued by the reference table.
    pub fn of(id: StateId) -> Option<Self> {
        Self::from_index(id.index())
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::AllRed => "AllRed",
            Self::SouthGo => "SouthGo",
            Self::SouthWait => "SouthWait",
            Self::WestGo => "WestGo",
            Self::WestWait => "WestWait",
            Self::WalkOn => "WalkOn",
            Self::DontWalkOn1 => "DontWalkOn1",
            Self::DontWalkOff1 => "DontWalkOff1",
            Self::DontWalkOn2 => "DontWalkOn2",
            Self::DontWalkOff2 => "DontWalkOff2",
        }
    }

    /// Phases that give a vehicle direction right of way.
    pub const fn is_vehicle_go(self) -> bool {
        matches!(self, Self::SouthGo | Self::WestGo)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Table
// ═══════════════════════════════════════════════════════════════════════════

/// Dwell for every reference state, in 10 ms units.
pub const REFERENCE_DWELL: u32 = 50;

const fn row(phase: Phase, vehicle: u8, pedestrian: u8, next: [Phase; INPUT_SPACE]) -> StateRow {
    let mut targets = [0usize; INPUT_SPACE];
    let mut i = 0;
    while i < INPUT_SPACE {
        targets[i] = next[i] as usize;
        i += 1;
    }
    StateRow {
        name: phase.name(),
        output: OutputPattern::new(vehicle, pedestrian),
        dwell: REFERENCE_DWELL,
        next: targets,
    }
}

use Phase::{
    AllRed, DontWalkOff1, DontWalkOff2, DontWalkOn1, DontWalkOn2, SouthGo, SouthWait, WalkOn,
    WestGo, WestWait,
};

/// The reference rows.  Columns are input vectors `0b000` .. `0b111`.
#[rustfmt::skip]
pub const REFERENCE_ROWS: [StateRow; Phase::COUNT] = [
    row(AllRed, 0x24, 0x02, [AllRed, WestGo, SouthGo, SouthGo, WalkOn, WalkOn, WalkOn, WalkOn]),
    row(SouthGo, 0x21, 0x02, [SouthWait, SouthWait, SouthGo, SouthWait, SouthWait, SouthWait, SouthWait, SouthWait]),
    row(SouthWait, 0x22, 0x02, [AllRed, WestGo, AllRed, WestGo, WalkOn, WestGo, WalkOn, WestGo]),
    row(WestGo, 0x0C, 0x02, [WestGo, WestGo, WestWait, WestWait, WestWait, WestWait, WestWait, WestWait]),
    row(WestWait, 0x14, 0x02, [AllRed, AllRed, SouthGo, SouthGo, WalkOn, WalkOn, SouthGo, WalkOn]),
    row(WalkOn, 0x24, 0x08, [DontWalkOn1, DontWalkOn1, DontWalkOn1, DontWalkOn1, WalkOn, DontWalkOn1, DontWalkOn1, DontWalkOn1]),
    row(DontWalkOn1, 0x24, 0x02, [DontWalkOff1, DontWalkOff1, DontWalkOff1, DontWalkOff1, WalkOn, DontWalkOff1, DontWalkOff1, DontWalkOff1]),
    row(DontWalkOff1, 0x24, 0x00, [DontWalkOn2, DontWalkOn2, DontWalkOn2, DontWalkOn2, WalkOn, DontWalkOn2, DontWalkOn2, DontWalkOn2]),
    row(DontWalkOn2, 0x24, 0x02, [DontWalkOff2, DontWalkOff2, DontWalkOff2, DontWalkOff2, WalkOn, DontWalkOff2, DontWalkOff2, DontWalkOff2]),
    row(DontWalkOff2, 0x24, 0x00, [AllRed, WestGo, SouthGo, SouthGo, WalkOn, WestGo, SouthGo, SouthGo]),
];

/// Build and validate the reference table.  Called once at startup.
pub fn reference_table() -> Result<StateTable, TableError> {
    StateTable::new(&REFERENCE_ROWS)
}
