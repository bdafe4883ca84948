//! Signal and detector line assignments for the intersection board.
//!
//! Single source of truth: the signal types, the GPIO adapter and the
//! reference table all reference this module rather than hard-coding bit
//! positions.  Change a line here and it propagates everywhere.
//!
//! Output group 1 drives the six vehicle lamps, output group 2 the two
//! pedestrian lamps.  The three detector lines form the input vector.

// ---------------------------------------------------------------------------
// Vehicle signal group (six lamps, one bit each)
// ---------------------------------------------------------------------------

/// East/west facing red lamp.
pub const EW_RED_BIT: u8 = 0x20;
/// East/west facing yellow lamp.
pub const EW_YELLOW_BIT: u8 = 0x10;
/// East/west facing green lamp.
pub const EW_GREEN_BIT: u8 = 0x08;
/// North/south facing red lamp.
pub const NS_RED_BIT: u8 = 0x04;
/// North/south facing yellow lamp.
pub const NS_YELLOW_BIT: u8 = 0x02;
/// North/south facing green lamp.
pub const NS_GREEN_BIT: u8 = 0x01;

/// All six vehicle lamp bits.
pub const VEHICLE_MASK: u8 = 0x3F;

/// Vehicle lamp bits in output-line order (line 0 first).
pub const VEHICLE_LINES: [u8; 6] = [
    NS_GREEN_BIT,
    NS_YELLOW_BIT,
    NS_RED_BIT,
    EW_GREEN_BIT,
    EW_YELLOW_BIT,
    EW_RED_BIT,
];

// ---------------------------------------------------------------------------
// Pedestrian signal group
// ---------------------------------------------------------------------------

/// "Walk" lamp (green).
pub const WALK_BIT: u8 = 0x08;
/// "Don't walk" lamp (red).
pub const DONT_WALK_BIT: u8 = 0x02;

/// Both pedestrian lamp bits.
pub const PEDESTRIAN_MASK: u8 = WALK_BIT | DONT_WALK_BIT;

/// Pedestrian lamp bits in output-line order.
pub const PEDESTRIAN_LINES: [u8; 2] = [DONT_WALK_BIT, WALK_BIT];

// ---------------------------------------------------------------------------
// Detector lines (input vector)
// ---------------------------------------------------------------------------

/// East/west car detector, HIGH = car present.
pub const EW_CAR_BIT: u8 = 0x01;
/// North/south car detector, HIGH = car present.
pub const NS_CAR_BIT: u8 = 0x02;
/// Pedestrian push-button detector, HIGH = pedestrian waiting.
pub const PEDESTRIAN_BIT: u8 = 0x04;

/// Number of detector lines feeding the input vector.
pub const INPUT_BITS: u32 = 3;

/// Detector bits in input-line order (bit 0 first).
pub const DETECTOR_LINES: [u8; INPUT_BITS as usize] = [EW_CAR_BIT, NS_CAR_BIT, PEDESTRIAN_BIT];

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Dwell times are tabulated in units of this many milliseconds.
pub const DWELL_UNIT_MS: u32 = 10;
