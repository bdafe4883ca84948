//! Output patterns and the sampled input vector.
//!
//! A Moore state asserts one [`OutputPattern`]: a vehicle lamp group and a
//! pedestrian lamp group.  The two groups are separate bit-fields with
//! separate types, so building or writing one can never disturb the other
//! even when a board later multiplexes them onto a single register.
//!
//! [`InputVector`] is the detector sample after masking to the table's
//! input width.  It is the only value the engine ever indexes with.

use core::fmt;
use core::ops::BitOr;

use crate::pins;

// ---------------------------------------------------------------------------
// Vehicle lamp group
// ---------------------------------------------------------------------------

/// Six-bit vehicle lamp pattern (see [`pins`] for bit positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VehicleLights(u8);

impl VehicleLights {
    pub const OFF: Self = Self(0);
    pub const EW_RED: Self = Self(pins::EW_RED_BIT);
    pub const EW_YELLOW: Self = Self(pins::EW_YELLOW_BIT);
    pub const EW_GREEN: Self = Self(pins::EW_GREEN_BIT);
    pub const NS_RED: Self = Self(pins::NS_RED_BIT);
    pub const NS_YELLOW: Self = Self(pins::NS_YELLOW_BIT);
    pub const NS_GREEN: Self = Self(pins::NS_GREEN_BIT);

    /// Build from raw bits.  Bits outside the six lamp lines are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & pins::VEHICLE_MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for VehicleLights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Display for VehicleLights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lamp = |lit: bool, c: char| if lit { c } else { '.' };
        write!(
            f,
            "EW[{}{}{}] NS[{}{}{}]",
            lamp(self.contains(Self::EW_RED), 'R'),
            lamp(self.contains(Self::EW_YELLOW), 'Y'),
            lamp(self.contains(Self::EW_GREEN), 'G'),
            lamp(self.contains(Self::NS_RED), 'R'),
            lamp(self.contains(Self::NS_YELLOW), 'Y'),
            lamp(self.contains(Self::NS_GREEN), 'G'),
        )
    }
}

// ---------------------------------------------------------------------------
// Pedestrian lamp group
// ---------------------------------------------------------------------------

/// Pedestrian lamp pattern: "walk" and "don't walk".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PedestrianLights(u8);

impl PedestrianLights {
    pub const OFF: Self = Self(0);
    pub const WALK: Self = Self(pins::WALK_BIT);
    pub const DONT_WALK: Self = Self(pins::DONT_WALK_BIT);

    /// Build from raw bits.  Bits outside the two lamp lines are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & pins::PEDESTRIAN_MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn walk(self) -> bool {
        self.0 & pins::WALK_BIT != 0
    }

    pub const fn dont_walk(self) -> bool {
        self.0 & pins::DONT_WALK_BIT != 0
    }
}

impl BitOr for PedestrianLights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for PedestrianLights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.walk(), self.dont_walk()) {
            (true, true) => write!(f, "PED[WALK+DONT]"),
            (true, false) => write!(f, "PED[WALK]"),
            (false, true) => write!(f, "PED[DONT WALK]"),
            (false, false) => write!(f, "PED[----]"),
        }
    }
}

// ---------------------------------------------------------------------------
// Output pattern
// ---------------------------------------------------------------------------

/// Everything a state asserts while it is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutputPattern {
    pub vehicle: VehicleLights,
    pub pedestrian: PedestrianLights,
}

impl OutputPattern {
    /// Build from the raw register images of the two groups.
    pub const fn new(vehicle: u8, pedestrian: u8) -> Self {
        Self {
            vehicle: VehicleLights::from_bits(vehicle),
            pedestrian: PedestrianLights::from_bits(pedestrian),
        }
    }

    /// Every lamp dark.
    pub const fn dark() -> Self {
        Self {
            vehicle: VehicleLights::OFF,
            pedestrian: PedestrianLights::OFF,
        }
    }
}

impl fmt::Display for OutputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vehicle, self.pedestrian)
    }
}

// ---------------------------------------------------------------------------
// Input vector
// ---------------------------------------------------------------------------

/// Number of distinct input vectors, `2^INPUT_BITS`.  Every state carries
/// exactly this many transition entries.
pub const INPUT_SPACE: usize = 1 << pins::INPUT_BITS;

/// A detector sample masked to `[0, INPUT_SPACE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputVector(u8);

impl InputVector {
    /// Mask a raw sample to the valid input width.
    ///
    /// Glitching sensor lines may set bits above the table's range; those are
    /// discarded here so the lookup index is always in bounds.
    pub const fn mask(raw: u32) -> Self {
        Self((raw & (INPUT_SPACE as u32 - 1)) as u8)
    }

    /// Table column for this vector.  Always `< INPUT_SPACE`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn ew_car(self) -> bool {
        self.0 & pins::EW_CAR_BIT != 0
    }

    pub const fn ns_car(self) -> bool {
        self.0 & pins::NS_CAR_BIT != 0
    }

    pub const fn pedestrian(self) -> bool {
        self.0 & pins::PEDESTRIAN_BIT != 0
    }

    /// Every vector in column order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..INPUT_SPACE as u32).map(Self::mask)
    }
}

impl fmt::Display for InputVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{:03b}", self.0)
    }
}

/// Free-function form of [`InputVector::mask`].
pub const fn mask_input(raw: u32) -> InputVector {
    InputVector::mask(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_bits_outside_group_are_dropped() {
        assert_eq!(VehicleLights::from_bits(0xFF).bits(), 0x3F);
        assert_eq!(PedestrianLights::from_bits(0xFF).bits(), 0x0A);
    }

    #[test]
    fn groups_stay_independent() {
        let p = OutputPattern::new(0x24, 0x08);
        assert_eq!(p.vehicle.bits(), 0x24);
        assert_eq!(p.pedestrian.bits(), 0x08);
        assert!(p.vehicle.contains(VehicleLights::EW_RED));
        assert!(p.vehicle.contains(VehicleLights::NS_RED));
        assert!(p.pedestrian.walk());
        assert!(!p.pedestrian.dont_walk());
    }

    #[test]
    fn mask_keeps_low_three_bits() {
        assert_eq!(mask_input(0b1010).bits(), 0b010);
        assert_eq!(mask_input(u32::MAX).index(), INPUT_SPACE - 1);
        assert_eq!(mask_input(0).index(), 0);
    }

    #[test]
    fn input_vector_decodes_detectors() {
        let v = mask_input(0b101);
        assert!(v.ew_car());
        assert!(!v.ns_car());
        assert!(v.pedestrian());
    }

    #[test]
    fn all_covers_input_space_in_order() {
        let indices: Vec<usize> = InputVector::all().map(InputVector::index).collect();
        assert_eq!(indices, (0..INPUT_SPACE).collect::<Vec<_>>());
    }

    #[test]
    fn display_renders_lamps() {
        let p = OutputPattern::new(0x21, 0x02);
        assert_eq!(p.to_string(), "EW[R..] NS[..G] PED[DONT WALK]");
        assert_eq!(mask_input(0b010).to_string(), "0b010");
    }
}
