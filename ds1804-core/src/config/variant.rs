//! DS1804 chip variants
//!
//! The family comes in three end-to-end resistances. All of them have the
//! same 100-step wiper, so only the step size differs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of wiper steps between the low and high terminal
pub const STEP_COUNT: u8 = 100;

/// Supported DS1804 variants
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// DS1804-010, 10 kΩ
    Ds1804_010,
    /// DS1804-050, 50 kΩ
    Ds1804_050,
    /// DS1804-100, 100 kΩ
    Ds1804_100,
}

impl Variant {
    /// Look up a variant by its nominal resistance in kΩ
    ///
    /// Returns `None` for anything other than 10, 50 or 100.
    pub const fn from_kohm(kohm: u16) -> Option<Self> {
        match kohm {
            10 => Some(Variant::Ds1804_010),
            50 => Some(Variant::Ds1804_050),
            100 => Some(Variant::Ds1804_100),
            _ => None,
        }
    }

    /// Nominal end-to-end resistance in kΩ
    pub const fn kohm(self) -> u16 {
        match self {
            Variant::Ds1804_010 => 10,
            Variant::Ds1804_050 => 50,
            Variant::Ds1804_100 => 100,
        }
    }

    /// Nominal end-to-end resistance in ohms
    pub const fn max_ohms(self) -> u32 {
        self.kohm() as u32 * 1000
    }

    /// Resistance change per wiper step in ohms
    pub const fn step_ohms(self) -> u32 {
        self.max_ohms() / STEP_COUNT as u32
    }

    /// Number of wiper steps
    pub const fn step_count(self) -> u8 {
        STEP_COUNT
    }

    /// Maxim part number suffix
    pub const fn part_number(self) -> &'static str {
        match self {
            Variant::Ds1804_010 => "DS1804-010",
            Variant::Ds1804_050 => "DS1804-050",
            Variant::Ds1804_100 => "DS1804-100",
        }
    }
}
