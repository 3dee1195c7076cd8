//! Digital potentiometer traits
//!
//! Abstracts over step-driven potentiometers whose wiper position is tracked
//! in software. Resistances are in ohms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wiper step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward the high terminal (more resistance)
    Up,
    /// Toward the low terminal
    Down,
}

impl Direction {
    /// Level of the up/down line for this direction (high = up)
    pub fn level(self) -> bool {
        self == Direction::Up
    }
}

/// Errors from planning a move, before any line is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveError {
    /// Target outside `[0, max_ohms]`
    OutOfRange,
    /// Wiper position has not been established
    UnknownPosition,
}

/// Errors reported by a potentiometer driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PotError<E> {
    /// Unsupported chip capacity at construction
    InvalidVariant,
    /// Requested resistance outside the chip's range
    OutOfRange,
    /// Relative move requested before a reference position exists
    UnknownPosition,
    /// An output line failed
    Line(E),
}

impl<E> From<MoveError> for PotError<E> {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::OutOfRange => PotError::OutOfRange,
            MoveError::UnknownPosition => PotError::UnknownPosition,
        }
    }
}

/// Trait for step-driven digital potentiometers
pub trait DigitalPotentiometer {
    /// Driver error type
    type Error;

    /// Send one wiper step
    ///
    /// The step is always sent. A tracked position saturates at the ends
    /// instead of failing.
    fn step(&mut self, direction: Direction) -> Result<(), Self::Error>;

    /// Move the wiper to an absolute resistance in ohms
    ///
    /// Requires a known position. Moving to the current position sends
    /// nothing.
    fn move_to(&mut self, target_ohms: u32) -> Result<(), Self::Error>;

    /// Drive the wiper to the top terminal so the position becomes known
    fn establish_reference(&mut self) -> Result<(), Self::Error>;

    /// Current tracked resistance in ohms, `None` if unknown
    fn position_ohms(&self) -> Option<u32>;

    /// End-to-end resistance in ohms
    fn max_ohms(&self) -> u32;

    /// Resistance per step in ohms
    fn step_ohms(&self) -> u32;

    /// Number of steps between the terminals
    fn step_count(&self) -> u8;

    /// Check if the wiper position is known
    fn is_referenced(&self) -> bool {
        self.position_ohms().is_some()
    }
}

/// Extended trait for potentiometers with a non-volatile wiper store
pub trait NonVolatilePotentiometer: DigitalPotentiometer {
    /// Move to `target_ohms` from a known extreme and store the position
    /// as the power-up default
    fn commit(&mut self, target_ohms: u32) -> Result<(), Self::Error>;
}
