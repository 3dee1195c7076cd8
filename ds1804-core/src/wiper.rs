//! Wiper position tracking
//!
//! The DS1804 has no way to read the wiper back, so its position is a
//! software model: a tap index that follows every pulse sent to the chip.
//! Resistances are in ohms and always a whole number of taps.

use crate::config::Variant;
use crate::traits::{Direction, MoveError};

/// Number of steps to cover `diff_ohms`, rounded to nearest with ties away
/// from zero
pub const fn steps_for(diff_ohms: u32, step_ohms: u32) -> u32 {
    (diff_ohms + step_ohms / 2) / step_ohms
}

/// A planned relative move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MovePlan {
    /// Direction of every pulse in the move
    pub direction: Direction,
    /// Number of pulses to send
    pub steps: u32,
}

impl MovePlan {
    /// Check if the move sends no pulses
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }
}

/// Tracked wiper position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WiperTracker {
    variant: Variant,
    /// Current tap, `None` until a reference is established
    tap: Option<u8>,
}

impl WiperTracker {
    /// Tracker with an unknown position
    pub const fn unknown(variant: Variant) -> Self {
        Self { variant, tap: None }
    }

    /// Tracker at a known resistance, snapped to the nearest tap
    pub fn at_ohms(variant: Variant, ohms: u32) -> Result<Self, MoveError> {
        if ohms > variant.max_ohms() {
            return Err(MoveError::OutOfRange);
        }
        let tap = steps_for(ohms, variant.step_ohms()) as u8;
        Ok(Self {
            variant,
            tap: Some(tap),
        })
    }

    /// Chip variant being tracked
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current tap index
    pub fn tap(&self) -> Option<u8> {
        self.tap
    }

    /// Current resistance in ohms
    pub fn position_ohms(&self) -> Option<u32> {
        self.tap.map(|tap| tap as u32 * self.variant.step_ohms())
    }

    /// Check if the position is known
    pub fn is_known(&self) -> bool {
        self.tap.is_some()
    }

    /// Record one pulse
    ///
    /// The tap saturates at both ends; the chip does the same with the
    /// physical wiper. Unknown positions stay unknown.
    pub fn record_step(&mut self, direction: Direction) {
        let top = self.variant.step_count();
        if let Some(tap) = self.tap.as_mut() {
            match direction {
                Direction::Up if *tap < top => *tap += 1,
                Direction::Down if *tap > 0 => *tap -= 1,
                _ => {}
            }
        }
    }

    /// Mark the wiper as sitting at the top terminal
    pub fn set_top(&mut self) {
        self.tap = Some(self.variant.step_count());
    }

    /// Forget the position
    pub fn invalidate(&mut self) {
        self.tap = None;
    }

    /// Check that a target lies within the chip's range
    pub fn check_target(&self, target_ohms: u32) -> Result<(), MoveError> {
        if target_ohms > self.variant.max_ohms() {
            Err(MoveError::OutOfRange)
        } else {
            Ok(())
        }
    }

    /// Plan a relative move from the current position to `target_ohms`
    pub fn plan_move(&self, target_ohms: u32) -> Result<MovePlan, MoveError> {
        self.check_target(target_ohms)?;
        let current = self.position_ohms().ok_or(MoveError::UnknownPosition)?;

        let (direction, diff) = if target_ohms >= current {
            (Direction::Up, target_ohms - current)
        } else {
            (Direction::Down, current - target_ohms)
        };

        Ok(MovePlan {
            direction,
            steps: steps_for(diff, self.variant.step_ohms()),
        })
    }

    /// Number of down pulses from the top terminal to `target_ohms`
    pub fn descent_from_top(&self, target_ohms: u32) -> Result<u32, MoveError> {
        self.check_target(target_ohms)?;
        Ok(steps_for(
            self.variant.max_ohms() - target_ohms,
            self.variant.step_ohms(),
        ))
    }
}
