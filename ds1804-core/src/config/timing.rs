//! Pulse timing
//!
//! The datasheet minimums for the increment pulse are in the tens of
//! nanoseconds, but host delays are rarely that precise. The step holds are
//! therefore a full millisecond, which is also the floor: a configuration may
//! lengthen any delay, never shorten it below what the chip needs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum chip-select to increment setup, µs
pub const MIN_SETUP_US: u32 = 1_000;

/// Minimum increment low hold, µs
pub const MIN_HOLD_US: u32 = 1_000;

/// Minimum settle time after a step, µs
pub const MIN_SETTLE_US: u32 = 1_000;

/// Minimum chip-select pulse that starts a store (tCPH), ns
pub const MIN_LATCH_PULSE_NS: u32 = 500;

/// Minimum non-volatile store window (tWST), ms
pub const MIN_STORE_MS: u32 = 10;

/// Minimum wait after power-up before the stored wiper is recalled, µs
pub const MIN_POWER_UP_US: u32 = 500;

/// Delays used by the pulse and store sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PulseTiming {
    /// Chip-select low to increment falling edge, µs
    pub setup_us: u32,
    /// Increment low hold before chip-select is released, µs
    pub hold_us: u32,
    /// Wait after a step before the next one may start, µs
    pub settle_us: u32,
    /// Short chip-select low pulse opening the store sequence, ns
    pub latch_pulse_ns: u32,
    /// Chip-select low hold while the wiper is written to EEPROM, ms
    pub store_ms: u32,
    /// Wait before the first line change after construction, µs
    pub power_up_us: u32,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            setup_us: MIN_SETUP_US,
            hold_us: MIN_HOLD_US,
            settle_us: MIN_SETTLE_US,
            latch_pulse_ns: 550,
            store_ms: MIN_STORE_MS,
            power_up_us: MIN_POWER_UP_US,
        }
    }
}

impl PulseTiming {
    /// Timing with every value raised to at least its floor
    pub fn effective(&self) -> Self {
        Self {
            setup_us: self.setup_us.max(MIN_SETUP_US),
            hold_us: self.hold_us.max(MIN_HOLD_US),
            settle_us: self.settle_us.max(MIN_SETTLE_US),
            latch_pulse_ns: self.latch_pulse_ns.max(MIN_LATCH_PULSE_NS),
            store_ms: self.store_ms.max(MIN_STORE_MS),
            power_up_us: self.power_up_us.max(MIN_POWER_UP_US),
        }
    }

    /// Check whether every value already meets its floor
    pub fn is_within_limits(&self) -> bool {
        *self == self.effective()
    }

    /// Total time of one step pulse, µs
    pub fn step_period_us(&self) -> u32 {
        self.setup_us
            .saturating_add(self.hold_us)
            .saturating_add(self.settle_us)
    }
}
