//! Bus events
//!
//! Line changes on chip-select that move the bus between states.

/// Events that drive bus state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusEvent {
    /// Chip-select pulled low to clock a step
    Select,
    /// Chip-select released after a step
    Deselect,
    /// Store sequence started
    BeginLatch,
    /// Store window elapsed and chip-select released
    LatchComplete,
    /// A line failed; lines were driven back to idle as far as possible
    Fault,
}
