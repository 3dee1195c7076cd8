//! Bus state definition

use super::events::BusEvent;

/// Control bus states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusState {
    /// Chip-select high, increment high; the chip ignores the other lines
    #[default]
    Idle,
    /// Chip-select low in the middle of a step pulse
    Operating,
    /// Store sequence in progress; wiper being written to EEPROM
    Latching,
}

impl BusState {
    /// Check if the chip is deselected
    pub fn is_idle(&self) -> bool {
        *self == BusState::Idle
    }

    /// Check if a step may be started from this state
    pub fn can_step(&self) -> bool {
        self.is_idle()
    }

    /// Process an event and return the next state
    pub fn transition(self, event: BusEvent) -> Self {
        use BusEvent::*;
        use BusState::*;

        match (self, event) {
            (Idle, Select) => Operating,
            (Operating, Deselect) => Idle,

            // Store is only entered between steps
            (Idle, BeginLatch) => Latching,
            (Latching, LatchComplete) => Idle,

            (_, Fault) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
