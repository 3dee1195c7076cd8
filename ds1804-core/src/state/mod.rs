//! Chip-select bus state machine
//!
//! Models what the chip sees on its control lines. Every public controller
//! operation starts and ends in [`BusState::Idle`].

pub mod events;
pub mod machine;

pub use events::BusEvent;
pub use machine::BusState;
