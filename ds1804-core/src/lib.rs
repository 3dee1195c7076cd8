//! Board-agnostic core for DS1804 digital potentiometers
//!
//! This crate contains everything about the chip that does not touch a pin:
//!
//! - Chip variants and their step geometry
//! - Pulse timing configuration with the datasheet floors
//! - Wiper tap math (resistance to steps, clamping)
//! - The chip-select bus state machine
//! - Controller traits and the error taxonomy

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod state;
pub mod traits;
pub mod wiper;
