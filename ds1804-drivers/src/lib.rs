//! DS1804 driver implementations
//!
//! This crate provides the concrete controller for the traits defined in
//! ds1804-core, plus the helpers built on top of it:
//!
//! - DS1804 controller (step pulses, absolute moves, EEPROM store)
//! - Voltage divider estimates for bench checks
//! - Exercise routine that sweeps the wiper and reports expected readings

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod divider;
pub mod exercise;
pub mod pot;

pub use divider::DividerEstimate;
pub use pot::Ds1804;
