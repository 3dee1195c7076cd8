//! DS1804 hardware abstraction layer
//!
//! Defines the two capabilities the potentiometer driver consumes from the
//! host board:
//!
//! - [`gpio::OutputLine`] - a digital line that can be switched to output
//!   and driven high or low
//! - [`DelayNs`] - a blocking delay, taken straight from `embedded-hal`
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ds1804-drivers (controller, exercise)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ds1804-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded-hal 1.0 board HAL         │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use embedded_hal::delay::DelayNs;
pub use gpio::{GpioLine, LineDirection, OutputLine};
