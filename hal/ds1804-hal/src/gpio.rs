//! Output line abstraction
//!
//! The potentiometer is driven over three plain GPIO lines. Some hosts hand
//! out pins whose direction still has to be declared at runtime, others
//! (typestate HALs) only hand out pins that are already outputs. The
//! [`OutputLine`] trait covers both.

use embedded_hal::digital::OutputPin;

/// Line direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineDirection {
    /// Line reads the external level
    Input,
    /// Line drives its level
    Output,
}

/// Digital output line
///
/// Implementations must apply level changes immediately; the driver relies
/// on the order of calls for its pulse timing.
pub trait OutputLine {
    /// Error reported by the underlying pin
    type Error;

    /// Declare the line direction
    fn set_direction(&mut self, direction: LineDirection) -> Result<(), Self::Error>;

    /// Drive the line to a logic level (`true` = high)
    fn set_level(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Configure the line as an output
    fn configure_output(&mut self) -> Result<(), Self::Error> {
        self.set_direction(LineDirection::Output)
    }

    /// Drive the line high
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(true)
    }

    /// Drive the line low
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(false)
    }
}

/// Adapter for any `embedded-hal` 1.0 output pin
///
/// Typestate pins are outputs by construction, so declaring the output
/// direction is a no-op. Asking for an input is not possible through
/// `OutputPin` and is ignored as well.
#[derive(Debug)]
pub struct GpioLine<P> {
    pin: P,
}

impl<P: OutputPin> GpioLine<P> {
    /// Wrap an output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OutputLine for GpioLine<P> {
    type Error = P::Error;

    fn set_direction(&mut self, _direction: LineDirection) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}
