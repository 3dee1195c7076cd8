//! Controller traits
//!
//! These traits define the interface between application code and a
//! potentiometer driver.

pub mod potentiometer;

pub use potentiometer::{
    DigitalPotentiometer, Direction, MoveError, NonVolatilePotentiometer, PotError,
};
